pub mod a001_user;
pub mod a002_pool_user;
pub mod a003_transaction;
pub mod a004_withdrawal;
pub mod a005_investment;
pub mod a006_airdrop;
pub mod a007_burning;
pub mod a008_team;
pub mod a009_blog;
pub mod common;

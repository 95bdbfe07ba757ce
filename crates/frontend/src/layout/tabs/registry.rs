//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_pool_user::ui::list::PoolUserList;
use crate::domain::a003_transaction::ui::list::TransactionList;
use crate::domain::a004_withdrawal::ui::list::WithdrawalList;
use crate::domain::a005_investment::ui::list::InvestmentList;
use crate::domain::a006_airdrop::ui::list::AirdropList;
use crate::domain::a007_burning::ui::list::BurningPage;
use crate::domain::a008_team::ui::list::TeamList;
use crate::domain::a009_blog::ui::list::BlogList;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Для неизвестных ключей возвращает placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_user" => view! { <UserList /> }.into_any(),
        "a002_pool_user" => view! { <PoolUserList /> }.into_any(),
        "a003_transaction" => view! { <TransactionList /> }.into_any(),
        "a004_withdrawal" => view! { <WithdrawalList /> }.into_any(),
        "a005_investment" => view! { <InvestmentList /> }.into_any(),
        "a006_airdrop" => view! { <AirdropList /> }.into_any(),
        "a007_burning" => view! { <BurningPage /> }.into_any(),
        "a008_team" => view! { <TeamList /> }.into_any(),
        "a009_blog" => view! { <BlogList /> }.into_any(),
        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

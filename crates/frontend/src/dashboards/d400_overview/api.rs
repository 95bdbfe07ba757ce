use contracts::domain::a007_burning::aggregate::BurnStats;
use contracts::shared::api::{ApiError, ListShape};
use contracts::shared::remote_table::ListParams;
use serde_json::Value;

use crate::shared::http::{decode_result, fetch_list, get_json, ListEndpoint};

const USERS: ListEndpoint = ListEndpoint::new("admin/listUser", ListShape::Flat);
const POOL_USERS: ListEndpoint = ListEndpoint::new("admin/listPoolUser", ListShape::Flat);
const BURN_STATS_PATH: &str = "admin/burning-stats";

/// Общее число строк списка: запрашивается одна строка, итог берется из metadata
async fn list_total(endpoint: &ListEndpoint, token: Option<&str>) -> Result<u64, ApiError> {
    let (page, _) = fetch_list::<Value>(endpoint, &ListParams::new(1, 1), token).await?;
    Ok(page.total_rows)
}

pub async fn get_total_users(token: Option<&str>) -> Result<u64, ApiError> {
    list_total(&USERS, token).await
}

pub async fn get_total_pool_ids(token: Option<&str>) -> Result<u64, ApiError> {
    list_total(&POOL_USERS, token).await
}

pub async fn get_burn_stats(token: Option<&str>) -> Result<BurnStats, ApiError> {
    let body = get_json(BURN_STATS_PATH, token).await?;
    let result = decode_result::<Value>(body)?;
    Ok(BurnStats::from_result(&result))
}

//! HTTP helpers for the admin API
//!
//! Every call goes through `gloo-net`, attaches the session token as the `token`
//! header and turns non-success responses into [`ApiError`] using the backend's
//! `responseMessage`.

use contracts::shared::api::envelope::parse_list_page;
use contracts::shared::api::{ApiEnvelope, ApiError, ListShape};
use contracts::shared::remote_table::{ListParams, PageResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_utils::api_url;

/// Описание списочного endpoint-а для удаленной таблицы
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListEndpoint {
    pub path: &'static str,
    pub shape: ListShape,
    /// Имя query-параметра категориального фильтра, если он есть
    pub category_param: Option<&'static str>,
    /// Параметры, которые всегда добавляются к запросу (например `status=burned`)
    pub fixed_params: &'static [(&'static str, &'static str)],
}

impl ListEndpoint {
    pub const fn new(path: &'static str, shape: ListShape) -> Self {
        Self {
            path,
            shape,
            category_param: None,
            fixed_params: &[],
        }
    }

    pub const fn with_category(mut self, param: &'static str) -> Self {
        self.category_param = Some(param);
        self
    }

    pub const fn with_fixed(mut self, params: &'static [(&'static str, &'static str)]) -> Self {
        self.fixed_params = params;
        self
    }

    fn url(&self, params: &ListParams) -> String {
        let mut params = params.clone();
        for (key, value) in self.fixed_params {
            params.insert(key, *value);
        }
        params.append_to(&api_url(self.path))
    }
}

fn with_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("token", token),
        None => builder,
    }
}

async fn read_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        let err = ApiError::from_error_body(status, &body);
        log::warn!("{} -> {}: {}", response.url(), status, err);
        return Err(err);
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send(builder: RequestBuilder) -> Result<Value, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Value, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::NotAuthenticated)
}

/// GET с токеном, возвращает разобранное тело ответа
pub async fn get_json(path: &str, token: Option<&str>) -> Result<Value, ApiError> {
    let token = require_token(token)?;
    let url = api_url(path);
    log::debug!("GET {}", url);
    send(with_token(Request::get(&url), Some(token))).await
}

/// POST без обязательного токена (шаги входа)
pub async fn post_public<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    send_json(Request::post(&url), body).await
}

pub async fn post_json<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<Value, ApiError> {
    let token = require_token(token)?;
    let url = api_url(path);
    log::debug!("POST {}", url);
    send_json(with_token(Request::post(&url), Some(token)), body).await
}

pub async fn put_json<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<Value, ApiError> {
    let token = require_token(token)?;
    let url = api_url(path);
    log::debug!("PUT {}", url);
    send_json(with_token(Request::put(&url), Some(token)), body).await
}

/// DELETE, параметры уже в `path` (`admin/delete-blog?_id=...`)
pub async fn delete(path: &str, token: Option<&str>) -> Result<Value, ApiError> {
    let token = require_token(token)?;
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    send(with_token(Request::delete(&url), Some(token))).await
}

/// Разбирает `{ responseMessage, result }` и достает `result`
pub fn decode_result<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let envelope: ApiEnvelope<T> =
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope
        .result
        .ok_or_else(|| ApiError::Decode("response has no result".to_string()))
}

/// Сообщение об успехе из тела ответа или `default`
pub fn success_message(body: &Value, default: &str) -> String {
    body.get("responseMessage")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Загружает одну страницу списка
pub async fn fetch_list<R: DeserializeOwned>(
    endpoint: &ListEndpoint,
    params: &ListParams,
    token: Option<&str>,
) -> Result<(PageResult<R>, Value), ApiError> {
    let token = require_token(token)?;
    let url = endpoint.url(params);
    log::debug!("GET {}", url);
    let body = send(with_token(Request::get(&url), Some(token))).await?;
    let page = parse_list_page::<R>(&body, endpoint.shape)?;
    let block = page.block.clone();
    Ok((PageResult::from_list_page(page), block))
}

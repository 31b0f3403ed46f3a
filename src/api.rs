//! REST Client
//!
//! Thin wrappers over the Pessoa backend endpoints. Each returns a typed
//! result; the store layer folds failures into slice state.

use reqwest::{Client, Response};
use thiserror::Error;

use crate::models::{Pessoa, SearchField};

const API_URL: &str = "api/pessoas";
const API_CHECK_EXISTS: &str = "api/check-exists/";
const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Paged list response: one server page plus the full count from the
/// `x-total-count` header.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub items: Vec<Pessoa>,
    pub total_items: u64,
}

/// Zero-based page request for the list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u64,
    pub size: u64,
    pub sort: String,
}

/// Origin-relative base, so the app talks to whichever host serves it
fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

fn url(path: &str) -> String {
    format!("{}/{}", api_base(), path)
}

fn list_query(params: Option<&ListParams>) -> Vec<(String, String)> {
    match params {
        Some(p) => vec![
            ("page".to_string(), p.page.to_string()),
            ("size".to_string(), p.size.to_string()),
            ("sort".to_string(), p.sort.clone()),
        ],
        None => Vec::new(),
    }
}

fn ensure_ok(resp: &Response) -> Result<(), ApiError> {
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status().as_u16()))
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn decode(err: reqwest::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

fn total_items(resp: &Response) -> Option<u64> {
    resp.headers()
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

/// GET a page of entities
pub async fn list(params: Option<&ListParams>) -> Result<ListPage, ApiError> {
    let resp = Client::new()
        .get(url(API_URL))
        .query(&list_query(params))
        .query(&[("cacheBuster", js_sys::Date::now() as u64)])
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&resp)?;
    let total = total_items(&resp);
    let items: Vec<Pessoa> = resp.json().await.map_err(decode)?;
    let total = total.unwrap_or(items.len() as u64);
    Ok(ListPage {
        items,
        total_items: total,
    })
}

/// GET a filtered list from the field-specific search endpoint
pub async fn search(field: SearchField, term: &str) -> Result<Vec<Pessoa>, ApiError> {
    let mut req = Client::new().get(url(field.endpoint()));
    if !term.is_empty() {
        req = req.query(&[(field.param(), term)]);
    }
    let resp = req.send().await.map_err(transport)?;
    ensure_ok(&resp)?;
    resp.json().await.map_err(decode)
}

/// GET a single entity
pub async fn get_one(id: i64) -> Result<Pessoa, ApiError> {
    let resp = Client::new()
        .get(url(&format!("{}/{}", API_URL, id)))
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&resp)?;
    resp.json().await.map_err(decode)
}

/// POST a new entity; the response carries the server-assigned id
pub async fn create(entity: &Pessoa) -> Result<Pessoa, ApiError> {
    let resp = Client::new()
        .post(url(API_URL))
        .json(entity)
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&resp)?;
    resp.json().await.map_err(decode)
}

/// PUT the full entity
pub async fn update(entity: &Pessoa) -> Result<Pessoa, ApiError> {
    let id = entity.id.ok_or(ApiError::Transport("missing id".to_string()))?;
    let resp = Client::new()
        .put(url(&format!("{}/{}", API_URL, id)))
        .json(entity)
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&resp)?;
    resp.json().await.map_err(decode)
}

/// PATCH a subset of fields
pub async fn partial_update(entity: &Pessoa) -> Result<Pessoa, ApiError> {
    let id = entity.id.ok_or(ApiError::Transport("missing id".to_string()))?;
    let resp = Client::new()
        .patch(url(&format!("{}/{}", API_URL, id)))
        .json(entity)
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&resp)?;
    resp.json().await.map_err(decode)
}

/// Hard DELETE
pub async fn delete(id: i64) -> Result<(), ApiError> {
    let resp = Client::new()
        .delete(url(&format!("{}/{}", API_URL, id)))
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&resp)
}

/// GET whether a Cpf is already taken
pub async fn check_exists(cpf: &str) -> Result<bool, ApiError> {
    let resp = Client::new()
        .get(url(&format!("{}{}", API_CHECK_EXISTS, cpf)))
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&resp)?;
    resp.json().await.map_err(decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_with_params() {
        let params = ListParams {
            page: 2,
            size: 20,
            sort: "name,asc".to_string(),
        };
        assert_eq!(
            list_query(Some(&params)),
            vec![
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "20".to_string()),
                ("sort".to_string(), "name,asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_defaults_to_bare_request() {
        assert!(list_query(None).is_empty());
    }
}

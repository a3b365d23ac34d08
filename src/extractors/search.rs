//! Search criteria from the query string.
//!
//! `version` may repeat and each occurrence may hold a comma-separated list.
//! Empty values count as absent; unknown keys are ignored. `name` and `version`
//! are matched verbatim, so surrounding whitespace is kept.

use crate::error::AppError;
use crate::search::SearchFilter;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct SearchQuery(pub SearchFilter);

#[async_trait]
impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse_search_params(pairs).map(SearchQuery)
    }
}

pub fn parse_search_params(pairs: Vec<(String, String)>) -> Result<SearchFilter, AppError> {
    let mut filter = SearchFilter::default();
    for (k, v) in pairs {
        match k.as_str() {
            "name" => {
                if !v.is_empty() {
                    filter.name = Some(v);
                }
            }
            "version" => {
                filter.versions.extend(
                    v.split(',')
                        .filter(|s| !s.is_empty())
                        .map(String::from),
                );
            }
            "deprecationDateAfter" => filter.deprecation_date_after = parse_date(&k, v.trim())?,
            "deprecationDateBefore" => filter.deprecation_date_before = parse_date(&k, v.trim())?,
            "minHypeLevel" => filter.min_hype_level = parse_int(&k, v.trim())?,
            "maxHypeLevel" => filter.max_hype_level = parse_int(&k, v.trim())?,
            _ => {}
        }
    }
    Ok(filter)
}

fn parse_date(key: &str, v: &str) -> Result<Option<NaiveDate>, AppError> {
    if v.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(v, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("{} must be an ISO date (YYYY-MM-DD)", key)))
}

fn parse_int(key: &str, v: &str) -> Result<Option<i32>, AppError> {
    if v.is_empty() {
        return Ok(None);
    }
    v.parse()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("{} must be an integer", key)))
}

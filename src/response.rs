//! Success response helpers. Bodies are the bare record or list.

use axum::{
    http::{header, StatusCode},
    Json,
};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 201 with a `Location` header pointing at the new resource.
pub fn created<T: Serialize>(
    location: String,
    data: T,
) -> (StatusCode, [(header::HeaderName, String); 1], Json<T>) {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
}

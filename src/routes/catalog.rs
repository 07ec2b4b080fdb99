//! Operator catalog routes.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, OperatorEntry};

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub operators: &'static [OperatorEntry],
}

fn to_response(category: Category) -> CategoryResponse {
    CategoryResponse {
        key: category.key(),
        title: category.title(),
        icon: category.icon(),
        operators: category.entries(),
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub operator: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub category: &'static str,
    #[serde(flatten)]
    pub entry: OperatorEntry,
}

/// `GET /api/catalog` — every category in display order.
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(Category::ALL.into_iter().map(to_response).collect())
}

/// `GET /api/catalog/:category` — one category by key.
pub async fn get_category(Path(key): Path<String>) -> Result<Json<CategoryResponse>, StatusCode> {
    Category::from_key(&key)
        .map(|c| Json(to_response(c)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/catalog/lookup?operator=..` — entry details for one token.
pub async fn lookup_operator(Query(params): Query<LookupParams>) -> Result<Json<LookupResponse>, StatusCode> {
    let (category, entry) = catalog::find(&params.operator).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(LookupResponse { category: category.key(), entry: *entry }))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

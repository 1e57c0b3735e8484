//! Handlers for `/countries` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/countries` | |
//! | `POST`   | `/countries` | 201 + `Location` header |
//! | `GET`    | `/countries/:id` | 404 if not found |
//! | `PUT`    | `/countries/:id` | 400 if path id ≠ body id; 404 if absent |
//! | `DELETE` | `/countries/:id` | 404 if absent; cascades to companies and contacts |
//! | `GET`    | `/countries/:id/company-statistics` | 404 if the country has no companies |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use corpdir_core::{
  entity::{CompanyStats, Country, NewCountry},
  store::DirectoryStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /countries`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Country>>, ApiError>
where
  S: DirectoryStore,
{
  let countries = store
    .list_countries()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(countries))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /countries/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Country>, ApiError>
where
  S: DirectoryStore,
{
  let country = store
    .get_country(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("country {id} not found")))?;
  Ok(Json(country))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /countries` — body: `{"name":"Sweden"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewCountry>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DirectoryStore,
{
  let country = store
    .add_country(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let location = format!("/countries/{}", country.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(country),
  ))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /countries/:id` — the body carries the full replacement row.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<Country>,
) -> Result<StatusCode, ApiError>
where
  S: DirectoryStore,
{
  if id != body.id {
    return Err(ApiError::BadRequest(format!(
      "path id {id} does not match body id {}",
      body.id
    )));
  }
  let changed = store
    .update_country(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if changed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("country {id} not found")))
  }
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /countries/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: DirectoryStore,
{
  let removed = store
    .delete_country(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if removed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("country {id} not found")))
  }
}

// ─── Statistics ───────────────────────────────────────────────────────────────

/// `GET /countries/:id/company-statistics`
///
/// One row per company in the country with its contact count; companies with
/// no contacts appear with a count of 0. An empty result is a 404, matching
/// the behaviour of the filter endpoint.
pub async fn stats<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<CompanyStats>>, ApiError>
where
  S: DirectoryStore,
{
  let stats = store
    .company_stats_by_country(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if stats.is_empty() {
    return Err(ApiError::NotFound(
      "no companies found for this country".to_string(),
    ));
  }
  Ok(Json(stats))
}

//! Handlers for `/companies` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/companies` | Id + name summaries |
//! | `POST`   | `/companies` | 201 + `Location` header |
//! | `GET`    | `/companies/:id` | 404 if not found |
//! | `PUT`    | `/companies/:id` | 400 if path id ≠ body id; 404 if absent |
//! | `DELETE` | `/companies/:id` | 404 if absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use corpdir_core::{
  entity::{Company, CompanySummary, NewCompany},
  store::DirectoryStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /companies`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<CompanySummary>>, ApiError>
where
  S: DirectoryStore,
{
  let companies = store
    .list_companies()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(companies))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /companies/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Company>, ApiError>
where
  S: DirectoryStore,
{
  let company = store
    .get_company(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("company {id} not found")))?;
  Ok(Json(company))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /companies` — body: `{"name":"Acme","country_id":1}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewCompany>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DirectoryStore,
{
  let company = store
    .add_company(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let location = format!("/companies/{}", company.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(company),
  ))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /companies/:id` — the body carries the full replacement row.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<Company>,
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
    .update_company(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if changed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("company {id} not found")))
  }
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /companies/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: DirectoryStore,
{
  let removed = store
    .delete_company(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if removed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("company {id} not found")))
  }
}

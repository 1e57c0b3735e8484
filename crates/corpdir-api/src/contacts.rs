//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Id + name summaries |
//! | `POST`   | `/contacts` | 201 + `Location` header |
//! | `GET`    | `/contacts/:id` | Summary shape; 404 if not found |
//! | `PUT`    | `/contacts/:id` | 400 if path id ≠ body id; 404 if absent |
//! | `DELETE` | `/contacts/:id` | 404 if absent |
//! | `GET`    | `/contacts/contacts-with-company-and-country` | Detail shape |
//! | `GET`    | `/contacts/:country_id/:company_id/filter-contacts` | 404 if empty |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use corpdir_core::{
  entity::{Contact, ContactDetail, ContactSummary, NewContact},
  store::DirectoryStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ContactSummary>>, ApiError>
where
  S: DirectoryStore,
{
  let contacts = store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<ContactSummary>, ApiError>
where
  S: DirectoryStore,
{
  let contact = store
    .get_contact(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — body: `{"name":"Alice","company_id":1,"country_id":2}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DirectoryStore,
{
  let contact = store
    .add_contact(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let location = format!("/contacts/{}", contact.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(contact),
  ))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — the body carries the full replacement row.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<Contact>,
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
    .update_contact(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if changed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("contact {id} not found")))
  }
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: DirectoryStore,
{
  let removed = store
    .delete_contact(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if removed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("contact {id} not found")))
  }
}

// ─── Enriched list ────────────────────────────────────────────────────────────

/// `GET /contacts/contacts-with-company-and-country`
pub async fn with_company_and_country<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ContactDetail>>, ApiError>
where
  S: DirectoryStore,
{
  let details = store
    .list_contact_details()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(details))
}

// ─── Filter ───────────────────────────────────────────────────────────────────

/// `GET /contacts/:country_id/:company_id/filter-contacts`
///
/// Conjunctive exact-match filter; an empty result is a 404.
pub async fn filter<S>(
  State(store): State<Arc<S>>,
  Path((country_id, company_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<ContactDetail>>, ApiError>
where
  S: DirectoryStore,
{
  let contacts = store
    .filter_contacts(country_id, company_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if contacts.is_empty() {
    return Err(ApiError::NotFound(
      "no contacts found for this country and company".to_string(),
    ));
  }
  Ok(Json(contacts))
}

//! JSON REST API for the corpdir directory service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`corpdir_core::store::DirectoryStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = corpdir_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod companies;
pub mod contacts;
pub mod countries;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use corpdir_core::store::DirectoryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Each request borrows the shared store handle; the
/// store itself scopes units of work per call.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DirectoryStore + 'static,
{
  Router::new()
    // Companies
    .route(
      "/companies",
      get(companies::list::<S>).post(companies::create::<S>),
    )
    .route(
      "/companies/{id}",
      get(companies::get_one::<S>)
        .put(companies::update::<S>)
        .delete(companies::delete::<S>),
    )
    // Countries
    .route(
      "/countries",
      get(countries::list::<S>).post(countries::create::<S>),
    )
    .route(
      "/countries/{id}",
      get(countries::get_one::<S>)
        .put(countries::update::<S>)
        .delete(countries::delete::<S>),
    )
    .route("/countries/{id}/company-statistics", get(countries::stats::<S>))
    // Contacts — the static segment must be registered alongside the capture;
    // axum gives it precedence over `/contacts/{id}`.
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/contacts-with-company-and-country",
      get(contacts::with_company_and_country::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete::<S>),
    )
    .route(
      "/contacts/{country_id}/{company_id}/filter-contacts",
      get(contacts::filter::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

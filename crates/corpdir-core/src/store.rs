//! The `DirectoryStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `corpdir-store-sqlite`).
//! Higher layers (`corpdir-api`, `corpdir-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::entity::{
  Company, CompanyStats, CompanySummary, Contact, ContactDetail,
  ContactSummary, Country, NewCompany, NewContact, NewCountry,
};

/// Abstraction over a directory storage backend.
///
/// Every operation is a single unit of work: one round trip (or a small fixed
/// number) to the store, no retries. "Not found" is part of the result shape
/// (`None` from gets, `false` from updates and deletes), never an error; the
/// associated `Error` is reserved for genuine persistence failures such as
/// connectivity loss or a constraint violation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DirectoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Countries ─────────────────────────────────────────────────────────

  /// List all countries in insertion order.
  fn list_countries(
    &self,
  ) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;

  /// Retrieve a country by id. Returns `None` if not found.
  fn get_country(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send + '_;

  /// Create a country and return it with its store-assigned id.
  fn add_country(
    &self,
    input: NewCountry,
  ) -> impl Future<Output = Result<Country, Self::Error>> + Send + '_;

  /// Replace the row with `country.id`. Returns `true` iff a row changed.
  fn update_country(
    &self,
    country: Country,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete a country by id, cascading to its companies and contacts.
  /// Returns `false` (idempotently) when the id is absent.
  fn delete_country(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Per-company contact counts for one country.
  ///
  /// One row per company with that `country_id`, each with the number of
  /// contacts belonging to it. Companies with zero contacts are included
  /// with a count of 0.
  fn company_stats_by_country(
    &self,
    country_id: i64,
  ) -> impl Future<Output = Result<Vec<CompanyStats>, Self::Error>> + Send + '_;

  // ── Companies ─────────────────────────────────────────────────────────

  /// List all companies in insertion order, as id + name summaries.
  fn list_companies(
    &self,
  ) -> impl Future<Output = Result<Vec<CompanySummary>, Self::Error>> + Send + '_;

  /// Retrieve a company by id. Returns `None` if not found.
  fn get_company(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Company>, Self::Error>> + Send + '_;

  /// Create a company and return it with its store-assigned id.
  /// Fails with a persistence error if `country_id` references no country.
  fn add_company(
    &self,
    input: NewCompany,
  ) -> impl Future<Output = Result<Company, Self::Error>> + Send + '_;

  /// Replace the row with `company.id`. Returns `true` iff a row changed.
  fn update_company(
    &self,
    company: Company,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete a company by id, cascading to its contacts.
  /// Returns `false` (idempotently) when the id is absent.
  fn delete_company(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// List all contacts in insertion order, as id + name summaries.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactSummary>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id, as an id + name summary.
  /// Returns `None` if not found.
  fn get_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<ContactSummary>, Self::Error>> + Send + '_;

  /// Create a contact and return it with its store-assigned id.
  /// Fails with a persistence error on a dangling foreign key.
  fn add_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Replace the row with `contact.id`. Returns `true` iff a row changed.
  fn update_contact(
    &self,
    contact: Contact,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete a contact by id. Returns `false` (idempotently) when absent.
  fn delete_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// All contacts with their company and country resolved.
  fn list_contact_details(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactDetail>, Self::Error>> + Send + '_;

  /// Contacts whose `country_id` AND `company_id` both match exactly.
  /// Returns an empty vec (not an error) when nothing matches.
  fn filter_contacts(
    &self,
    country_id: i64,
    company_id: i64,
  ) -> impl Future<Output = Result<Vec<ContactDetail>, Self::Error>> + Send + '_;
}

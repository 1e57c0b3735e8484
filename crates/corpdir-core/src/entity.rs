//! Entity and result-shape types for the directory.
//!
//! Entities carry integer surrogate keys assigned by the store on insert.
//! Relationships are expressed as explicit foreign-key fields; back-references
//! are resolved by join at query time, never embedded, so there are no
//! ownership cycles between entities.
//!
//! Queries that return less (or more) than a full row have their own shape:
//! a `*Summary` is the id + name projection used by the plain list and get
//! operations, and [`ContactDetail`] is the enriched shape with the related
//! company and country resolved. Callers can tell from the type alone which
//! fields are populated.

use serde::{Deserialize, Serialize};

// ─── Countries ───────────────────────────────────────────────────────────────

/// A country. The smallest entity; its summary projection is itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub id:   i64,
  pub name: String,
}

/// Input for creating a country; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCountry {
  pub name: String,
}

// ─── Companies ───────────────────────────────────────────────────────────────

/// A company, optionally located in a country.
///
/// `country_id` is nullable: a company may exist before its country is known.
/// When set it must reference an existing country, and deleting that country
/// deletes the company (and, transitively, the company's contacts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
  pub id:         i64,
  pub name:       String,
  pub country_id: Option<i64>,
}

/// The id + name projection returned by company list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
  pub id:   i64,
  pub name: String,
}

/// Input for creating a company; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompany {
  pub name:       String,
  pub country_id: Option<i64>,
}

// ─── Contacts ────────────────────────────────────────────────────────────────

/// A contact, owned by at most one company and one country.
/// Deleting either owner deletes the contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         i64,
  pub name:       String,
  pub company_id: Option<i64>,
  pub country_id: Option<i64>,
}

/// The id + name projection returned by contact list and get operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummary {
  pub id:   i64,
  pub name: String,
}

/// A contact with its company and country resolved by join.
///
/// A `None` here means the foreign key is unset (or, for a dangling key that
/// the store's constraints should have prevented, unresolvable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
  pub id:      i64,
  pub name:    String,
  pub company: Option<CompanySummary>,
  pub country: Option<Country>,
}

/// Input for creating a contact; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
  pub name:       String,
  pub company_id: Option<i64>,
  pub country_id: Option<i64>,
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// One row of the per-country company statistics: a company's name and how
/// many contacts it has. Companies with no contacts appear with a count of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyStats {
  pub company_name:  String,
  pub contact_count: i64,
}

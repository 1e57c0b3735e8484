//! Core types and trait definitions for the corpdir directory service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entity;
pub mod store;

pub use entity::{
  Company, CompanyStats, CompanySummary, Contact, ContactDetail,
  ContactSummary, Country, NewCompany, NewContact, NewCountry,
};
pub use store::DirectoryStore;

//! SQL schema for the corpdir SQLite store.
//!
//! The whole batch runs every time a store opens; `CREATE TABLE IF NOT
//! EXISTS` makes the reruns harmless. `PRAGMA user_version` stamps the
//! schema revision so a later migration step has a number to compare
//! against.

/// Schema DDL, applied unconditionally at open.
///
/// All relationship and cascade rules live here, not in application code:
/// deleting a country removes its companies and contacts, deleting a company
/// removes its contacts. `foreign_keys` must stay ON for the cascades (and
/// the referential checks on insert/update) to fire.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS countries (
    country_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS companies (
    company_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    country_id  INTEGER REFERENCES countries(country_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS contacts (
    contact_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    company_id  INTEGER REFERENCES companies(company_id) ON DELETE CASCADE,
    country_id  INTEGER REFERENCES countries(country_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS companies_country_idx ON companies(country_id);
CREATE INDEX IF NOT EXISTS contacts_company_idx  ON contacts(company_id);
CREATE INDEX IF NOT EXISTS contacts_country_idx  ON contacts(country_id);

PRAGMA user_version = 1;
";

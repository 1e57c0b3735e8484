//! [`SqliteStore`] — the SQLite implementation of [`DirectoryStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use corpdir_core::{
  entity::{
    Company, CompanyStats, CompanySummary, Contact, ContactDetail,
    ContactSummary, Country, NewCompany, NewContact, NewCountry,
  },
  store::DirectoryStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A directory store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Each clone
/// issues its calls against the same connection, which serialises them; a
/// request-scoped unit of work is therefore just a clone of the handle.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row mappers ─────────────────────────────────────────────────────────────

fn country_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Country> {
  Ok(Country { id: row.get(0)?, name: row.get(1)? })
}

fn company_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Company> {
  Ok(Company {
    id:         row.get(0)?,
    name:       row.get(1)?,
    country_id: row.get(2)?,
  })
}

fn company_summary_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<CompanySummary> {
  Ok(CompanySummary { id: row.get(0)?, name: row.get(1)? })
}

fn contact_summary_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<ContactSummary> {
  Ok(ContactSummary { id: row.get(0)?, name: row.get(1)? })
}

/// Maps the 6-column enriched contact select. The joined company and country
/// columns are NULL when the foreign key is unset, so each pair is rebuilt
/// only when both halves are present.
fn contact_detail_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<ContactDetail> {
  let company_id: Option<i64> = row.get(2)?;
  let company_name: Option<String> = row.get(3)?;
  let country_id: Option<i64> = row.get(4)?;
  let country_name: Option<String> = row.get(5)?;

  Ok(ContactDetail {
    id:      row.get(0)?,
    name:    row.get(1)?,
    company: company_id
      .zip(company_name)
      .map(|(id, name)| CompanySummary { id, name }),
    country: country_id
      .zip(country_name)
      .map(|(id, name)| Country { id, name }),
  })
}

const CONTACT_DETAIL_SELECT: &str = "SELECT
     ct.contact_id, ct.name,
     co.company_id, co.name,
     cn.country_id, cn.name
   FROM contacts ct
   LEFT JOIN companies co ON co.company_id = ct.company_id
   LEFT JOIN countries cn ON cn.country_id = ct.country_id";

// ─── DirectoryStore impl ─────────────────────────────────────────────────────

impl DirectoryStore for SqliteStore {
  type Error = Error;

  // ── Countries ─────────────────────────────────────────────────────────────

  async fn list_countries(&self) -> Result<Vec<Country>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT country_id, name FROM countries ORDER BY country_id",
        )?;
        let rows = stmt
          .query_map([], country_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_country(&self, id: i64) -> Result<Option<Country>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT country_id, name FROM countries WHERE country_id = ?1",
              rusqlite::params![id],
              country_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn add_country(&self, input: NewCountry) -> Result<Country> {
    let country = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO countries (name) VALUES (?1)",
          rusqlite::params![input.name],
        )?;
        Ok(Country { id: conn.last_insert_rowid(), name: input.name })
      })
      .await?;
    Ok(country)
  }

  async fn update_country(&self, country: Country) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE countries SET name = ?2 WHERE country_id = ?1",
          rusqlite::params![country.id, country.name],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn delete_country(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM countries WHERE country_id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn company_stats_by_country(
    &self,
    country_id: i64,
  ) -> Result<Vec<CompanyStats>> {
    let rows = self
      .conn
      .call(move |conn| {
        // Group from companies and LEFT JOIN to contacts, so a company with
        // no contacts still yields a row with COUNT() = 0. Grouping from
        // contacts would silently drop it.
        let mut stmt = conn.prepare(
          "SELECT co.name, COUNT(ct.contact_id)
           FROM companies co
           LEFT JOIN contacts ct ON ct.company_id = co.company_id
           WHERE co.country_id = ?1
           GROUP BY co.company_id
           ORDER BY co.company_id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![country_id], |row| {
            Ok(CompanyStats {
              company_name:  row.get(0)?,
              contact_count: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  // ── Companies ─────────────────────────────────────────────────────────────

  async fn list_companies(&self) -> Result<Vec<CompanySummary>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT company_id, name FROM companies ORDER BY company_id",
        )?;
        let rows = stmt
          .query_map([], company_summary_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_company(&self, id: i64) -> Result<Option<Company>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT company_id, name, country_id
               FROM companies WHERE company_id = ?1",
              rusqlite::params![id],
              company_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn add_company(&self, input: NewCompany) -> Result<Company> {
    let company = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO companies (name, country_id) VALUES (?1, ?2)",
          rusqlite::params![input.name, input.country_id],
        )?;
        Ok(Company {
          id:         conn.last_insert_rowid(),
          name:       input.name,
          country_id: input.country_id,
        })
      })
      .await?;
    Ok(company)
  }

  async fn update_company(&self, company: Company) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE companies SET name = ?2, country_id = ?3
           WHERE company_id = ?1",
          rusqlite::params![company.id, company.name, company.country_id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn delete_company(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM companies WHERE company_id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn list_contacts(&self) -> Result<Vec<ContactSummary>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT contact_id, name FROM contacts ORDER BY contact_id",
        )?;
        let rows = stmt
          .query_map([], contact_summary_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_contact(&self, id: i64) -> Result<Option<ContactSummary>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT contact_id, name FROM contacts WHERE contact_id = ?1",
              rusqlite::params![id],
              contact_summary_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn add_contact(&self, input: NewContact) -> Result<Contact> {
    let contact = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (name, company_id, country_id)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![input.name, input.company_id, input.country_id],
        )?;
        Ok(Contact {
          id:         conn.last_insert_rowid(),
          name:       input.name,
          company_id: input.company_id,
          country_id: input.country_id,
        })
      })
      .await?;
    Ok(contact)
  }

  async fn update_contact(&self, contact: Contact) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts SET name = ?2, company_id = ?3, country_id = ?4
           WHERE contact_id = ?1",
          rusqlite::params![
            contact.id,
            contact.name,
            contact.company_id,
            contact.country_id,
          ],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn delete_contact(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE contact_id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn list_contact_details(&self) -> Result<Vec<ContactDetail>> {
    let rows = self
      .conn
      .call(|conn| {
        let sql = format!("{CONTACT_DETAIL_SELECT} ORDER BY ct.contact_id");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], contact_detail_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn filter_contacts(
    &self,
    country_id: i64,
    company_id: i64,
  ) -> Result<Vec<ContactDetail>> {
    let rows = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "{CONTACT_DETAIL_SELECT}
           WHERE ct.country_id = ?1 AND ct.company_id = ?2
           ORDER BY ct.contact_id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![country_id, company_id],
            contact_detail_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

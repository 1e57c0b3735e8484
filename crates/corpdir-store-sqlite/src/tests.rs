//! Integration tests for `SqliteStore` against an in-memory database.

use corpdir_core::{
  entity::{Company, Contact, Country, NewCompany, NewContact, NewCountry},
  store::DirectoryStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn add_country(s: &SqliteStore, name: &str) -> Country {
  s.add_country(NewCountry { name: name.into() }).await.unwrap()
}

async fn add_company(
  s: &SqliteStore,
  name: &str,
  country_id: Option<i64>,
) -> Company {
  s.add_company(NewCompany { name: name.into(), country_id })
    .await
    .unwrap()
}

async fn add_contact(
  s: &SqliteStore,
  name: &str,
  company_id: Option<i64>,
  country_id: Option<i64>,
) -> Contact {
  s.add_contact(NewContact { name: name.into(), company_id, country_id })
    .await
    .unwrap()
}

// ─── Countries ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_country() {
  let s = store().await;

  let country = add_country(&s, "Sweden").await;
  assert!(country.id > 0);

  let fetched = s.get_country(country.id).await.unwrap();
  assert_eq!(fetched, Some(country));
}

#[tokio::test]
async fn get_country_missing_returns_none() {
  let s = store().await;
  assert_eq!(s.get_country(42).await.unwrap(), None);
}

#[tokio::test]
async fn list_countries_in_insertion_order() {
  let s = store().await;
  add_country(&s, "Sweden").await;
  add_country(&s, "Norway").await;
  add_country(&s, "Denmark").await;

  let all = s.list_countries().await.unwrap();
  let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Sweden", "Norway", "Denmark"]);
}

#[tokio::test]
async fn update_country_changes_row() {
  let s = store().await;
  let mut country = add_country(&s, "Swedn").await;

  country.name = "Sweden".into();
  assert!(s.update_country(country.clone()).await.unwrap());
  assert_eq!(s.get_country(country.id).await.unwrap(), Some(country));
}

#[tokio::test]
async fn update_country_missing_returns_false_and_creates_nothing() {
  let s = store().await;
  let phantom = Country { id: 99, name: "Atlantis".into() };

  assert!(!s.update_country(phantom).await.unwrap());
  assert!(s.list_countries().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_country_missing_is_idempotent_false() {
  let s = store().await;
  assert!(!s.delete_country(7).await.unwrap());
  assert!(!s.delete_country(7).await.unwrap());
}

// ─── Companies ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_company() {
  let s = store().await;
  let country = add_country(&s, "Sweden").await;

  let company = add_company(&s, "Acme", Some(country.id)).await;
  let fetched = s.get_company(company.id).await.unwrap();
  assert_eq!(fetched, Some(company));
}

#[tokio::test]
async fn add_company_without_country() {
  let s = store().await;
  let company = add_company(&s, "Stateless Ltd", None).await;
  assert_eq!(
    s.get_company(company.id).await.unwrap().unwrap().country_id,
    None
  );
}

#[tokio::test]
async fn add_company_with_dangling_country_fails() {
  let s = store().await;
  let result = s
    .add_company(NewCompany { name: "Orphan".into(), country_id: Some(404) })
    .await;
  assert!(result.is_err());
}

#[tokio::test]
async fn list_companies_returns_summaries() {
  let s = store().await;
  let country = add_country(&s, "Sweden").await;
  add_company(&s, "Acme", Some(country.id)).await;
  add_company(&s, "Beta", None).await;

  let all = s.list_companies().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].name, "Acme");
  assert_eq!(all[1].name, "Beta");
}

#[tokio::test]
async fn update_company_missing_returns_false() {
  let s = store().await;
  let phantom = Company { id: 99, name: "Ghost".into(), country_id: None };
  assert!(!s.update_company(phantom).await.unwrap());
  assert!(s.list_companies().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_company_cascades_to_contacts() {
  let s = store().await;
  let country = add_country(&s, "Sweden").await;
  let company = add_company(&s, "Acme", Some(country.id)).await;
  let a = add_contact(&s, "Alice", Some(company.id), Some(country.id)).await;
  let b = add_contact(&s, "Bob", Some(company.id), Some(country.id)).await;
  let other = add_contact(&s, "Carol", None, Some(country.id)).await;

  assert!(s.delete_company(company.id).await.unwrap());

  assert_eq!(s.get_contact(a.id).await.unwrap(), None);
  assert_eq!(s.get_contact(b.id).await.unwrap(), None);
  // A contact not referencing the company survives.
  assert!(s.get_contact(other.id).await.unwrap().is_some());
}

// ─── Contacts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_contact_returns_summary() {
  let s = store().await;
  let country = add_country(&s, "Sweden").await;
  let company = add_company(&s, "Acme", Some(country.id)).await;

  let contact =
    add_contact(&s, "Alice", Some(company.id), Some(country.id)).await;

  let fetched = s.get_contact(contact.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, contact.id);
  assert_eq!(fetched.name, "Alice");
}

#[tokio::test]
async fn add_contact_with_dangling_company_fails() {
  let s = store().await;
  let result = s
    .add_contact(NewContact {
      name:       "Orphan".into(),
      company_id: Some(404),
      country_id: None,
    })
    .await;
  assert!(result.is_err());
}

#[tokio::test]
async fn update_contact_missing_returns_false() {
  let s = store().await;
  let phantom = Contact {
    id:         99,
    name:       "Ghost".into(),
    company_id: None,
    country_id: None,
  };
  assert!(!s.update_contact(phantom).await.unwrap());
  assert!(s.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_contact_missing_is_idempotent_false() {
  let s = store().await;
  assert!(!s.delete_contact(1).await.unwrap());
  assert!(!s.delete_contact(1).await.unwrap());
}

#[tokio::test]
async fn contact_details_resolve_company_and_country() {
  let s = store().await;
  let country = add_country(&s, "Sweden").await;
  let company = add_company(&s, "Acme", Some(country.id)).await;
  add_contact(&s, "Alice", Some(company.id), Some(country.id)).await;
  add_contact(&s, "Bob", None, None).await;

  let details = s.list_contact_details().await.unwrap();
  assert_eq!(details.len(), 2);

  let alice = &details[0];
  assert_eq!(alice.name, "Alice");
  assert_eq!(alice.company.as_ref().unwrap().name, "Acme");
  assert_eq!(alice.country.as_ref().unwrap().name, "Sweden");

  // Unset foreign keys come back as None, not as an error.
  let bob = &details[1];
  assert!(bob.company.is_none());
  assert!(bob.country.is_none());
}

#[tokio::test]
async fn filter_contacts_requires_both_keys_to_match() {
  let s = store().await;
  let sweden = add_country(&s, "Sweden").await;
  let norway = add_country(&s, "Norway").await;
  let acme = add_company(&s, "Acme", Some(sweden.id)).await;
  let beta = add_company(&s, "Beta", Some(norway.id)).await;

  add_contact(&s, "Alice", Some(acme.id), Some(sweden.id)).await;
  add_contact(&s, "Bob", Some(acme.id), Some(norway.id)).await;
  add_contact(&s, "Carol", Some(beta.id), Some(sweden.id)).await;

  let matched = s.filter_contacts(sweden.id, acme.id).await.unwrap();
  assert_eq!(matched.len(), 1);
  assert_eq!(matched[0].name, "Alice");

  // Changing either key to a non-matching value yields empty, not an error.
  assert!(s.filter_contacts(norway.id, beta.id).await.unwrap().is_empty());
  assert!(s.filter_contacts(999, acme.id).await.unwrap().is_empty());
}

// ─── Statistics ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn company_stats_include_zero_contact_companies() {
  let s = store().await;
  let country = add_country(&s, "Sweden").await;
  add_company(&s, "Acme", Some(country.id)).await;
  let beta = add_company(&s, "Beta", Some(country.id)).await;
  add_contact(&s, "Bea One", Some(beta.id), Some(country.id)).await;
  add_contact(&s, "Bea Two", Some(beta.id), Some(country.id)).await;

  let stats = s.company_stats_by_country(country.id).await.unwrap();

  // One row per company in the country, not per contact.
  assert_eq!(stats.len(), 2);
  let acme_row = stats.iter().find(|r| r.company_name == "Acme").unwrap();
  let beta_row = stats.iter().find(|r| r.company_name == "Beta").unwrap();
  assert_eq!(acme_row.contact_count, 0);
  assert_eq!(beta_row.contact_count, 2);

  // Companies elsewhere do not leak in.
  let other = add_country(&s, "Norway").await;
  assert!(s.company_stats_by_country(other.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_country_cascades_to_companies_and_contacts() {
  let s = store().await;
  let country = add_country(&s, "Sweden").await;
  let acme = add_company(&s, "Acme", Some(country.id)).await;
  let beta = add_company(&s, "Beta", Some(country.id)).await;
  let contact =
    add_contact(&s, "Bea", Some(beta.id), Some(country.id)).await;

  assert!(s.delete_country(country.id).await.unwrap());

  assert_eq!(s.get_company(acme.id).await.unwrap(), None);
  assert_eq!(s.get_company(beta.id).await.unwrap(), None);
  assert_eq!(s.get_contact(contact.id).await.unwrap(), None);
}

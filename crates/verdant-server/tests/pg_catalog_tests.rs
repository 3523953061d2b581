//! PostgreSQL backend integration tests
//!
//! These run against a live PostgreSQL instance named by `DATABASE_URL` and
//! are ignored by default; run them with `cargo test -- --ignored` once a
//! database is available. Coverage mirrors the storage contract the route
//! suite exercises against the in-memory backend:
//!
//! - CRUD round trips for both entities
//! - unique-name violations surfacing as `StoreError::Duplicate`
//! - creation-order pagination with a total count

use uuid::Uuid;

use verdant_server::config::{Config, DatabaseConfig};
use verdant_server::store::{
    postgres::PgCatalog, CatalogStore, ContinentPatch, ForestPatch, NewContinent, NewForest,
    PageParams, StoreError,
};

async fn catalog() -> PgCatalog {
    let database: DatabaseConfig = Config::load()
        .expect("configuration should load from the environment")
        .database;
    PgCatalog::connect(&database)
        .await
        .expect("DATABASE_URL should point at a reachable PostgreSQL instance")
}

fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

fn new_forest(name: String, continent: Option<Uuid>) -> NewForest {
    NewForest {
        name,
        location: "Olympic Peninsula".to_string(),
        kind: "Rain Forest".to_string(),
        description: "Temperate rain forest with record rainfall".to_string(),
        continent,
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance at DATABASE_URL"]
async fn test_continent_crud_round_trip() {
    let catalog = catalog().await;
    let name = unique_name("continent");

    let created = catalog
        .create_continent(NewContinent {
            name: name.clone(),
            keywords: vec!["snow".to_string(), "ice".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(created.name, name);
    assert_eq!(created.keywords, vec!["snow", "ice"]);

    let found = catalog.find_continent(created.id).await.unwrap();
    assert_eq!(found, created);

    let renamed = unique_name("continent");
    let updated = catalog
        .update_continent(
            created.id,
            ContinentPatch {
                name: Some(renamed.clone()),
                keywords: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, renamed);
    assert_eq!(updated.keywords, created.keywords);

    catalog.delete_continent(created.id).await.unwrap();
    assert!(matches!(
        catalog.find_continent(created.id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance at DATABASE_URL"]
async fn test_continent_name_uniqueness() {
    let catalog = catalog().await;
    let name = unique_name("continent");

    let first = catalog
        .create_continent(NewContinent {
            name: name.clone(),
            keywords: vec![],
        })
        .await
        .unwrap();

    let second = catalog
        .create_continent(NewContinent {
            name: name.clone(),
            keywords: vec![],
        })
        .await;
    assert!(matches!(second, Err(StoreError::Duplicate { .. })));

    catalog.delete_continent(first.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance at DATABASE_URL"]
async fn test_forest_crud_round_trip_with_relaxed_link() {
    let catalog = catalog().await;
    let dangling = Uuid::new_v4();

    let created = catalog
        .create_forest(new_forest(unique_name("forest"), Some(dangling)))
        .await
        .unwrap();
    assert_eq!(created.continent, Some(dangling));

    let found = catalog.find_forest(created.id).await.unwrap();
    assert_eq!(found, created);

    let updated = catalog
        .update_forest(
            created.id,
            ForestPatch {
                location: Some("Hokkaido".to_string()),
                ..ForestPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.location, "Hokkaido");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);

    catalog.delete_forest(created.id).await.unwrap();
    assert!(matches!(
        catalog.delete_forest(created.id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance at DATABASE_URL"]
async fn test_forest_listing_counts_and_orders_by_creation() {
    let catalog = catalog().await;
    let prefix = unique_name("forest");

    let mut created = Vec::new();
    for index in 0..3 {
        let forest = catalog
            .create_forest(new_forest(format!("{prefix}-{index}"), None))
            .await
            .unwrap();
        created.push(forest);
    }

    let page = catalog
        .list_forests(PageParams::new(None, Some(100)))
        .await
        .unwrap();
    assert!(page.total >= 3);

    // Creation order holds among this test's own rows
    let positions: Vec<usize> = created
        .iter()
        .map(|forest| {
            page.items
                .iter()
                .position(|item| item.id == forest.id)
                .expect("created forest should appear in the listing")
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    for forest in created {
        catalog.delete_forest(forest.id).await.unwrap();
    }
}

//! Integration tests for the `products` repository against PostgreSQL.
//!
//! These need a server reachable through `DATABASE_URL`; `#[sqlx::test]`
//! creates a throwaway database per test and applies the crate migrations.

use std::str::FromStr;

use chrono::Duration;
use delishop_core::types::now;
use delishop_db::models::product::{NewProduct, ProductChanges};
use delishop_db::repositories::ProductRepo;
use delishop_db::store::{PgProductStore, ProductStore};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, price: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        price: Decimal::from_str(price).unwrap(),
        stock: None,
        created_at: now(),
    }
}

fn changes(name: &str, price: &str) -> ProductChanges {
    ProductChanges {
        name: name.to_string(),
        description: Some("updated".to_string()),
        price: Decimal::from_str(price).unwrap(),
        stock: Some("two crates".to_string()),
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_assigns_id_and_null_updated_at(pool: PgPool) {
    let a = ProductRepo::create(&pool, &new_product("Ham", "3.50")).await.unwrap();
    let b = ProductRepo::create(&pool, &new_product("Cheese", "7.25")).await.unwrap();

    assert!(a.id > 0);
    assert_ne!(a.id, b.id);
    assert_eq!(a.updated_at, None);
    assert_eq!(a.price, Decimal::from_str("3.50").unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_preserves_created_at(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Ham", "3.50")).await.unwrap();
    let at = now();

    let updated = ProductRepo::update(&pool, created.id, &changes("Ham", "4.00"), at)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, Some(at));
    assert_eq!(updated.price, Decimal::from_str("4.00").unwrap());
    assert_eq!(updated.stock.as_deref(), Some("two crates"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = ProductRepo::update(&pool, 424242, &changes("Nope", "1"), now())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_then_find(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Ham", "3.50")).await.unwrap();

    assert!(ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProductRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!ProductRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filter_by_updated_at(pool: PgPool) {
    let stale = ProductRepo::create(&pool, &new_product("Stale", "1")).await.unwrap();
    let fresh = ProductRepo::create(&pool, &new_product("Fresh", "1")).await.unwrap();
    let never = ProductRepo::create(&pool, &new_product("Never", "1")).await.unwrap();

    let t0 = now();
    ProductRepo::update(&pool, stale.id, &changes("Stale", "1"), t0 - Duration::days(1))
        .await
        .unwrap();
    ProductRepo::update(&pool, fresh.id, &changes("Fresh", "1"), t0)
        .await
        .unwrap();

    let all: Vec<i64> = ProductRepo::list(&pool, None)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(all, vec![stale.id, fresh.id, never.id]);

    let filtered: Vec<i64> = ProductRepo::list(&pool, Some(t0))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(filtered, vec![fresh.id]);
}

// ---------------------------------------------------------------------------
// Column constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_name_over_limit_is_rejected(pool: PgPool) {
    let long_name = "x".repeat(201);
    let result = ProductRepo::create(&pool, &new_product(&long_name, "1")).await;
    assert!(result.is_err(), "VARCHAR(200) should reject 201 characters");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_price_is_rounded_to_two_places(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Ham", "3.505")).await.unwrap();
    assert_eq!(created.price, Decimal::from_str("3.51").unwrap());
}

// ---------------------------------------------------------------------------
// Store wrapper
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_pg_store_round_trip(pool: PgPool) {
    let store = PgProductStore::new(pool);
    store.ping().await.unwrap();

    let created = store.insert(new_product("Olives", "2.10")).await.unwrap();
    let found = store.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

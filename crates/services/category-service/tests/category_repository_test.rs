//! Category repository tests against an in-memory SQLite database.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Schema, Set};

use category_service_lib::repository::entities::category;
use category_service_lib::repository::{CategoryRepository, CategoryStore};
use common::{Database, DatabaseConfig};
use domain::Category;

async fn setup() -> DatabaseConnection {
    let db = Database::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    })
    .await
    .unwrap();

    let backend = db.connection().get_database_backend();
    let schema = Schema::new(backend);
    db.connection()
        .execute(backend.build(&schema.create_table_from_entity(category::Entity)))
        .await
        .unwrap();

    db.get_connection()
}

#[tokio::test]
async fn test_find_by_id_returns_row() {
    let conn = setup().await;
    category::ActiveModel {
        id: Set(7),
        name: Set("Books".to_string()),
    }
    .insert(&conn)
    .await
    .unwrap();

    let store = CategoryStore::new(conn);
    let found = store.find_by_id(7).await.unwrap();

    assert_eq!(found, Some(Category::new(7, "Books")));
}

#[tokio::test]
async fn test_find_by_id_missing_row_is_none() {
    let store = CategoryStore::new(setup().await);

    assert_eq!(store.find_by_id(42).await.unwrap(), None);
}

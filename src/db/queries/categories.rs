use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// `{id: label}` view used by the JSON API.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for category in categories {
        sqlx::query("INSERT OR REPLACE INTO categories (id, type) VALUES (?1, ?2)")
            .bind(category.id)
            .bind(category.kind)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{in_memory, run_migrations};

    #[tokio::test]
    async fn get_category_by_id() {
        let pool = in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();

        let geography = get_category(&pool, 3).await.unwrap().unwrap();
        assert_eq!(geography.kind, "Geography");
        assert!(get_category(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn import_replaces_existing_labels() {
        let pool = in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();

        import_categories(
            &pool,
            vec![
                Category {
                    id: 1,
                    kind: "Physics".to_owned(),
                },
                Category {
                    id: 7,
                    kind: "Nature".to_owned(),
                },
            ],
        )
        .await
        .unwrap();

        let map = category_map(get_all_categories(&pool).await.unwrap());
        assert_eq!(map.len(), 7);
        assert_eq!(map[&1], "Physics");
        assert_eq!(map[&7], "Nature");
    }
}

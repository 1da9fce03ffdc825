use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_question_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE category = ?1
ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring search over question text.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE question LIKE '%' || ?1 || '%' ESCAPE '\'
ORDER BY id
        "#,
    )
    .bind(escape_like(term))
    .fetch_all(pool)
    .await
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn create_question(pool: &SqlitePool, new: &NewQuestion) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns whether a row was removed.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let deleted = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(deleted > 0)
}

pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for q in questions {
        sqlx::query(
            r#"
INSERT OR REPLACE INTO questions (id, question, answer, category, difficulty)
VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(q.id)
        .bind(q.question)
        .bind(q.answer)
        .bind(q.category)
        .bind(q.difficulty)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}

//! Schema bootstrap and starter data

use sqlx::PgPool;

use super::sample;

/// Create the trivia tables if they do not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty INTEGER NOT NULL,
            category INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert the stock categories, and the sample questions when the question
/// table is empty.
///
/// Safe to run repeatedly: existing category ids are left alone.
pub async fn seed(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (id, kind) in sample::CATEGORIES {
        sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(*id as i32)
            .bind(*kind)
            .execute(&mut *tx)
            .await?;
    }

    // Explicit ids bypass the serial sequence; move it past them
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
    )
    .execute(&mut *tx)
    .await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;

    if existing == 0 {
        for (_, question, answer, difficulty, category) in sample::QUESTIONS {
            sqlx::query(
                "INSERT INTO questions (question, answer, difficulty, category) VALUES ($1, $2, $3, $4)",
            )
            .bind(*question)
            .bind(*answer)
            .bind(*difficulty)
            .bind(*category as i32)
            .execute(&mut *tx)
            .await?;
        }
        tracing::info!(count = sample::QUESTIONS.len(), "Seeded sample questions");
    } else {
        tracing::debug!(existing, "Questions present, skipping sample questions");
    }

    tx.commit().await?;
    Ok(())
}

use sqlx::sqlite::{SqliteConnectOptions, SqliteQueryResult};
use sqlx::{Executor, SqlitePool};

/// Summary cache. One row per capital; a cached empty summary is never
/// stored, so a miss always means "not fetched yet".
pub async fn get_cache_db_pool(path: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal),
    )
    .await?;

    pool.execute(
        "CREATE TABLE IF NOT EXISTS summaries (
            capital TEXT PRIMARY KEY,
            summary TEXT
        )",
    )
    .await?;

    Ok(pool)
}

pub async fn cached_summary(pool: &SqlitePool, capital: &str) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(String,)> = sqlx::query_as("SELECT summary FROM summaries WHERE capital = $1")
        .bind(capital)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(summary,)| summary))
}

pub async fn store_summary(
    pool: &SqlitePool,
    capital: &str,
    summary: &str,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query(
        "INSERT INTO summaries (capital, summary) VALUES ($1, $2)
         ON CONFLICT(capital) DO UPDATE SET summary = $2",
    )
    .bind(capital)
    .bind(summary)
    .execute(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn summary_round_trip() {
        let path = std::env::temp_dir().join(format!("capital_cache_test_{}.sqlite", std::process::id()));
        let path_str = path.to_string_lossy().to_string();

        let pool = get_cache_db_pool(&path_str).await.unwrap();
        assert_eq!(cached_summary(&pool, "Jaipur").await.unwrap(), None);

        store_summary(&pool, "Jaipur", "Jaipur is the capital of Rajasthan.")
            .await
            .unwrap();
        assert_eq!(
            cached_summary(&pool, "Jaipur").await.unwrap().as_deref(),
            Some("Jaipur is the capital of Rajasthan.")
        );

        store_summary(&pool, "Jaipur", "Updated.").await.unwrap();
        assert_eq!(
            cached_summary(&pool, "Jaipur").await.unwrap().as_deref(),
            Some("Updated.")
        );

        pool.close().await;
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_file(path.with_extension("sqlite-wal"));
        let _ = std::fs::remove_file(path.with_extension("sqlite-shm"));
    }
}

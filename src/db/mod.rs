use sqlx::sqlite::SqlitePool;
use std::path::Path;

pub mod matches;
pub mod players;
pub mod teams;
pub mod tournaments;

/// Document models backed by a collection
pub const MODELS: &[&str] = &["Team", "Player", "Tournament", "Match"];

/// Applies pending schema migrations from `./migrations`.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Names of the collection tables, excluding SQLite and migration bookkeeping.
pub async fn list_collections(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"SELECT name FROM sqlite_master
           WHERE type = 'table'
             AND name NOT LIKE 'sqlite_%'
             AND name != '_sqlx_migrations'
           ORDER BY name"#
    )
    .fetch_all(pool)
    .await
}

/// Name of the main database: the file stem, or `memory` for in-memory databases.
pub async fn database_name(pool: &SqlitePool) -> Result<String, sqlx::Error> {
    let file: Option<String> = sqlx::query_scalar(
        r#"SELECT file FROM pragma_database_list WHERE name = 'main'"#
    )
    .fetch_one(pool)
    .await?;

    let name = Path::new(file.as_deref().unwrap_or_default())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("memory");

    Ok(name.to_string())
}

use sqlx::sqlite::SqlitePool;

use crate::models::{CreateMatch, Match, UpdateMatch, new_id, now, to_stored};

/// Matches in kickoff order; undated matches sort first.
///
/// Kickoffs are stored in one fixed-width UTC form, so ordering the text column
/// orders by time.
pub async fn get_all_matches(
    pool: &SqlitePool,
    tournament: Option<&str>,
) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"SELECT * FROM matches
           WHERE (? IS NULL OR tournament = ?)
           ORDER BY date, created_at"#
    )
    .bind(tournament)
    .bind(tournament)
    .fetch_all(pool)
    .await
}

pub async fn get_match_by_id(pool: &SqlitePool, match_id: &str) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"SELECT * FROM matches WHERE id = ?"#
    )
    .bind(match_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_match(pool: &SqlitePool, input: CreateMatch) -> Result<Match, sqlx::Error> {
    let timestamp = now();

    sqlx::query_as::<_, Match>(
        r#"INSERT INTO matches
               (id, tournament, home_team, away_team, date, home_score, away_score, status,
                created_at, updated_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(new_id())
    .bind(input.tournament)
    .bind(input.home_team)
    .bind(input.away_team)
    .bind(input.date.as_ref().map(to_stored))
    .bind(input.home_score)
    .bind(input.away_score)
    .bind(input.status)
    .bind(&timestamp)
    .bind(&timestamp)
    .fetch_one(pool)
    .await
}

pub async fn update_match(
    pool: &SqlitePool,
    match_id: &str,
    input: UpdateMatch,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"UPDATE matches SET
               tournament = COALESCE(?, tournament),
               home_team = COALESCE(?, home_team),
               away_team = COALESCE(?, away_team),
               date = COALESCE(?, date),
               home_score = COALESCE(?, home_score),
               away_score = COALESCE(?, away_score),
               status = COALESCE(?, status),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#
    )
    .bind(input.tournament)
    .bind(input.home_team)
    .bind(input.away_team)
    .bind(input.date.as_ref().map(to_stored))
    .bind(input.home_score)
    .bind(input.away_score)
    .bind(input.status)
    .bind(now())
    .bind(match_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_match(pool: &SqlitePool, match_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM matches WHERE id = ?"#)
        .bind(match_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

use sqlx::sqlite::SqlitePool;
use sqlx::types::Json;

use crate::models::{
    CreateTournament, Tournament, TournamentRow, UpdateTournament, new_id, now, to_stored,
};

pub async fn get_all_tournaments(pool: &SqlitePool) -> Result<Vec<Tournament>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TournamentRow>(
        r#"SELECT * FROM tournaments ORDER BY name"#
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Tournament::from).collect())
}

pub async fn get_tournament_by_id(
    pool: &SqlitePool,
    tournament_id: &str,
) -> Result<Option<Tournament>, sqlx::Error> {
    let row = sqlx::query_as::<_, TournamentRow>(
        r#"SELECT * FROM tournaments WHERE id = ?"#
    )
    .bind(tournament_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Tournament::from))
}

pub async fn create_tournament(
    pool: &SqlitePool,
    input: CreateTournament,
) -> Result<Tournament, sqlx::Error> {
    let timestamp = now();

    let row = sqlx::query_as::<_, TournamentRow>(
        r#"INSERT INTO tournaments
               (id, name, start_date, end_date, teams, status, created_at, updated_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(new_id())
    .bind(input.name)
    .bind(input.start_date.as_ref().map(to_stored))
    .bind(input.end_date.as_ref().map(to_stored))
    .bind(Json(input.teams))
    .bind(input.status)
    .bind(&timestamp)
    .bind(&timestamp)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn update_tournament(
    pool: &SqlitePool,
    tournament_id: &str,
    input: UpdateTournament,
) -> Result<Option<Tournament>, sqlx::Error> {
    let row = sqlx::query_as::<_, TournamentRow>(
        r#"UPDATE tournaments SET
               name = COALESCE(?, name),
               start_date = COALESCE(?, start_date),
               end_date = COALESCE(?, end_date),
               teams = COALESCE(?, teams),
               status = COALESCE(?, status),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#
    )
    .bind(input.name)
    .bind(input.start_date.as_ref().map(to_stored))
    .bind(input.end_date.as_ref().map(to_stored))
    .bind(input.teams.map(Json))
    .bind(input.status)
    .bind(now())
    .bind(tournament_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Tournament::from))
}

pub async fn delete_tournament(pool: &SqlitePool, tournament_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM tournaments WHERE id = ?"#)
        .bind(tournament_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

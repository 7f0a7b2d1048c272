use sqlx::sqlite::SqlitePool;

use crate::models::{CreatePlayer, Player, UpdatePlayer, new_id, now};

/// All players sorted by name, optionally narrowed to a team and/or tournament
pub async fn get_all_players(
    pool: &SqlitePool,
    team: Option<&str>,
    tournament: Option<&str>,
) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players
           WHERE (? IS NULL OR team = ?)
             AND (? IS NULL OR tournament = ?)
           ORDER BY name"#
    )
    .bind(team)
    .bind(team)
    .bind(tournament)
    .bind(tournament)
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &SqlitePool, player_id: &str) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE id = ?"#
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

// Walks the (tournament, goals DESC) index
pub async fn get_top_scorers(
    pool: &SqlitePool,
    tournament: &str,
    limit: i64,
) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players
           WHERE tournament = ?
           ORDER BY goals DESC, assists DESC, name
           LIMIT ?"#
    )
    .bind(tournament)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn create_player(pool: &SqlitePool, input: CreatePlayer) -> Result<Player, sqlx::Error> {
    let timestamp = now();

    sqlx::query_as::<_, Player>(
        r#"INSERT INTO players
               (id, name, number, team, tournament, goals, assists, matches, minutes_played,
                created_at, updated_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(new_id())
    .bind(input.name)
    .bind(input.number)
    .bind(input.team)
    .bind(input.tournament)
    .bind(input.goals)
    .bind(input.assists)
    .bind(input.matches)
    .bind(input.minutes_played)
    .bind(&timestamp)
    .bind(&timestamp)
    .fetch_one(pool)
    .await
}

/// Merges the present fields into the player. `None` when no player has this id.
pub async fn update_player(
    pool: &SqlitePool,
    player_id: &str,
    input: UpdatePlayer,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"UPDATE players SET
               name = COALESCE(?, name),
               number = COALESCE(?, number),
               team = COALESCE(?, team),
               tournament = COALESCE(?, tournament),
               goals = COALESCE(?, goals),
               assists = COALESCE(?, assists),
               matches = COALESCE(?, matches),
               minutes_played = COALESCE(?, minutes_played),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#
    )
    .bind(input.name)
    .bind(input.number)
    .bind(input.team)
    .bind(input.tournament)
    .bind(input.goals)
    .bind(input.assists)
    .bind(input.matches)
    .bind(input.minutes_played)
    .bind(now())
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_player(pool: &SqlitePool, player_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM players WHERE id = ?"#)
        .bind(player_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

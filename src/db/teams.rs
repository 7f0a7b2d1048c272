use sqlx::sqlite::SqlitePool;
use sqlx::types::Json;

use crate::models::{
    CreateTeam, Team, TeamPlayer, TeamPlayerInput, TeamRow, UpdateTeam, new_id, now,
};

pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TeamRow>(
        r#"SELECT * FROM teams ORDER BY name"#
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Team::from).collect())
}

pub async fn get_team_by_id(pool: &SqlitePool, team_id: &str) -> Result<Option<Team>, sqlx::Error> {
    let row = sqlx::query_as::<_, TeamRow>(
        r#"SELECT * FROM teams WHERE id = ?"#
    )
    .bind(team_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Team::from))
}

pub async fn create_team(pool: &SqlitePool, input: CreateTeam) -> Result<Team, sqlx::Error> {
    let timestamp = now();
    let players: Vec<TeamPlayer> = input
        .players
        .into_iter()
        .map(TeamPlayerInput::into_player)
        .collect();

    let row = sqlx::query_as::<_, TeamRow>(
        r#"INSERT INTO teams (id, name, players, created_at, updated_at)
           VALUES (?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(new_id())
    .bind(input.name)
    .bind(Json(players))
    .bind(&timestamp)
    .bind(&timestamp)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Merges the present fields into the team. `None` when no team has this id.
pub async fn update_team(
    pool: &SqlitePool,
    team_id: &str,
    input: UpdateTeam,
) -> Result<Option<Team>, sqlx::Error> {
    let players = input.players.map(|players| {
        Json(
            players
                .into_iter()
                .map(TeamPlayerInput::into_player)
                .collect::<Vec<_>>(),
        )
    });

    let row = sqlx::query_as::<_, TeamRow>(
        r#"UPDATE teams SET
               name = COALESCE(?, name),
               players = COALESCE(?, players),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#
    )
    .bind(input.name)
    .bind(players)
    .bind(now())
    .bind(team_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Team::from))
}

/// Returns whether a team was deleted. Players referencing it are left alone.
pub async fn delete_team(pool: &SqlitePool, team_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM teams WHERE id = ?"#)
        .bind(team_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Appends a player to the end of the roster, with no duplicate check.
pub async fn add_team_player(
    pool: &SqlitePool,
    team_id: &str,
    input: TeamPlayerInput,
) -> Result<Option<Team>, sqlx::Error> {
    let player = input.into_player();

    let row = sqlx::query_as::<_, TeamRow>(
        r#"UPDATE teams SET
               players = json_insert(players, '$[#]', json(?)),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#
    )
    .bind(Json(&player))
    .bind(now())
    .bind(team_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Team::from))
}

/// Replaces one roster entry in place, keeping its id.
///
/// Matches on the team id and the embedded player id together, so `None`
/// means either the team or the player inside it is missing.
pub async fn update_team_player(
    pool: &SqlitePool,
    team_id: &str,
    player_id: &str,
    input: TeamPlayerInput,
) -> Result<Option<Team>, sqlx::Error> {
    let player = input.into_player_with_id(player_id.to_string());

    let row = sqlx::query_as::<_, TeamRow>(
        r#"UPDATE teams SET
               players = json_set(
                   players,
                   (SELECT fullkey FROM json_each(teams.players)
                    WHERE json_extract(value, '$._id') = ?
                    LIMIT 1),
                   json(?)
               ),
               updated_at = ?
           WHERE id = ?
             AND EXISTS (
                 SELECT 1 FROM json_each(teams.players)
                 WHERE json_extract(value, '$._id') = ?
             )
           RETURNING *"#
    )
    .bind(player_id)
    .bind(Json(&player))
    .bind(now())
    .bind(team_id)
    .bind(player_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Team::from))
}

/// Pulls every roster entry with this id. `None` only when the team is missing;
/// an unknown player id leaves the roster unchanged.
pub async fn remove_team_player(
    pool: &SqlitePool,
    team_id: &str,
    player_id: &str,
) -> Result<Option<Team>, sqlx::Error> {
    let row = sqlx::query_as::<_, TeamRow>(
        r#"UPDATE teams SET
               players = (
                   SELECT json_group_array(json(value))
                   FROM json_each(teams.players)
                   WHERE json_extract(value, '$._id') IS NOT ?
               ),
               updated_at = ?
           WHERE id = ?
           RETURNING *"#
    )
    .bind(player_id)
    .bind(now())
    .bind(team_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Team::from))
}

use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use super::{Validate, new_id, require_non_empty, require_non_empty_opt};
use crate::error::ValidationError;

/// Player embedded in a team's roster
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamPlayer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub number: i64,
}

/// Team document for API responses
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub players: Vec<TeamPlayer>,
    pub created_at: String,
    pub updated_at: String,
}

/// Team row from SQLite, roster stored as a JSON array
#[derive(Debug, sqlx::FromRow)]
pub struct TeamRow {
    pub id: String,
    pub name: String,
    pub players: Json<Vec<TeamPlayer>>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team {
            id: row.id,
            name: row.name,
            players: row.players.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Body for adding or replacing an embedded player.
///
/// An `_id` sent back from a previous read is kept, so writing a fetched
/// roster back unchanged leaves every player addressable.
#[derive(Debug, Deserialize)]
pub struct TeamPlayerInput {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub number: i64,
}

impl TeamPlayerInput {
    /// Keeps the supplied id, or assigns a fresh one.
    pub fn into_player(mut self) -> TeamPlayer {
        let id = self.id.take().filter(|id| !id.is_empty()).unwrap_or_else(new_id);
        self.into_player_with_id(id)
    }

    pub fn into_player_with_id(self, id: String) -> TeamPlayer {
        TeamPlayer {
            id,
            name: self.name,
            number: self.number,
        }
    }
}

impl Validate for TeamPlayerInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    #[serde(default)]
    pub players: Vec<TeamPlayerInput>,
}

impl Validate for CreateTeam {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        self.players.iter().try_for_each(Validate::validate)
    }
}

/// Partial team update; a present `players` array replaces the whole roster.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub players: Option<Vec<TeamPlayerInput>>,
}

impl Validate for UpdateTeam {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty_opt("name", self.name.as_ref())?;
        match &self.players {
            Some(players) => players.iter().try_for_each(Validate::validate),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_player_serializes_with_underscore_id() {
        let player = TeamPlayerInput { id: None, name: "P1".into(), number: 7 }
            .into_player_with_id("abc".into());
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json, serde_json::json!({ "_id": "abc", "name": "P1", "number": 7 }));
    }

    #[test]
    fn supplied_player_id_is_kept() {
        let input: TeamPlayerInput =
            serde_json::from_str(r#"{"_id":"keep-me","name":"P1","number":7}"#).unwrap();
        assert_eq!(input.into_player().id, "keep-me");

        let input: TeamPlayerInput = serde_json::from_str(r#"{"name":"P1","number":7}"#).unwrap();
        assert!(!input.into_player().id.is_empty());
    }

    #[test]
    fn create_team_defaults_to_empty_roster() {
        let input: CreateTeam = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert!(input.players.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_team_requires_name() {
        assert!(serde_json::from_str::<CreateTeam>(r#"{"players":[]}"#).is_err());

        let input: CreateTeam = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(matches!(input.validate(), Err(ValidationError::Required("name"))));
    }

    #[test]
    fn roster_entries_are_validated_too() {
        let input: CreateTeam =
            serde_json::from_str(r#"{"name":"A","players":[{"name":"","number":1}]}"#).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_team_accepts_empty_body() {
        let input: UpdateTeam = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        assert!(input.players.is_none());
        assert!(input.validate().is_ok());
    }
}

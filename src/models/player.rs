use serde::{Deserialize, Serialize};

use super::{Validate, require_non_empty, require_non_empty_opt};
use crate::error::ValidationError;

/// Player document with accumulated tournament stats
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub number: i64,
    pub team: String,
    pub tournament: String,
    pub goals: i64,
    pub assists: i64,
    pub matches: i64,
    pub minutes_played: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    pub name: String,
    pub number: i64,
    pub team: String,
    pub tournament: String,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub matches: i64,
    #[serde(default)]
    pub minutes_played: i64,
}

impl Validate for CreatePlayer {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("team", &self.team)?;
        require_non_empty("tournament", &self.tournament)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayer {
    pub name: Option<String>,
    pub number: Option<i64>,
    pub team: Option<String>,
    pub tournament: Option<String>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub matches: Option<i64>,
    pub minutes_played: Option<i64>,
}

impl Validate for UpdatePlayer {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty_opt("name", self.name.as_ref())?;
        require_non_empty_opt("team", self.team.as_ref())?;
        require_non_empty_opt("tournament", self.tournament.as_ref())
    }
}

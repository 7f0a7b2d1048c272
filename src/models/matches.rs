use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Validate, date_input, require_non_empty, require_non_empty_opt};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

/// Match between two teams within a tournament
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: String,
    pub tournament: String,
    pub home_team: String,
    pub away_team: String,
    pub date: Option<DateTime<Utc>>,
    pub home_score: i64,
    pub away_score: i64,
    pub status: MatchStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatch {
    pub tournament: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default, deserialize_with = "date_input::deserialize")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub home_score: i64,
    #[serde(default)]
    pub away_score: i64,
    #[serde(default)]
    pub status: MatchStatus,
}

impl Validate for CreateMatch {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("tournament", &self.tournament)?;
        require_non_empty("homeTeam", &self.home_team)?;
        require_non_empty("awayTeam", &self.away_team)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatch {
    pub tournament: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "date_input::deserialize")]
    pub date: Option<DateTime<Utc>>,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub status: Option<MatchStatus>,
}

impl Validate for UpdateMatch {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty_opt("tournament", self.tournament.as_ref())?;
        require_non_empty_opt("homeTeam", self.home_team.as_ref())?;
        require_non_empty_opt("awayTeam", self.away_team.as_ref())
    }
}

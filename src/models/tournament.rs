use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use super::{Validate, date_input, require_non_empty, require_non_empty_opt};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

/// Tournament document for API responses
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Participating team ids
    pub teams: Vec<String>,
    pub status: TournamentStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, sqlx::FromRow)]
pub struct TournamentRow {
    pub id: String,
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub teams: Json<Vec<String>>,
    pub status: TournamentStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TournamentRow> for Tournament {
    fn from(row: TournamentRow) -> Self {
        Tournament {
            id: row.id,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            teams: row.teams.0,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournament {
    pub name: String,
    #[serde(default, deserialize_with = "date_input::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "date_input::deserialize")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub status: TournamentStatus,
}

impl Validate for CreateTournament {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTournament {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "date_input::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "date_input::deserialize")]
    pub end_date: Option<DateTime<Utc>>,
    pub teams: Option<Vec<String>>,
    pub status: Option<TournamentStatus>,
}

impl Validate for UpdateTournament {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty_opt("name", self.name.as_ref())
    }
}

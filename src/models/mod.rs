use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ValidationError;

mod matches;
mod player;
mod team;
mod tournament;

pub use matches::{CreateMatch, Match, MatchStatus, UpdateMatch};
pub use player::{CreatePlayer, Player, UpdatePlayer};
pub use team::{CreateTeam, Team, TeamPlayer, TeamPlayerInput, TeamRow, UpdateTeam};
pub use tournament::{CreateTournament, Tournament, TournamentRow, TournamentStatus, UpdateTournament};

/// Boundary validation for request payloads.
///
/// Serde already rejects missing required fields and wrong types; this covers
/// what the type system can't, such as empty required strings.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Single document envelope: `{ "data": ... }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Listing envelope. Everything is returned in a single page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            data,
            total,
            page: 1,
            limit: total,
            total_pages: 1,
        }
    }
}

/// `{ "message": ... }`, used for deletions and every error response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Fresh document identifier. UUIDv7 keeps ids roughly ordered by creation time.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Current time as stored in `created_at` / `updated_at`
pub fn now() -> String {
    to_stored(&Utc::now())
}

/// Stored form of an instant: UTC, millisecond precision, `Z` suffix.
///
/// Every stored instant has the same width, so SQLite's text ordering is time
/// ordering.
pub fn to_stored(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Deserializer for optional calendar fields.
///
/// Accepts an RFC 3339 date-time in any offset, normalised to UTC, or a bare
/// `YYYY-MM-DD` taken as midnight UTC. Anything else is rejected.
pub(crate) mod date_input {
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Ok(at.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|day| day.and_time(NaiveTime::MIN).and_utc())
            .map_err(|_| format!("invalid date `{raw}`"))
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub(crate) fn require_non_empty_opt(
    field: &'static str,
    value: Option<&String>,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => require_non_empty(field, value),
        None => Ok(()),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle states of a match. Once `Finished`, a match never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "live" => Ok(MatchStatus::Live),
            "finished" => Ok(MatchStatus::Finished),
            other => Err(format!(
                "'{}' is not a recognized match status. Use one of: scheduled, live, finished.",
                other
            )),
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of in-play events an operator can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    YellowCard,
    RedCard,
    Foul,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Goal => "goal",
            EventType::YellowCard => "yellow_card",
            EventType::RedCard => "red_card",
            EventType::Foul => "foul",
        }
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goal" => Ok(EventType::Goal),
            "yellow_card" => Ok(EventType::YellowCard),
            "red_card" => Ok(EventType::RedCard),
            "foul" => Ok(EventType::Foul),
            other => Err(format!(
                "'{}' is not a recognized event type. Use one of: goal, yellow_card, red_card, foul.",
                other
            )),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the fixture an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

impl FromStr for TeamSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(TeamSide::Home),
            "away" => Ok(TeamSide::Away),
            other => Err(format!(
                "'{}' is not a recognized team side. Use 'home' or 'away'.",
                other
            )),
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded in-play event. Owned by exactly one match and persisted
/// inside the match document, never as a standalone row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub team: TeamSide,
    pub player: String,
    pub minute: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// The match aggregate root.
///
/// `home_score`/`away_score` are a cache kept in lockstep with the goal
/// events in `events`; they are only ever written together with the
/// corresponding append, in one whole-aggregate update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub status: MatchStatus,
    pub events: Vec<MatchEvent>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// A fresh aggregate in `scheduled` state. Team names are stored as
    /// given; the lifecycle service validates and trims them first.
    pub fn new(home_team: String, away_team: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            status: MatchStatus::Scheduled,
            events: Vec::new(),
            start_time: None,
            end_time: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }
}

/// Payload for creating a new match.
#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub home_team: String,
    pub away_team: String,
}

/// Payload for recording an in-play event. `event_type` and `team` arrive as
/// raw strings and are parsed into their enums at the validation boundary so
/// unrecognized values are rejected before an event is ever constructed.
#[derive(Debug, Deserialize)]
pub struct RecordEventRequest {
    #[serde(rename = "type")]
    pub event_type: String,
    pub team: String,
    pub player: String,
    pub minute: i32,
    pub description: Option<String>,
}

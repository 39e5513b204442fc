use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Patch};
use crate::time::iso_instant;

use super::athlete::AthleteRef;
use super::staff::StaffRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Waiting,
    Canceled,
    Done,
    Undone,
}

impl SessionStatus {
    /// Selectable statuses in the order the edit form offers them.
    pub const ALL: [SessionStatus; 4] = [
        SessionStatus::Waiting,
        SessionStatus::Canceled,
        SessionStatus::Done,
        SessionStatus::Undone,
    ];
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionStatus::Waiting => "Waiting",
            SessionStatus::Canceled => "Canceled",
            SessionStatus::Done => "Done",
            SessionStatus::Undone => "Undone",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    #[serde(with = "iso_instant")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "iso_instant")]
    pub end_date: Option<DateTime<Utc>>,
    pub qr_code: Option<String>,
    pub session_status: Option<SessionStatus>,
    pub is_notified: Option<bool>,
    pub staff: Option<StaffRef>,
    pub athlete: Option<AthleteRef>,
}

impl Entity for Session {
    type Id = i64;
    type Patch = SessionPatch;

    const RESOURCE: &'static str = "sessions";
    const SINGULAR: &'static str = "session";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    pub id: i64,
    #[serde(with = "iso_instant")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "iso_instant")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_status: Option<SessionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_notified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<StaffRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<AthleteRef>,
}

impl SessionPatch {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            start_date: None,
            end_date: None,
            qr_code: None,
            session_status: None,
            is_notified: None,
            staff: None,
            athlete: None,
        }
    }
}

impl Patch for SessionPatch {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

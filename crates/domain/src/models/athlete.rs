use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::entity::{Entity, Patch};
use crate::record::Persisted;
use crate::time::iso_instant;

use super::session_package::SessionPackageRef;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Athlete {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    #[serde(with = "iso_instant")]
    pub birthday: Option<DateTime<Utc>>,
    /// At most one package is attached to an athlete (one-to-one).
    pub session_package: Option<SessionPackageRef>,
}

impl Entity for Athlete {
    type Id = i64;
    type Patch = AthletePatch;

    const RESOURCE: &'static str = "athletes";
    const SINGULAR: &'static str = "athlete";
}

/// Id-only reference to an athlete, the shape relationship payloads carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteRef {
    pub id: i64,
}

impl Keyed for AthleteRef {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl From<&Persisted<Athlete>> for AthleteRef {
    fn from(record: &Persisted<Athlete>) -> Self {
        AthleteRef { id: *record.id() }
    }
}

impl From<AthleteRef> for Persisted<Athlete> {
    fn from(reference: AthleteRef) -> Self {
        Persisted::new(reference.id, Athlete::default())
    }
}

/// Sparse body for `PATCH /api/athletes/{id}`: unset fields are omitted,
/// except timestamps, which are always present and `null` when unset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthletePatch {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(with = "iso_instant")]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_package: Option<SessionPackageRef>,
}

impl AthletePatch {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            email: None,
            phone: None,
            city: None,
            address: None,
            birthday: None,
            session_package: None,
        }
    }
}

impl Patch for AthletePatch {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

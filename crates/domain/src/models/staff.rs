use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::entity::{Entity, Patch};
use crate::record::Persisted;
use crate::time::iso_instant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Staff {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    #[serde(with = "iso_instant")]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(with = "iso_instant")]
    pub hire_date: Option<DateTime<Utc>>,
    pub salary: Option<i64>,
    /// Typed as a timestamp upstream; reproduced as observed rather than
    /// remodeled as a category, so the wire contract stays intact.
    #[serde(with = "iso_instant")]
    pub role: Option<DateTime<Utc>>,
    pub status: Option<bool>,
}

impl Entity for Staff {
    type Id = i64;
    type Patch = StaffPatch;

    const RESOURCE: &'static str = "staff";
    const SINGULAR: &'static str = "staff";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRef {
    pub id: i64,
}

impl Keyed for StaffRef {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl From<&Persisted<Staff>> for StaffRef {
    fn from(record: &Persisted<Staff>) -> Self {
        StaffRef { id: *record.id() }
    }
}

impl From<StaffRef> for Persisted<Staff> {
    fn from(reference: StaffRef) -> Self {
        Persisted::new(reference.id, Staff::default())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPatch {
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
    #[serde(with = "iso_instant")]
    pub hire_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(with = "iso_instant")]
    pub role: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl StaffPatch {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            email: None,
            phone: None,
            city: None,
            address: None,
            birthday: None,
            hire_date: None,
            salary: None,
            role: None,
            status: None,
        }
    }
}

impl Patch for StaffPatch {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

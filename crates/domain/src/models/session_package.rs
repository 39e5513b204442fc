use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Keyed;
use crate::entity::{Entity, Patch};
use crate::record::Persisted;
use crate::time::iso_instant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionPackage {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub credits: Option<i32>,
    #[serde(with = "iso_instant")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "iso_instant")]
    pub end_date: Option<DateTime<Utc>>,
    pub revise_count: Option<i32>,
    pub cancel_count: Option<i32>,
}

impl Entity for SessionPackage {
    type Id = Uuid;
    type Patch = SessionPackagePatch;

    const RESOURCE: &'static str = "session-packages";
    const SINGULAR: &'static str = "session package";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPackageRef {
    pub id: Uuid,
}

impl Keyed for SessionPackageRef {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

impl From<&Persisted<SessionPackage>> for SessionPackageRef {
    fn from(record: &Persisted<SessionPackage>) -> Self {
        SessionPackageRef { id: *record.id() }
    }
}

impl From<SessionPackageRef> for Persisted<SessionPackage> {
    fn from(reference: SessionPackageRef) -> Self {
        Persisted::new(reference.id, SessionPackage::default())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPackagePatch {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<i32>,
    #[serde(with = "iso_instant")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "iso_instant")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revise_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_count: Option<i32>,
}

impl SessionPackagePatch {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            price: None,
            credits: None,
            start_date: None,
            end_date: None,
            revise_count: None,
            cancel_count: None,
        }
    }
}

impl Patch for SessionPackagePatch {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_with_only_name_serializes_sparsely() {
        let id = Uuid::new_v4();
        let patch = SessionPackagePatch {
            name: Some("pish".into()),
            ..SessionPackagePatch::new(id)
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            value,
            json!({
                "id": id.to_string(),
                "name": "pish",
                "startDate": null,
                "endDate": null,
            })
        );
    }

    #[test]
    fn patch_keeps_supplied_dates() {
        let id = Uuid::new_v4();
        let start = crate::time::parse_instant("2023-11-16T01:04:00.000Z").unwrap();
        let patch = SessionPackagePatch {
            start_date: Some(start),
            ..SessionPackagePatch::new(id)
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value["startDate"], "2023-11-16T01:04:00.000Z");
        assert_eq!(value["endDate"], serde_json::Value::Null);
        assert!(value.get("price").is_none());
    }
}

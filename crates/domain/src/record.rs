//! Draft/persisted distinction as a runtime-tagged sum type.
//!
//! The identifier is server-assigned: a record has none until its first
//! successful creation. On the wire a draft carries `"id": null` alongside
//! the entity fields; a persisted record carries the assigned id. In memory
//! the two states are distinct variants, so "does this have an id yet" is a
//! `match`, not a null check.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collection::Keyed;
use crate::entity::Entity;

/// An entity the server has acknowledged: identifier plus field set.
#[derive(Debug, Clone, PartialEq)]
pub struct Persisted<E: Entity> {
    id: E::Id,
    pub fields: E,
}

impl<E: Entity> Persisted<E> {
    pub fn new(id: E::Id, fields: E) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> &E::Id {
        &self.id
    }

    pub fn into_fields(self) -> E {
        self.fields
    }
}

impl<E: Entity> Keyed for Persisted<E> {
    type Key = E::Id;

    fn key(&self) -> E::Id {
        self.id.clone()
    }
}

/// A record either side of its first save.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<E: Entity> {
    Draft(E),
    Persisted(Persisted<E>),
}

impl<E: Entity> Record<E> {
    pub fn id(&self) -> Option<&E::Id> {
        match self {
            Record::Draft(_) => None,
            Record::Persisted(persisted) => Some(persisted.id()),
        }
    }

    pub fn fields(&self) -> &E {
        match self {
            Record::Draft(fields) => fields,
            Record::Persisted(persisted) => &persisted.fields,
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, Record::Draft(_))
    }
}

impl<E: Entity> From<Persisted<E>> for Record<E> {
    fn from(persisted: Persisted<E>) -> Self {
        Record::Persisted(persisted)
    }
}

/// Wire envelope: the identifier key plus the entity fields flattened beside
/// it, matching the collaborator's JSON shape.
#[derive(Serialize)]
#[serde(bound(serialize = "E: Entity"))]
struct RawRecordRef<'a, E: Entity> {
    id: Option<&'a E::Id>,
    #[serde(flatten)]
    fields: &'a E,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "E: Entity"))]
struct RawRecord<E: Entity> {
    #[serde(default)]
    id: Option<E::Id>,
    #[serde(flatten)]
    fields: E,
}

impl<E: Entity> Serialize for Persisted<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawRecordRef {
            id: Some(&self.id),
            fields: &self.fields,
        }
        .serialize(serializer)
    }
}

impl<'de, E: Entity> Deserialize<'de> for Persisted<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRecord::<E>::deserialize(deserializer)?;
        match raw.id {
            Some(id) => Ok(Persisted {
                id,
                fields: raw.fields,
            }),
            None => Err(serde::de::Error::custom(format!(
                "{} record is missing its server-assigned id",
                E::SINGULAR
            ))),
        }
    }
}

impl<E: Entity> Serialize for Record<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawRecordRef {
            id: self.id(),
            fields: self.fields(),
        }
        .serialize(serializer)
    }
}

impl<'de, E: Entity> Deserialize<'de> for Record<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRecord::<E>::deserialize(deserializer)?;
        Ok(match raw.id {
            Some(id) => Record::Persisted(Persisted {
                id,
                fields: raw.fields,
            }),
            None => Record::Draft(raw.fields),
        })
    }
}

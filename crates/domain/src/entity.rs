use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Server-assigned identifier of an entity. Numeric ids and UUIDs both
/// qualify; `Display`/`FromStr` cover URL building and route parameters.
pub trait EntityKey:
    Clone + Debug + PartialEq + Display + FromStr + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> EntityKey for T where
    T: Clone + Debug + PartialEq + Display + FromStr + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// A domain entity as its plain field set, without the identifier. The
/// identifier lives on [`crate::record::Persisted`]; a bare `Entity` value is
/// a draft.
pub trait Entity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Id: EntityKey;
    type Patch: Patch<Id = Self::Id>;

    /// URL segment under `/api`, e.g. `athletes`.
    const RESOURCE: &'static str;
    /// Singular name used in log messages.
    const SINGULAR: &'static str;
}

/// Sparse payload for a partial update. Carries the mandatory identifier;
/// every other field is optional and only overwrites the server-side value
/// when present.
pub trait Patch: Debug + Serialize + Send + Sync {
    type Id;

    fn id(&self) -> &Self::Id;
}

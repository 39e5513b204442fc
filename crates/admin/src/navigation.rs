//! Route resolution: fetch the record a detail/edit route names before the
//! screen mounts.

use domain::{Entity, Persisted};
use gateway::RestGateway;

/// Navigation side effects, owned by the routing collaborator. Screens and
/// the resolver only ever ask for a transition; they never perform one.
pub trait Navigator {
    /// Leave the current flow for the generic not-found page.
    fn redirect_to_not_found(&mut self);

    /// Return to the previous location (a successful save ends the screen).
    fn back(&mut self);
}

/// Outcome of resolving a route's identifier parameter.
#[derive(Debug)]
pub enum Resolution<E: Entity> {
    /// The route carries no identifier: mount with no record (create flow).
    NoId,
    Found(Persisted<E>),
    /// No such record; exactly one not-found redirect has been issued and
    /// the screen must not mount.
    Redirected,
}

impl<E: Entity> Resolution<E> {
    pub fn into_record(self) -> Option<Persisted<E>> {
        match self {
            Resolution::Found(record) => Some(record),
            _ => None,
        }
    }
}

/// Single-shot lookup, one fetch per navigation: no retry, no caching. An
/// absent identifier resolves immediately without touching the transport;
/// an identifier the wire type cannot carry names no record and takes the
/// not-found path without a fetch.
pub async fn resolve_entity<E: Entity>(
    api: &RestGateway<E>,
    navigator: &mut dyn Navigator,
    raw_id: Option<&str>,
) -> gateway::Result<Resolution<E>> {
    let Some(raw_id) = raw_id else {
        return Ok(Resolution::NoId);
    };
    let Ok(id) = raw_id.parse::<E::Id>() else {
        navigator.redirect_to_not_found();
        return Ok(Resolution::Redirected);
    };
    match api.find(&id).await? {
        Some(record) => Ok(Resolution::Found(record)),
        None => {
            navigator.redirect_to_not_found();
            Ok(Resolution::Redirected)
        }
    }
}

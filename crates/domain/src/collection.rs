//! Identifier-based collection helpers shared by every entity screen.
//!
//! Entities fetched at different times are structurally distinct values even
//! when they represent the same record, so pick-lists and dropdown matching
//! always compare by server-assigned identifier, never by full equality.

/// Anything addressable by a server-assigned identifier: a persisted record
/// or an id-only reference to one.
pub trait Keyed {
    type Key: Clone + PartialEq;

    fn key(&self) -> Self::Key;
}

/// Identifier equality between two optional references. Two absent
/// references are considered equal; an absent and a present one are not.
pub fn same_identity<A, B>(a: Option<&A>, b: Option<&B>) -> bool
where
    A: Keyed,
    B: Keyed<Key = A::Key>,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.key() == b.key(),
        _ => false,
    }
}

/// Merge candidate entries into an existing pick-list without duplicating
/// identifiers. Absent candidates are discarded; candidates whose identifier
/// already appears in the list (or earlier in the candidate set) are
/// discarded; survivors are prepended in input order. When nothing survives
/// the original buffer is returned untouched.
pub fn merge_unique<T, I>(existing: Vec<T>, candidates: I) -> Vec<T>
where
    T: Keyed,
    I: IntoIterator<Item = Option<T>>,
{
    let mut seen: Vec<T::Key> = existing.iter().map(Keyed::key).collect();
    let mut fresh: Vec<T> = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        let key = candidate.key();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        fresh.push(candidate);
    }
    if fresh.is_empty() {
        return existing;
    }
    fresh.extend(existing);
    fresh
}

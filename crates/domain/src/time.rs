//! Timestamp normalization at the transport boundary.
//!
//! Every timestamp-bearing field crosses the wire as an ISO-8601 string in
//! UTC with millisecond precision and a `Z` suffix, the format the REST
//! collaborator emits. Absent timestamps serialize to `null`, never to an
//! empty string or an omitted key.

use chrono::{DateTime, SecondsFormat, Utc};

/// Canonical wire representation of an instant.
pub fn format_instant(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 wire string back into an instant. Offsets other than
/// `Z` are accepted and normalized to UTC.
pub fn parse_instant(raw: &str) -> chrono::ParseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).map(|parsed| parsed.with_timezone(&Utc))
}

/// Serde adapter for `Option<DateTime<Utc>>` fields using the canonical
/// wire format. Apply with `#[serde(default, with = "time::iso_instant")]`.
pub mod iso_instant {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_some(&super::format_instant(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| super::parse_instant(&value).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_uses_utc_millis_and_z_suffix() {
        let instant = Utc.with_ymd_and_hms(2023, 11, 16, 12, 36, 0).unwrap();
        assert_eq!(format_instant(&instant), "2023-11-16T12:36:00.000Z");
    }

    #[test]
    fn round_trips_canonical_wire_strings() {
        for raw in [
            "2023-11-16T12:36:00.000Z",
            "2023-11-16T00:51:12.345Z",
            "1999-12-31T23:59:59.999Z",
        ] {
            let parsed = parse_instant(raw).unwrap();
            assert_eq!(format_instant(&parsed), raw);
        }
    }

    #[test]
    fn parse_normalizes_offsets_to_utc() {
        let parsed = parse_instant("2023-11-16T15:36:00.000+03:00").unwrap();
        assert_eq!(format_instant(&parsed), "2023-11-16T12:36:00.000Z");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("not-a-date").is_err());
        assert!(parse_instant("").is_err());
    }
}

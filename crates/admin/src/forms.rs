//! Raw-value conversions shared by the edit forms.
//!
//! Form controls edit timestamps as local `YYYY-MM-DDTHH:MM` strings; the
//! form adapters convert between that representation and the in-memory
//! instant when a record is loaded into or read out of a form.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::AdminError;

const CONTROL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn format_control(value: &DateTime<Utc>) -> String {
    value.format(CONTROL_FORMAT).to_string()
}

pub fn parse_control(field: &'static str, raw: &str) -> Result<DateTime<Utc>, AdminError> {
    NaiveDateTime::parse_from_str(raw, CONTROL_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| AdminError::InvalidDateInput {
            field,
            value: raw.to_string(),
        })
}

/// Parse an optional control value; an unset control is an unset field.
pub fn parse_optional_control(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, AdminError> {
    raw.map(|value| parse_control(field, value)).transpose()
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{Entity, Patch};

/// Check-in code handed to an athlete for a booked session. The associated
/// identifiers are opaque strings on the wire, not entity references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct QRCode {
    #[validate(required, length(min = 5, max = 200))]
    pub code: Option<String>,
    #[validate(required)]
    pub session_id: Option<String>,
    #[validate(required)]
    pub athlete_id: Option<String>,
    #[validate(required)]
    pub coach_id: Option<String>,
}

impl Entity for QRCode {
    type Id = i64;
    type Patch = QRCodePatch;

    const RESOURCE: &'static str = "qr-codes";
    const SINGULAR: &'static str = "QR code";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QRCodePatch {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach_id: Option<String>,
}

impl QRCodePatch {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            code: None,
            session_id: None,
            athlete_id: None,
            coach_id: None,
        }
    }
}

impl Patch for QRCodePatch {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_must_be_present_and_sized() {
        let missing = QRCode::default();
        assert!(missing.validate().is_err());

        let short = QRCode {
            code: Some("abcd".into()),
            session_id: Some("d7cbfc0d".into()),
            athlete_id: Some("998a4ffb".into()),
            coach_id: Some("6d2411f0".into()),
        };
        assert!(short.validate().is_err());

        let valid = QRCode {
            code: Some("hmph pfft antiquity".into()),
            ..short
        };
        assert!(valid.validate().is_ok());
    }
}

use domain::models::QRCode;
use domain::{Persisted, Record};
use validator::Validate;

use crate::error::Result;

/// The only form with field constraints: the code itself plus the three
/// associated identifiers are mandatory, and the code is length-bounded.
#[derive(Debug, Clone, Default)]
pub struct QRCodeForm {
    id: Option<i64>,
    pub code: Option<String>,
    pub session_id: Option<String>,
    pub athlete_id: Option<String>,
    pub coach_id: Option<String>,
}

impl QRCodeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn reset(&mut self, record: &Persisted<QRCode>) {
        let fields = &record.fields;
        *self = Self {
            id: Some(*record.id()),
            code: fields.code.clone(),
            session_id: fields.session_id.clone(),
            athlete_id: fields.athlete_id.clone(),
            coach_id: fields.coach_id.clone(),
        };
    }

    /// Read the controls back into a record, rejecting constraint
    /// violations before anything goes over the wire.
    pub fn value(&self) -> Result<Record<QRCode>> {
        let fields = QRCode {
            code: self.code.clone(),
            session_id: self.session_id.clone(),
            athlete_id: self.athlete_id.clone(),
            coach_id: self.coach_id.clone(),
        };
        fields.validate()?;
        Ok(match self.id {
            Some(id) => Record::Persisted(Persisted::new(id, fields)),
            None => Record::Draft(fields),
        })
    }
}

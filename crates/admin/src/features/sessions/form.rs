use chrono::Utc;
use domain::models::{AthleteRef, Session, SessionStatus, StaffRef};
use domain::{Persisted, Record};

use crate::error::Result;
use crate::forms::{format_control, parse_optional_control};

#[derive(Debug, Clone, Default)]
pub struct SessionForm {
    id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub qr_code: Option<String>,
    pub session_status: Option<SessionStatus>,
    pub is_notified: Option<bool>,
    pub staff: Option<StaffRef>,
    pub athlete: Option<AthleteRef>,
}

impl SessionForm {
    pub fn new() -> Self {
        let now = format_control(&Utc::now());
        Self {
            start_date: Some(now.clone()),
            end_date: Some(now),
            is_notified: Some(false),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn reset(&mut self, record: &Persisted<Session>) {
        let fields = &record.fields;
        *self = Self {
            id: Some(*record.id()),
            start_date: fields.start_date.as_ref().map(format_control),
            end_date: fields.end_date.as_ref().map(format_control),
            qr_code: fields.qr_code.clone(),
            session_status: fields.session_status,
            is_notified: fields.is_notified,
            staff: fields.staff,
            athlete: fields.athlete,
        };
    }

    pub fn value(&self) -> Result<Record<Session>> {
        let fields = Session {
            start_date: parse_optional_control("startDate", self.start_date.as_deref())?,
            end_date: parse_optional_control("endDate", self.end_date.as_deref())?,
            qr_code: self.qr_code.clone(),
            session_status: self.session_status,
            is_notified: self.is_notified,
            staff: self.staff,
            athlete: self.athlete,
        };
        Ok(match self.id {
            Some(id) => Record::Persisted(Persisted::new(id, fields)),
            None => Record::Draft(fields),
        })
    }
}

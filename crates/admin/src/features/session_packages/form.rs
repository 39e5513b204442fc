use chrono::Utc;
use domain::models::SessionPackage;
use domain::{Persisted, Record};
use uuid::Uuid;

use crate::error::Result;
use crate::forms::{format_control, parse_optional_control};

#[derive(Debug, Clone, Default)]
pub struct SessionPackageForm {
    id: Option<Uuid>,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub credits: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub revise_count: Option<i32>,
    pub cancel_count: Option<i32>,
}

impl SessionPackageForm {
    pub fn new() -> Self {
        let now = format_control(&Utc::now());
        Self {
            start_date: Some(now.clone()),
            end_date: Some(now),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn reset(&mut self, record: &Persisted<SessionPackage>) {
        let fields = &record.fields;
        *self = Self {
            id: Some(*record.id()),
            name: fields.name.clone(),
            price: fields.price,
            credits: fields.credits,
            start_date: fields.start_date.as_ref().map(format_control),
            end_date: fields.end_date.as_ref().map(format_control),
            revise_count: fields.revise_count,
            cancel_count: fields.cancel_count,
        };
    }

    pub fn value(&self) -> Result<Record<SessionPackage>> {
        let fields = SessionPackage {
            name: self.name.clone(),
            price: self.price,
            credits: self.credits,
            start_date: parse_optional_control("startDate", self.start_date.as_deref())?,
            end_date: parse_optional_control("endDate", self.end_date.as_deref())?,
            revise_count: self.revise_count,
            cancel_count: self.cancel_count,
        };
        Ok(match self.id {
            Some(id) => Record::Persisted(Persisted::new(id, fields)),
            None => Record::Draft(fields),
        })
    }
}

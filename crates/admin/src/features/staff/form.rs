use chrono::Utc;
use domain::models::Staff;
use domain::{Persisted, Record};

use crate::error::Result;
use crate::forms::{format_control, parse_optional_control};

#[derive(Debug, Clone, Default)]
pub struct StaffForm {
    id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
    pub hire_date: Option<String>,
    pub salary: Option<i64>,
    pub role: Option<String>,
    pub status: Option<bool>,
}

impl StaffForm {
    pub fn new() -> Self {
        let now = format_control(&Utc::now());
        Self {
            birthday: Some(now.clone()),
            hire_date: Some(now.clone()),
            role: Some(now),
            status: Some(false),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn reset(&mut self, record: &Persisted<Staff>) {
        let fields = &record.fields;
        *self = Self {
            id: Some(*record.id()),
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            city: fields.city.clone(),
            address: fields.address.clone(),
            birthday: fields.birthday.as_ref().map(format_control),
            hire_date: fields.hire_date.as_ref().map(format_control),
            salary: fields.salary,
            role: fields.role.as_ref().map(format_control),
            status: fields.status,
        };
    }

    pub fn value(&self) -> Result<Record<Staff>> {
        let fields = Staff {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            birthday: parse_optional_control("birthday", self.birthday.as_deref())?,
            hire_date: parse_optional_control("hireDate", self.hire_date.as_deref())?,
            salary: self.salary,
            role: parse_optional_control("role", self.role.as_deref())?,
            status: self.status,
        };
        Ok(match self.id {
            Some(id) => Record::Persisted(Persisted::new(id, fields)),
            None => Record::Draft(fields),
        })
    }
}

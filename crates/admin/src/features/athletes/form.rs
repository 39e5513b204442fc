//! Form adapter for the athlete edit screen: converts between the entity
//! shape and the raw editable representation, applying create defaults.

use chrono::Utc;
use domain::models::{Athlete, SessionPackageRef};
use domain::{Persisted, Record};

use crate::error::Result;
use crate::forms::{format_control, parse_optional_control};

/// Raw control values. The identifier is read-only; timestamps are edited
/// as local `YYYY-MM-DDTHH:MM` strings.
#[derive(Debug, Clone, Default)]
pub struct AthleteForm {
    id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
    pub session_package: Option<SessionPackageRef>,
}

impl AthleteForm {
    /// Create-screen defaults: no identifier, birthday prefilled with the
    /// current time.
    pub fn new() -> Self {
        Self {
            birthday: Some(format_control(&Utc::now())),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Reload every control from a persisted record (edit flow).
    pub fn reset(&mut self, record: &Persisted<Athlete>) {
        let fields = &record.fields;
        *self = Self {
            id: Some(*record.id()),
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            city: fields.city.clone(),
            address: fields.address.clone(),
            birthday: fields.birthday.as_ref().map(format_control),
            session_package: fields.session_package,
        };
    }

    /// Read the controls back into a record: a draft when the form never
    /// held an identifier, the persisted shape otherwise.
    pub fn value(&self) -> Result<Record<Athlete>> {
        let fields = Athlete {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            birthday: parse_optional_control("birthday", self.birthday.as_deref())?,
            session_package: self.session_package,
        };
        Ok(match self.id {
            Some(id) => Record::Persisted(Persisted::new(id, fields)),
            None => Record::Draft(fields),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_prefill_birthday_and_leave_id_unset() {
        let form = AthleteForm::new();
        assert_eq!(form.id(), None);
        assert!(form.birthday.is_some());
        assert!(form.value().unwrap().is_draft());
    }

    #[test]
    fn reset_then_value_round_trips_a_record() {
        let record = Persisted::new(
            24215,
            Athlete {
                name: Some("blah if".into()),
                email: Some("Bayancar66@yahoo.com".into()),
                city: Some("Gümüşhane".into()),
                birthday: Some(domain::time::parse_instant("2023-11-16T12:36:00.000Z").unwrap()),
                ..Athlete::default()
            },
        );
        let mut form = AthleteForm::new();
        form.reset(&record);
        assert_eq!(form.id(), Some(24215));
        assert_eq!(form.value().unwrap(), Record::Persisted(record));
    }

    #[test]
    fn reset_does_not_reapply_the_birthday_default() {
        let record = Persisted::new(29834, Athlete::default());
        let mut form = AthleteForm::new();
        form.reset(&record);
        assert_eq!(form.birthday, None);
    }

    #[test]
    fn bad_birthday_input_is_a_form_error() {
        let mut form = AthleteForm::new();
        form.birthday = Some("yesterday".into());
        assert!(form.value().is_err());
    }
}

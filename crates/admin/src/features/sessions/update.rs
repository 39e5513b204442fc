//! Edit screen for one session: the form plus the staff and athlete
//! pick-lists, both shared collections merged with the session's current
//! references.

use domain::models::{Athlete, Session, Staff};
use domain::{Persisted, merge_unique, same_identity};
use gateway::{QueryOptions, RestGateway};

use super::form::SessionForm;
use crate::error::Result;
use crate::navigation::Navigator;
use crate::screens::{SaveOutcome, run_save};

pub struct SessionUpdateScreen {
    pub form: SessionForm,
    pub session: Option<Persisted<Session>>,
    pub staff_options: Vec<Persisted<Staff>>,
    pub athlete_options: Vec<Persisted<Athlete>>,
    pub is_saving: bool,
}

impl Default for SessionUpdateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionUpdateScreen {
    pub fn new() -> Self {
        Self {
            form: SessionForm::new(),
            session: None,
            staff_options: Vec::new(),
            athlete_options: Vec::new(),
            is_saving: false,
        }
    }

    pub async fn mount(
        &mut self,
        session: Option<Persisted<Session>>,
        staff: &RestGateway<Staff>,
        athletes: &RestGateway<Athlete>,
    ) -> Result<()> {
        if let Some(record) = session {
            self.update_form(&record);
            self.session = Some(record);
        }
        self.load_relationship_options(staff, athletes).await
    }

    fn update_form(&mut self, record: &Persisted<Session>) {
        self.form.reset(record);
        let staff = record.fields.staff.map(Persisted::from);
        let athlete = record.fields.athlete.map(Persisted::from);
        self.staff_options = merge_unique(std::mem::take(&mut self.staff_options), [staff]);
        self.athlete_options = merge_unique(std::mem::take(&mut self.athlete_options), [athlete]);
    }

    async fn load_relationship_options(
        &mut self,
        staff: &RestGateway<Staff>,
        athletes: &RestGateway<Athlete>,
    ) -> Result<()> {
        let staff_page = staff.query(&QueryOptions::new()).await?;
        let current_staff = self
            .session
            .as_ref()
            .and_then(|record| record.fields.staff)
            .map(Persisted::from);
        self.staff_options = merge_unique(staff_page.items, [current_staff]);

        let athlete_page = athletes.query(&QueryOptions::new()).await?;
        let current_athlete = self
            .session
            .as_ref()
            .and_then(|record| record.fields.athlete)
            .map(Persisted::from);
        self.athlete_options = merge_unique(athlete_page.items, [current_athlete]);
        Ok(())
    }

    pub fn is_staff_selected(&self, staff: &Persisted<Staff>) -> bool {
        same_identity(self.form.staff.as_ref(), Some(staff))
    }

    pub fn is_athlete_selected(&self, athlete: &Persisted<Athlete>) -> bool {
        same_identity(self.form.athlete.as_ref(), Some(athlete))
    }

    pub async fn save(
        &mut self,
        api: &RestGateway<Session>,
        navigator: &mut dyn Navigator,
    ) -> Result<SaveOutcome> {
        let record = self.form.value()?;
        Ok(run_save(api, navigator, record, &mut self.is_saving).await)
    }
}

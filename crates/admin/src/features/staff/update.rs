use domain::Persisted;
use domain::models::Staff;
use gateway::RestGateway;

use super::form::StaffForm;
use crate::error::Result;
use crate::navigation::Navigator;
use crate::screens::{SaveOutcome, run_save};

pub struct StaffUpdateScreen {
    pub form: StaffForm,
    pub staff: Option<Persisted<Staff>>,
    pub is_saving: bool,
}

impl Default for StaffUpdateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StaffUpdateScreen {
    pub fn new() -> Self {
        Self {
            form: StaffForm::new(),
            staff: None,
            is_saving: false,
        }
    }

    pub fn mount(&mut self, staff: Option<Persisted<Staff>>) {
        if let Some(record) = staff {
            self.form.reset(&record);
            self.staff = Some(record);
        }
    }

    pub async fn save(
        &mut self,
        api: &RestGateway<Staff>,
        navigator: &mut dyn Navigator,
    ) -> Result<SaveOutcome> {
        let record = self.form.value()?;
        Ok(run_save(api, navigator, record, &mut self.is_saving).await)
    }
}

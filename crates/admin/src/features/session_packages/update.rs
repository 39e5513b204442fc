use domain::Persisted;
use domain::models::SessionPackage;
use gateway::RestGateway;

use super::form::SessionPackageForm;
use crate::error::Result;
use crate::navigation::Navigator;
use crate::screens::{SaveOutcome, run_save};

pub struct SessionPackageUpdateScreen {
    pub form: SessionPackageForm,
    pub session_package: Option<Persisted<SessionPackage>>,
    pub is_saving: bool,
}

impl Default for SessionPackageUpdateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionPackageUpdateScreen {
    pub fn new() -> Self {
        Self {
            form: SessionPackageForm::new(),
            session_package: None,
            is_saving: false,
        }
    }

    pub fn mount(&mut self, session_package: Option<Persisted<SessionPackage>>) {
        if let Some(record) = session_package {
            self.form.reset(&record);
            self.session_package = Some(record);
        }
    }

    pub async fn save(
        &mut self,
        api: &RestGateway<SessionPackage>,
        navigator: &mut dyn Navigator,
    ) -> Result<SaveOutcome> {
        let record = self.form.value()?;
        Ok(run_save(api, navigator, record, &mut self.is_saving).await)
    }
}

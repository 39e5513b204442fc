//! Edit screen for one athlete: the form plus the session-package pick-list.

use domain::models::{Athlete, SessionPackage};
use domain::{Persisted, merge_unique, same_identity};
use gateway::{QueryOptions, RestGateway};

use super::form::AthleteForm;
use crate::error::Result;
use crate::navigation::Navigator;
use crate::screens::{SaveOutcome, run_save};

pub struct AthleteUpdateScreen {
    pub form: AthleteForm,
    pub athlete: Option<Persisted<Athlete>>,
    /// Packages the dropdown offers. The athlete's current package is merged
    /// in so the selection is always present even when it is attached.
    pub packages: Vec<Persisted<SessionPackage>>,
    pub is_saving: bool,
}

impl Default for AthleteUpdateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AthleteUpdateScreen {
    pub fn new() -> Self {
        Self {
            form: AthleteForm::new(),
            athlete: None,
            packages: Vec::new(),
            is_saving: false,
        }
    }

    /// Mount with the record route resolution produced (absent for create),
    /// then load the pick-list options.
    pub async fn mount(
        &mut self,
        athlete: Option<Persisted<Athlete>>,
        packages: &RestGateway<SessionPackage>,
    ) -> Result<()> {
        if let Some(record) = athlete {
            self.update_form(&record);
            self.athlete = Some(record);
        }
        self.load_relationship_options(packages).await
    }

    fn update_form(&mut self, record: &Persisted<Athlete>) {
        self.form.reset(record);
        let current = record.fields.session_package.map(Persisted::from);
        self.packages = merge_unique(std::mem::take(&mut self.packages), [current]);
    }

    /// The one-to-one link means only unattached packages are offered, plus
    /// whichever one the athlete already holds.
    async fn load_relationship_options(
        &mut self,
        packages: &RestGateway<SessionPackage>,
    ) -> Result<()> {
        let page = packages
            .query(&QueryOptions::new().filter("athlete-is-null"))
            .await?;
        let current = self
            .athlete
            .as_ref()
            .and_then(|record| record.fields.session_package)
            .map(Persisted::from);
        self.packages = merge_unique(page.items, [current]);
        Ok(())
    }

    /// Dropdown "selected" test for a pick-list entry.
    pub fn is_selected(&self, package: &Persisted<SessionPackage>) -> bool {
        same_identity(self.form.session_package.as_ref(), Some(package))
    }

    pub async fn save(
        &mut self,
        api: &RestGateway<Athlete>,
        navigator: &mut dyn Navigator,
    ) -> Result<SaveOutcome> {
        let record = self.form.value()?;
        Ok(run_save(api, navigator, record, &mut self.is_saving).await)
    }
}

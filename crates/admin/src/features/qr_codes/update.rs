use domain::Persisted;
use domain::models::QRCode;
use gateway::RestGateway;

use super::form::QRCodeForm;
use crate::error::Result;
use crate::navigation::Navigator;
use crate::screens::{SaveOutcome, run_save};

pub struct QRCodeUpdateScreen {
    pub form: QRCodeForm,
    pub qr_code: Option<Persisted<QRCode>>,
    pub is_saving: bool,
}

impl Default for QRCodeUpdateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl QRCodeUpdateScreen {
    pub fn new() -> Self {
        Self {
            form: QRCodeForm::new(),
            qr_code: None,
            is_saving: false,
        }
    }

    pub fn mount(&mut self, qr_code: Option<Persisted<QRCode>>) {
        if let Some(record) = qr_code {
            self.form.reset(&record);
            self.qr_code = Some(record);
        }
    }

    pub async fn save(
        &mut self,
        api: &RestGateway<QRCode>,
        navigator: &mut dyn Navigator,
    ) -> Result<SaveOutcome> {
        let record = self.form.value()?;
        Ok(run_save(api, navigator, record, &mut self.is_saving).await)
    }
}

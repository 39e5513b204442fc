mod form;
mod update;

pub use form::StaffForm;
pub use update::StaffUpdateScreen;

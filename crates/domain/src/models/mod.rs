mod athlete;
mod qr_code;
mod session;
mod session_package;
mod staff;

pub use athlete::{Athlete, AthletePatch, AthleteRef};
pub use qr_code::{QRCode, QRCodePatch};
pub use session::{Session, SessionPatch, SessionStatus};
pub use session_package::{SessionPackage, SessionPackagePatch, SessionPackageRef};
pub use staff::{Staff, StaffPatch, StaffRef};

pub mod athletes;
pub mod qr_codes;
pub mod session_packages;
pub mod sessions;
pub mod staff;

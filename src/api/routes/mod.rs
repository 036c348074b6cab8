pub mod meetings;
pub mod session;

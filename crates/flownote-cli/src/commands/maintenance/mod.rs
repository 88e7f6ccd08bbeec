mod backup;
mod doctor;

pub use backup::handle_backup;
pub use doctor::handle_doctor;

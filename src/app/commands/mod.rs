pub mod doctor;
pub mod setup;
pub mod start;

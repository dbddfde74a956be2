pub mod analyze;
pub mod reply;

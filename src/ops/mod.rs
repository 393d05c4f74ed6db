pub mod analytics;
pub mod session;
pub mod templater;
pub mod triage;

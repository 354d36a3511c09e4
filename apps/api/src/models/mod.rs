pub mod activity;
pub mod evaluation;
pub mod profile;
pub mod region;

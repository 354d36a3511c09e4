// Static reference catalogs: universities and extracurricular opportunities.

pub mod handlers;
pub mod opportunities;
pub mod universities;

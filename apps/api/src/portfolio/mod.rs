// Portfolio helpers: activity description enhancement and display ordering.

pub mod enhance;
pub mod handlers;

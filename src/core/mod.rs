pub mod calendar;
pub mod config;
pub mod logic;
pub mod projection;
pub mod summary;

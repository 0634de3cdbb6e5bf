//! DTO modules that shape domain data for the club views.

pub mod meetings;
pub mod members;
pub mod minutes;

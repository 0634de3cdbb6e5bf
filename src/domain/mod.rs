//! Domain entities exchanged with the club API.

pub mod meeting;
pub mod member;
pub mod types;

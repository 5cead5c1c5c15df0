// Data models for the tour application

pub mod countdown;
pub mod tour;

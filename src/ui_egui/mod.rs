mod app;
mod sections;
pub mod theme;

pub use app::{TourApp, ViewType};

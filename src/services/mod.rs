// Service layer: countdown evaluation and settings

pub mod countdown;
pub mod settings;

mod breakdown;
mod plural;
mod service;

pub use breakdown::compute_breakdown;
pub use plural::{labeled_units, plural_form, PluralForms, DAY_FORMS, HOUR_FORMS, MINUTE_FORMS, SECOND_FORMS};
pub use service::{CountdownService, TICK_PERIOD};

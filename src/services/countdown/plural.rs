//! Russian grammatical number agreement for the countdown labels.

use crate::models::countdown::{TimeBreakdown, TimeUnit};

/// The three word forms a Russian count noun takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

pub const DAY_FORMS: PluralForms = PluralForms { one: "день", few: "дня", many: "дней" };
pub const HOUR_FORMS: PluralForms = PluralForms { one: "час", few: "часа", many: "часов" };
pub const MINUTE_FORMS: PluralForms = PluralForms { one: "минута", few: "минуты", many: "минут" };
pub const SECOND_FORMS: PluralForms = PluralForms { one: "секунда", few: "секунды", many: "секунд" };

/// Select the agreeing form for a count.
///
/// The 11..=14 band takes the many-form regardless of its last digit;
/// outside it the last digit decides: 1 is singular, 2..=4 the few-form,
/// everything else the many-form.
pub fn plural_form(n: u64, forms: PluralForms) -> &'static str {
    let last_two = n % 100;
    let last_one = n % 10;
    if (11..=14).contains(&last_two) {
        forms.many
    } else if last_one == 1 {
        forms.one
    } else if (2..=4).contains(&last_one) {
        forms.few
    } else {
        forms.many
    }
}

/// Attach agreeing labels to a breakdown, in display order.
pub fn labeled_units(breakdown: &TimeBreakdown) -> [TimeUnit; 4] {
    [
        TimeUnit { value: breakdown.days, label: plural_form(breakdown.days, DAY_FORMS) },
        TimeUnit { value: breakdown.hours, label: plural_form(breakdown.hours, HOUR_FORMS) },
        TimeUnit { value: breakdown.minutes, label: plural_form(breakdown.minutes, MINUTE_FORMS) },
        TimeUnit { value: breakdown.seconds, label: plural_form(breakdown.seconds, SECOND_FORMS) },
    ]
}

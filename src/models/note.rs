use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label attached to every saved day.
/// Serialized with the exact wording shown in reports, so the JSON store
/// stays readable without a decoder ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayNote {
    #[serde(rename = "Weekend (non-working)")]
    Weekend,

    #[serde(rename = "Legal holiday")]
    LegalHoliday,

    #[serde(rename = "Missing workday (−4h)")]
    MissingWorkday,

    #[serde(rename = "Day off")]
    DayOff,

    #[serde(rename = "Invalid interval")]
    InvalidInterval,

    #[serde(rename = "Worked on weekend")]
    WorkedWeekend,

    #[serde(rename = "Working day")]
    WorkingDay,
}

impl DayNote {
    pub fn label(&self) -> &'static str {
        match self {
            DayNote::Weekend => "Weekend (non-working)",
            DayNote::LegalHoliday => "Legal holiday",
            DayNote::MissingWorkday => "Missing workday (−4h)",
            DayNote::DayOff => "Day off",
            DayNote::InvalidInterval => "Invalid interval",
            DayNote::WorkedWeekend => "Worked on weekend",
            DayNote::WorkingDay => "Working day",
        }
    }
}

impl fmt::Display for DayNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

use super::note::DayNote;
use serde::{Deserialize, Serialize};

/// One saved calendar day. The store keys records by date, so the date
/// itself is not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub raw: String,    // ⇔ user text, stored verbatim
    pub worked: i64,    // ⇔ hours actually worked, >= 0
    pub deviation: i64, // ⇔ worked − daily quota for intervals, else 0
    pub holiday: bool,  // ⇔ true only for the explicit 'x' marker
    pub note: DayNote,
}

impl DayRecord {
    /// Rendering used by `add` and `show` to echo the stored state of a day.
    pub fn describe(&self, date: &chrono::NaiveDate) -> String {
        format!(
            "Date:      {}\nInput:     {}\nWorked:    {}\nDeviation: {}\nHoliday:   {}\nNote:      {}",
            date.format("%Y-%m-%d"),
            if self.raw.is_empty() { "(blank)" } else { &self.raw },
            self.worked,
            self.deviation,
            if self.holiday { "yes" } else { "no" },
            self.note,
        )
    }
}

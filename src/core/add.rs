use crate::core::evaluator;
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::store::Store;
use chrono::NaiveDate;

pub struct AddLogic;

impl AddLogic {
    /// Evaluate one day's entry and persist it, overwriting any prior
    /// record for the date. An unrecognized entry fails before the store
    /// is touched. Returns the stored record so the caller can echo it.
    pub fn apply(store: &Store, date: NaiveDate, raw: &str) -> AppResult<DayRecord> {
        let record = evaluator::evaluate(raw, date)?;
        store.upsert(date, record.clone())?;
        Ok(record)
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;

use crate::errors::InvalidTimestamp;

/// Appointment start time as found in the export. Zoned timestamps keep their
/// local wall-clock time, since month and day are read off the local date.
#[derive(Debug)]
pub(crate) struct StartTimeModel(NaiveDateTime);

impl StartTimeModel {
    pub(crate) fn parse(s: &str, formats: &[String]) -> Result<Self, ServerError> {
        let raw = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(StartTimeModel(dt.naive_local()));
        }
        formats
            .iter()
            .find_map(|f| {
                NaiveDateTime::parse_from_str(raw, f).ok().or_else(|| {
                    NaiveDate::parse_from_str(raw, f)
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })
            })
            .map(StartTimeModel)
            .ok_or_else(|| InvalidTimestamp::new(raw))
    }
}

impl Into<NaiveDateTime> for StartTimeModel {
    fn into(self) -> NaiveDateTime {
        self.0
    }
}

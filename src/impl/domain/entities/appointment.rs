use chrono::{Datelike as _, NaiveDateTime};

use super::dimension::Dimension;

/// One row of the appointments export.
///
/// Calendar fields are derived from `start_time` once, when the record is
/// built, and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub start_time: NaiveDateTime,
    /// Full English month name, ex. "January".
    pub month: String,
    /// 1-based calendar month, kept alongside the name for ordering.
    pub month_number: u32,
    /// Day of month.
    pub day: u32,
    pub anliegen: String,
    pub service_name: String,
    pub bezirk: String,
}

impl Appointment {
    pub fn new(
        start_time: NaiveDateTime,
        anliegen: impl Into<String>,
        service_name: impl Into<String>,
        bezirk: impl Into<String>,
    ) -> Self {
        Self {
            month: start_time.format("%B").to_string(),
            month_number: start_time.month(),
            day: start_time.day(),
            start_time,
            anliegen: anliegen.into(),
            service_name: service_name.into(),
            bezirk: bezirk.into(),
        }
    }

    pub fn category(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Anliegen => &self.anliegen,
            Dimension::ServiceName => &self.service_name,
            Dimension::Bezirk => &self.bezirk,
        }
    }
}

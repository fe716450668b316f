use fractic_server_error::ServerError;

use crate::errors::InvalidConfig;

/// How the appointments CSV is laid out and parsed.
///
/// Can be written in RON; any field left out falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub start_time_column: String,
    pub anliegen_column: String,
    pub service_name_column: String,
    pub bezirk_column: String,
    /// chrono format strings, tried in order after RFC 3339. Date-only formats
    /// are accepted and resolve to midnight.
    pub timestamp_formats: Vec<String>,
    /// Label used for empty category cells, so they stay counted.
    pub missing_category_label: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            start_time_column: "start_time".to_string(),
            anliegen_column: "anliegen".to_string(),
            service_name_column: "service_name".to_string(),
            bezirk_column: "bezirk".to_string(),
            timestamp_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
                "%Y-%m-%dT%H:%M".to_string(),
                "%d.%m.%Y %H:%M:%S".to_string(),
                "%d.%m.%Y %H:%M".to_string(),
                "%Y-%m-%d".to_string(),
                "%d.%m.%Y".to_string(),
            ],
            missing_category_label: "(missing)".to_string(),
        }
    }
}

impl DatasetConfig {
    /// Column names used by the CRM appointments export
    /// (`new_appointments.csv`).
    pub fn new_appointments_export() -> Self {
        Self {
            start_time_column: "new_starttime".to_string(),
            anliegen_column: "new_anliegen".to_string(),
            service_name_column: "new_servicename".to_string(),
            bezirk_column: "new_bezirk".to_string(),
            ..Self::default()
        }
    }

    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidConfig::with_debug(&e))
    }

    pub(crate) fn required_columns(&self) -> [&str; 4] {
        [
            self.start_time_column.as_str(),
            self.anliegen_column.as_str(),
            self.service_name_column.as_str(),
            self.bezirk_column.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_remaining_defaults() {
        let config = DatasetConfig::from_ron(
            r#"(start_time_column: "termin", missing_category_label: "unbekannt")"#,
        )
        .unwrap();

        assert_eq!(config.start_time_column, "termin");
        assert_eq!(config.missing_category_label, "unbekannt");
        assert_eq!(config.anliegen_column, "anliegen");
        assert_eq!(
            config.timestamp_formats,
            DatasetConfig::default().timestamp_formats
        );
    }

    #[test]
    fn malformed_ron_is_rejected() {
        assert!(DatasetConfig::from_ron("(start_time_column: ").is_err());
    }
}

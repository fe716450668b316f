use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{category_model::CategoryModel, start_time_model::StartTimeModel},
    entities::{Appointment, DatasetConfig},
    errors::{InvalidCsv, MissingColumns, ReadError},
};

#[async_trait]
pub(crate) trait AppointmentsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Appointment>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<Appointment>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct AppointmentsCsvDatasourceImpl {
    config: DatasetConfig,
}

impl AppointmentsCsvDatasourceImpl {
    pub(crate) fn new(config: DatasetConfig) -> Self {
        Self { config }
    }
}

/// Positions of the required columns within a record.
struct ColumnIndices {
    start_time: usize,
    anliegen: usize,
    service_name: usize,
    bezirk: usize,
}

impl ColumnIndices {
    fn locate(headers: &csv::StringRecord, config: &DatasetConfig) -> Result<Self, ServerError> {
        let required = config.required_columns();
        let positions = required.map(|name| headers.iter().position(|h| h.trim() == name));
        match positions {
            [Some(start_time), Some(anliegen), Some(service_name), Some(bezirk)] => Ok(Self {
                start_time,
                anliegen,
                service_name,
                bezirk,
            }),
            _ => {
                let missing: Vec<&str> = required
                    .iter()
                    .zip(positions)
                    .filter(|(_, p)| p.is_none())
                    .map(|(name, _)| *name)
                    .collect();
                Err(MissingColumns::new(&missing.join(", ")))
            }
        }
    }
}

#[async_trait]
impl AppointmentsCsvDatasource for AppointmentsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Appointment>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| InvalidCsv::with_debug(&e))?
            .clone();
        let columns = ColumnIndices::locate(&headers, &self.config)?;
        let missing_label = self.config.missing_category_label.as_str();

        reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_start_time = r.get(columns.start_time).unwrap_or("");
                    let raw_anliegen = r.get(columns.anliegen).unwrap_or("");
                    let raw_service_name = r.get(columns.service_name).unwrap_or("");
                    let raw_bezirk = r.get(columns.bezirk).unwrap_or("");

                    // Parse.
                    let start_time =
                        StartTimeModel::parse(raw_start_time, &self.config.timestamp_formats)?;
                    let anliegen = CategoryModel::parse(raw_anliegen, missing_label);
                    let service_name = CategoryModel::parse(raw_service_name, missing_label);
                    let bezirk = CategoryModel::parse(raw_bezirk, missing_label);

                    // Build.
                    Ok(Appointment::new(
                        start_time.into(),
                        anliegen,
                        service_name,
                        bezirk,
                    ))
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<Appointment>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::appointments_csv_datasource::{
        AppointmentsCsvDatasource, AppointmentsCsvDatasourceImpl,
    },
    domain::repositories::dataset_repository::DatasetRepository,
    entities::{Appointment, Dataset, DatasetConfig},
};

pub(crate) struct DatasetRepositoryImpl<DS1 = AppointmentsCsvDatasourceImpl>
where
    DS1: AppointmentsCsvDatasource,
{
    appointments_datasource: DS1,
}

impl<DS1: AppointmentsCsvDatasource> DatasetRepositoryImpl<DS1> {
    fn build(appointments: Vec<Appointment>) -> Dataset {
        let dataset = Dataset::new(appointments);
        log::info!(
            "Loaded {} appointments across {} month(s): {}.",
            dataset.len(),
            dataset.months().len(),
            dataset.months().join(", ")
        );
        dataset
    }
}

#[async_trait]
impl<DS1: AppointmentsCsvDatasource> DatasetRepository for DatasetRepositoryImpl<DS1> {
    fn from_string(&self, appointments_csv: &str) -> Result<Dataset, ServerError> {
        Ok(Self::build(
            self.appointments_datasource.from_string(appointments_csv)?,
        ))
    }

    async fn from_file<P>(&self, appointments_csv: P) -> Result<Dataset, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(Self::build(
            self.appointments_datasource
                .from_file(appointments_csv)
                .await?,
        ))
    }
}

impl DatasetRepositoryImpl<AppointmentsCsvDatasourceImpl> {
    pub(crate) fn new(config: DatasetConfig) -> Self {
        DatasetRepositoryImpl {
            appointments_datasource: AppointmentsCsvDatasourceImpl::new(config),
        }
    }
}

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::dataset_repository_impl::DatasetRepositoryImpl,
    domain::repositories::dataset_repository::DatasetRepository,
    entities::{Dataset, DatasetConfig},
};

#[async_trait]
pub trait LoadUsecase: Send + Sync {
    async fn from_string(&self, appointments_csv: &str) -> Result<Dataset, ServerError>;

    async fn from_file<P>(&self, appointments_csv: P) -> Result<Dataset, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadUsecaseImpl<
    R1 = DatasetRepositoryImpl, // Default.
> where
    R1: DatasetRepository,
{
    dataset_repository: R1,
}

#[async_trait]
impl<R1> LoadUsecase for LoadUsecaseImpl<R1>
where
    R1: DatasetRepository,
{
    async fn from_string(&self, appointments_csv: &str) -> Result<Dataset, ServerError> {
        self.dataset_repository.from_string(appointments_csv)
    }

    async fn from_file<P>(&self, appointments_csv: P) -> Result<Dataset, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.dataset_repository.from_file(appointments_csv).await
    }
}

impl LoadUsecaseImpl {
    pub(crate) fn new(config: DatasetConfig) -> Self {
        LoadUsecaseImpl {
            dataset_repository: DatasetRepositoryImpl::new(config),
        }
    }
}

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Dataset;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    fn from_string(&self, appointments_csv: &str) -> Result<Dataset, ServerError>;

    async fn from_file<P>(&self, appointments_csv: P) -> Result<Dataset, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

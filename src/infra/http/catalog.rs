use crate::config::EndpointPaths;
use crate::domain::entities::catalog::{CategoryList, LocationTable};
use crate::error::ClientError;
use crate::infra::http::client::ApiClient;
use crate::usecase::ports::catalog::CatalogSource;

#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    pub client: ApiClient,
    pub paths: EndpointPaths,
}

impl CatalogSource for HttpCatalogSource {
    async fn location_table(&self) -> Result<LocationTable, ClientError> {
        self.client.get_json(&self.paths.districts).await
    }

    async fn category_list(&self) -> Result<CategoryList, ClientError> {
        self.client.get_json(&self.paths.categories).await
    }
}

use crate::domain::entities::catalog::{CategoryList, LocationTable};
use crate::error::ClientError;

#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn location_table(&self) -> Result<LocationTable, ClientError>;
    async fn category_list(&self) -> Result<CategoryList, ClientError>;
}

use dioxus::logger::tracing::{error, info};

use crate::domain::entities::catalog::{CategoryList, LocationTable, SelectOptions};
use crate::usecase::ports::catalog::CatalogSource;

pub struct CatalogService<S> {
    source: S,
}

impl<S: CatalogSource> CatalogService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load failures are only logged; the selects stay on their placeholder.
    pub async fn location_table(&self) -> Option<LocationTable> {
        match self.source.location_table().await {
            Ok(table) => {
                info!(counties = table.counties().count(), "location table loaded");
                Some(table)
            }
            Err(err) => {
                error!("載入縣市資料失敗: {err}");
                None
            }
        }
    }

    pub async fn category_list(&self) -> Option<CategoryList> {
        match self.source.category_list().await {
            Ok(list) => Some(list),
            Err(err) => {
                error!("載入分類資料失敗: {err}");
                None
            }
        }
    }
}

pub fn fill_counties(table: &LocationTable, counties: &mut SelectOptions) -> bool {
    counties.populate_once(table.counties())
}

pub fn fill_categories(list: &CategoryList, categories: &mut SelectOptions) -> bool {
    categories.populate_once(list.categories.iter().map(String::as_str))
}

/// Replaces the district options with those of `county`; unknown counties leave only the placeholder.
pub fn cascade_districts(table: &LocationTable, county: &str, districts: &mut SelectOptions) {
    districts.truncate_to_placeholder();
    districts.extend_names(table.districts_of(county).iter().map(String::as_str));
}

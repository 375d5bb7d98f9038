use dioxus::logger::tracing::warn;
use dioxus::prelude::{use_signal, Signal};

use crate::config::{AppConfig, EndpointPaths};
use crate::domain::entities::catalog::{
    LocationTable, SelectOptions, CATEGORY_PLACEHOLDER, COUNTY_PLACEHOLDER, DISTRICT_PLACEHOLDER,
};
use crate::domain::entities::review_board::ReviewBoard;
use crate::infra::http::catalog::HttpCatalogSource;
use crate::infra::http::client::ApiClient;
use crate::infra::http::review::HttpReviewGateway;
use crate::usecase::services::review_service::InFlight;

/// Shared through the Dioxus context so every page talks to the same backend.
#[derive(Debug, Clone)]
pub struct AppServices {
    client: ApiClient,
    paths: EndpointPaths,
}

impl AppServices {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: ApiClient::new(config.base_url),
            paths: config.paths,
        }
    }

    pub fn review_gateway(&self) -> HttpReviewGateway {
        HttpReviewGateway {
            client: self.client.clone(),
            paths: self.paths.clone(),
        }
    }

    pub fn paths(&self) -> &EndpointPaths {
        &self.paths
    }

    /// Absolute form `action` on the backend, so native builds post to the server rather than the webview.
    pub fn form_action(&self, path: &str) -> String {
        match self.client.endpoint(path) {
            Ok(url) => url.to_string(),
            Err(err) => {
                warn!("表單位址無法解析，改用相對路徑：{err}");
                path.to_string()
            }
        }
    }

    pub fn catalog_source(&self) -> HttpCatalogSource {
        HttpCatalogSource {
            client: self.client.clone(),
            paths: self.paths.clone(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ReviewState {
    pub board: Signal<ReviewBoard>,
    pub busy: Signal<InFlight>,
    pub loading: Signal<bool>,
    pub status: Signal<String>,
}

impl ReviewState {
    pub fn new() -> Self {
        Self {
            board: use_signal(ReviewBoard::default),
            busy: use_signal(InFlight::default),
            loading: use_signal(|| true),
            status: use_signal(|| "就緒".to_string()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct CatalogState {
    pub locations: Signal<Option<LocationTable>>,
    pub counties: Signal<SelectOptions>,
    pub districts: Signal<SelectOptions>,
    pub categories: Signal<SelectOptions>,
    pub selected_county: Signal<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            locations: use_signal(|| None::<LocationTable>),
            counties: use_signal(|| SelectOptions::new(COUNTY_PLACEHOLDER)),
            districts: use_signal(|| SelectOptions::new(DISTRICT_PLACEHOLDER)),
            categories: use_signal(|| SelectOptions::new(CATEGORY_PLACEHOLDER)),
            selected_county: use_signal(String::new),
        }
    }
}

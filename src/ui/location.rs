use dioxus::prelude::*;

use crate::config::EndpointPaths;
use crate::domain::entities::catalog::SelectOptions;
use crate::ui::state::app_state::{AppServices, CatalogState};
use crate::usecase::services::catalog_service::{
    cascade_districts, fill_categories, fill_counties, CatalogService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LostItemFormMode {
    Add,
    Search,
}

impl LostItemFormMode {
    fn action_path(self, paths: &EndpointPaths) -> &str {
        match self {
            LostItemFormMode::Add => &paths.add_item,
            LostItemFormMode::Search => &paths.search_item,
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            LostItemFormMode::Add => "刊登失物",
            LostItemFormMode::Search => "搜尋",
        }
    }
}

/// County, district and category selects fed from the static JSON catalogs.
#[component]
pub fn LocationCategorySelects(required: bool) -> Element {
    let services = use_context::<AppServices>();
    let CatalogState {
        mut locations,
        mut counties,
        mut districts,
        mut categories,
        mut selected_county,
    } = CatalogState::new();

    let services_for_locations = services.clone();
    use_future(move || {
        let service = CatalogService::new(services_for_locations.catalog_source());
        async move {
            if let Some(table) = service.location_table().await {
                fill_counties(&table, &mut counties.write());
                locations.set(Some(table));
            }
        }
    });

    let services_for_categories = services.clone();
    use_future(move || {
        let service = CatalogService::new(services_for_categories.catalog_source());
        async move {
            if let Some(list) = service.category_list().await {
                fill_categories(&list, &mut categories.write());
            }
        }
    });

    rsx! {
        div {
            class: "row g-2",
            div {
                class: "col-md-4",
                label { r#for: "lost_county", class: "form-label", "縣市" }
                select {
                    id: "lost_county",
                    name: "lost_county",
                    class: "form-select",
                    required: required,
                    value: "{selected_county}",
                    onchange: move |event: FormEvent| {
                        let county = event.value();
                        selected_county.set(county.clone());
                        // Nothing to cascade until the table has loaded.
                        if let Some(table) = locations.read().as_ref() {
                            cascade_districts(table, &county, &mut districts.write());
                        }
                    },
                    SelectEntries { options: counties() }
                }
            }
            div {
                class: "col-md-4",
                label { r#for: "lost_district", class: "form-label", "鄉鎮市區" }
                select {
                    id: "lost_district",
                    name: "lost_district",
                    class: "form-select",
                    required: required,
                    SelectEntries { options: districts() }
                }
            }
            div {
                class: "col-md-4",
                label { r#for: "lost_category", class: "form-label", "類別" }
                select {
                    id: "lost_category",
                    name: "lost_category",
                    class: "form-select",
                    required: required,
                    SelectEntries { options: categories() }
                }
            }
        }
    }
}

#[component]
fn SelectEntries(options: SelectOptions) -> Element {
    rsx! {
        option { value: "", "{options.placeholder()}" }
        for entry in options.entries().iter().cloned() {
            option { key: "{entry.value}", value: "{entry.value}", "{entry.label}" }
        }
    }
}

#[component]
pub fn LostItemForm(mode: LostItemFormMode) -> Element {
    let services = use_context::<AppServices>();
    let action = services.form_action(mode.action_path(services.paths()));
    let is_add = mode == LostItemFormMode::Add;
    let enctype = if is_add {
        "multipart/form-data"
    } else {
        "application/x-www-form-urlencoded"
    };

    rsx! {
        form {
            action: "{action}",
            method: "post",
            enctype: enctype,
            class: "container py-3 d-flex flex-column gap-3",
            LocationCategorySelects { required: is_add }
            div {
                label { r#for: "lost_location", class: "form-label", "地點" }
                input {
                    id: "lost_location",
                    name: "lost_location",
                    class: "form-control",
                    required: is_add,
                }
            }
            div {
                label { r#for: "lost_date", class: "form-label", "日期" }
                input {
                    r#type: "date",
                    id: "lost_date",
                    name: "lost_date",
                    class: "form-control",
                    required: is_add,
                }
            }
            if is_add {
                div {
                    label { r#for: "lost_image", class: "form-label", "圖片" }
                    input {
                        r#type: "file",
                        id: "lost_image",
                        name: "lost_image",
                        accept: "image/*",
                        class: "form-control",
                    }
                }
                div {
                    label { r#for: "note", class: "form-label", "備註" }
                    textarea { id: "note", name: "note", class: "form-control", rows: "3" }
                }
            }
            button { r#type: "submit", class: "btn btn-primary", "{mode.submit_label()}" }
        }
    }
}

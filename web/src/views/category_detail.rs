use dioxus::prelude::*;

use api::CatalogClient;
use ui::use_session;

use crate::Route;

/// Single-category view: fields, the owned products, direct subcategories.
#[component]
pub fn CategoryDetail(id: u64) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let session = use_session();
    let nav = use_navigator();
    let mut category = use_signal(|| Option::<api::CategoryDetail>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            let client = CatalogClient::new(session());
            match client.category(id).await {
                Ok(detail) => {
                    category.set(Some(detail));
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to fetch category {id}: {e}");
                    if e.is_unauthenticated() {
                        ui::redirect_to_login();
                    }
                    error.set(Some("Error fetching category details".to_string()));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! { p { "Loading..." } };
    }
    if let Some(message) = error() {
        return rsx! { p { class: "form-error", "{message}" } };
    }

    rsx! {
        if let Some(detail) = category() {
            div {
                class: "category-detail",

                div {
                    class: "category-detail-head",
                    h1 { "{detail.name}" }
                    button {
                        class: "primary",
                        onclick: move |_| {
                            nav.push(Route::CategoryEdit { id });
                        },
                        "Edit"
                    }
                }

                if let Some(ref description) = detail.description {
                    p { "{description}" }
                }
                p { "Status: {detail.status_label()}" }
                p { "Created At: {detail.created_date()}" }

                h2 { "Products" }
                if detail.products.is_empty() {
                    p { class: "detail-empty", "No products in this category." }
                } else {
                    table {
                        class: "products-table",
                        thead {
                            tr {
                                th { "Product Name" }
                                th { "Description" }
                                th { "SKU" }
                                th { "EAN" }
                                th { "URL" }
                            }
                        }
                        tbody {
                            for product in detail.products.iter() {
                                tr {
                                    key: "{product.id}",
                                    td { "{product.name}" }
                                    td { "{product.description}" }
                                    td { "{product.sku}" }
                                    td { "{product.ean}" }
                                    td {
                                        a {
                                            href: "{product.url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "View Product"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if !detail.subcategories.is_empty() {
                    h2 { "Subcategories" }
                    ul {
                        class: "subcategory-list",
                        for sub in detail.subcategories.iter() {
                            li {
                                key: "{sub.id}",
                                Link {
                                    to: Route::CategoryDetail { id: sub.id },
                                    "{sub.name}"
                                }
                                span { class: "subcategory-status", " ({sub.status_label()})" }
                            }
                        }
                    }
                }
            }
        }
    }
}

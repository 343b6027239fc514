//! Category overview table: search, status filter, sortable columns,
//! pagination, recursive expandable rows, and the delete confirmation flow.
//!
//! All view-state math lives in [`crate::presenter`]; this module only wires
//! it to signals and the DOM.

use dioxus::prelude::*;

use api::{CatalogClient, Category};

use crate::auth::use_session;
use crate::confirm_dialog::ConfirmDialog;
use crate::presenter::{
    build_view, expansion_key, has_next, has_prev, toggle_sort, ExpansionSet, SortConfig,
    SortDirection, SortKey, StatusFilter, TableQuery,
};

const TABLE_CSS: Asset = asset!("/assets/styling/table.css");

#[component]
pub fn CategoryTable(on_select: EventHandler<u64>, on_edit: EventHandler<u64>) -> Element {
    let session = use_session();
    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| StatusFilter::All);
    let mut sort = use_signal(|| Option::<SortConfig>::None);
    let mut page = use_signal(|| 1usize);
    let expanded = use_signal(ExpansionSet::default);
    let mut pending_delete = use_signal(|| Option::<Category>::None);

    // Load the root list on mount (and again if the session changes)
    let _loader = use_resource(move || async move {
        let client = CatalogClient::new(session());
        match client.list_categories().await {
            Ok(list) => {
                categories.set(list);
                error.set(None);
            }
            Err(e) => {
                tracing::error!("Failed to fetch categories: {e}");
                if e.is_unauthenticated() {
                    crate::auth::redirect_to_login();
                }
                error.set(Some("Error fetching categories".to_string()));
            }
        }
        loading.set(false);
    });

    let handle_sort = move |key: SortKey| {
        sort.set(Some(toggle_sort(sort(), key)));
    };

    // Await the delete, then re-fetch the whole root list, then close the
    // prompt. Strictly sequential, so the next view never shows stale rows.
    let confirm_delete = move |_| {
        let Some(category) = pending_delete() else {
            return;
        };
        spawn(async move {
            let client = CatalogClient::new(session());
            match client.delete_category(category.id).await {
                Ok(()) => match client.list_categories().await {
                    Ok(list) => categories.set(list),
                    Err(e) => {
                        tracing::error!("Reload after delete failed: {e}");
                        error.set(Some("Error fetching categories".to_string()));
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to delete category {}: {e}", category.id);
                    if e.is_unauthenticated() {
                        crate::auth::redirect_to_login();
                    }
                    error.set(Some(format!("Error deleting category: {e}")));
                }
            }
            pending_delete.set(None);
        });
    };

    if loading() {
        return rsx! { p { "Loading..." } };
    }
    if let Some(message) = error() {
        return rsx! { p { class: "table-error", "{message}" } };
    }

    let query = TableQuery {
        search: search(),
        status: status(),
        sort: sort(),
        page: page(),
    };
    let view = build_view(&categories(), &query);
    let current_page = view.page;
    let total_pages = view.total_pages;

    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        div {
            class: "category-table",

            h1 { class: "category-table-title", "Categories Overview" }

            input {
                class: "category-search",
                r#type: "text",
                placeholder: "Search by name or description",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }

            select {
                class: "category-status-filter",
                value: status().value(),
                onchange: move |evt| status.set(StatusFilter::from_value(&evt.value())),
                option { value: "", "All" }
                option { value: "active", "Active" }
                option { value: "inactive", "Inactive" }
            }

            table {
                class: "category-rows",
                thead {
                    tr {
                        SortHeader { label: "Name", sort_key: SortKey::Name, sort: sort(), on_sort: handle_sort }
                        SortHeader { label: "Status", sort_key: SortKey::Status, sort: sort(), on_sort: handle_sort }
                        SortHeader { label: "Product count", sort_key: SortKey::ProductCount, sort: sort(), on_sort: handle_sort }
                        SortHeader { label: "Created At", sort_key: SortKey::CreatedAt, sort: sort(), on_sort: handle_sort }
                        th { "Actions" }
                    }
                }
                tbody {
                    for category in view.rows {
                        CategoryRow {
                            key: "{expansion_key(None, category.id)}",
                            category: category.clone(),
                            level: 0,
                            parent: None::<u64>,
                            expanded: expanded,
                            on_select: on_select,
                            on_edit: on_edit,
                            on_delete: move |category: Category| pending_delete.set(Some(category)),
                        }
                    }
                }
            }

            div {
                class: "category-pagination",
                button {
                    disabled: !has_prev(current_page),
                    onclick: move |_| page.set(current_page - 1),
                    "Previous"
                }
                span { "Page {current_page} of {total_pages}" }
                button {
                    disabled: !has_next(current_page, total_pages),
                    onclick: move |_| page.set(current_page + 1),
                    "Next"
                }
            }
        }

        if let Some(category) = pending_delete() {
            ConfirmDialog {
                title: "Delete category",
                message: format!("Delete \"{}\"? This cannot be undone.", category.name),
                confirm_label: "Delete",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn SortHeader(
    label: String,
    sort_key: SortKey,
    sort: Option<SortConfig>,
    on_sort: EventHandler<SortKey>,
) -> Element {
    let indicator = match sort {
        Some(SortConfig { key, direction }) if key == sort_key => match direction {
            SortDirection::Asc => " \u{25B4}",
            SortDirection::Desc => " \u{25BE}",
        },
        _ => "",
    };

    rsx! {
        th {
            class: "sortable",
            onclick: move |_| on_sort.call(sort_key),
            "{label}{indicator}"
        }
    }
}

/// One table row, recursing into subcategories while this node is expanded.
///
/// Expansion is keyed by `{parent or "root"}-{id}`, so a category reachable
/// under two different parents expands independently in each place.
#[component]
fn CategoryRow(
    category: Category,
    level: usize,
    parent: Option<u64>,
    expanded: Signal<ExpansionSet>,
    on_select: EventHandler<u64>,
    on_edit: EventHandler<u64>,
    on_delete: EventHandler<Category>,
) -> Element {
    let node_key = expansion_key(parent, category.id);
    let is_expanded = expanded().is_expanded(&node_key);
    let has_children = !category.subcategories.is_empty();
    let category_id = category.id;

    // Rows without an expand button get extra indent so names line up
    let indent = level * 20 + if has_children { 0 } else { 30 };

    let toggle_key = node_key.clone();
    let mut expanded_signal = expanded;

    rsx! {
        tr {
            class: if level > 0 { "category-row nested" } else { "category-row" },
            td {
                div {
                    class: "category-name-cell",
                    style: "margin-left: {indent}px",
                    if has_children {
                        button {
                            class: "expand-toggle",
                            onclick: move |_| expanded_signal.write().toggle(&toggle_key),
                            if is_expanded { "-" } else { "+" }
                        }
                    }
                    span {
                        class: "category-name",
                        onclick: move |_| on_select.call(category_id),
                        "{category.name}"
                    }
                }
            }
            td { "{category.status_label()}" }
            td { "{category.product_count_or_zero()}" }
            td { "{category.created_date()}" }
            td {
                class: "category-actions",
                button {
                    class: "edit",
                    onclick: move |_| on_edit.call(category_id),
                    "Edit"
                }
                button {
                    class: "delete",
                    onclick: {
                        let category = category.clone();
                        move |_| on_delete.call(category.clone())
                    },
                    "Delete"
                }
            }
        }

        if is_expanded {
            for child in category.subcategories.clone() {
                CategoryRow {
                    key: "{expansion_key(Some(category_id), child.id)}",
                    category: child,
                    level: level + 1,
                    parent: Some(category_id),
                    expanded: expanded,
                    on_select: on_select,
                    on_edit: on_edit,
                    on_delete: on_delete,
                }
            }
        }
    }
}

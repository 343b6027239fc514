use dioxus::prelude::*;

use api::{CatalogClient, CategoryPatch};
use ui::use_session;

use crate::Route;

/// Edit-category form: loads the current fields, submits a partial update.
#[component]
pub fn CategoryEdit(id: u64) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut is_active = use_signal(|| true);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Pre-fill the form from the current category
    let _loader = use_resource(move || async move {
        let client = CatalogClient::new(session());
        match client.category(id).await {
            Ok(detail) => {
                name.set(detail.name);
                description.set(detail.description.unwrap_or_default());
                is_active.set(detail.is_active);
                error.set(None);
            }
            Err(e) => {
                tracing::error!("Failed to fetch category {id}: {e}");
                if e.is_unauthenticated() {
                    ui::redirect_to_login();
                }
                error.set(Some("Error fetching category".to_string()));
            }
        }
        loading.set(false);
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let category_name = name().trim().to_string();
            if category_name.is_empty() {
                error.set(Some("Category name is required".to_string()));
                return;
            }

            saving.set(true);
            let patch = CategoryPatch {
                name: Some(category_name),
                description: Some(description()),
                is_active: Some(is_active()),
                ..Default::default()
            };
            let client = CatalogClient::new(session());
            match client.update_category(id, &patch).await {
                Ok(_) => {
                    nav.push(Route::CategoryDetail { id });
                }
                Err(e) => {
                    tracing::error!("Failed to update category {id}: {e}");
                    if e.is_unauthenticated() {
                        ui::redirect_to_login();
                    }
                    saving.set(false);
                    error.set(Some("Error updating category".to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! { p { "Loading..." } };
    }

    rsx! {
        div {
            class: "category-form",

            h1 { "Edit Category" }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { "Category Name" }
                    input {
                        r#type: "text",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Description" }
                    textarea {
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Status" }
                    select {
                        value: if is_active() { "active" } else { "inactive" },
                        onchange: move |evt| is_active.set(evt.value() == "active"),
                        option { value: "active", "Active" }
                        option { value: "inactive", "Inactive" }
                    }
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    "Save"
                }
            }
        }
    }
}

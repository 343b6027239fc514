use dioxus::prelude::*;

use api::{CatalogClient, NewCategory};
use ui::use_session;

use crate::Route;

/// Create-category form.
#[component]
pub fn CategoryCreate() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut is_active = use_signal(|| true);
    let mut parent = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let category_name = name().trim().to_string();
            if category_name.is_empty() {
                error.set(Some("Category name is required".to_string()));
                return;
            }

            // An unparsable parent field is a user error, not "no parent"
            let parent_field = parent().trim().to_string();
            let parent_category = if parent_field.is_empty() {
                None
            } else {
                match parent_field.parse::<u64>() {
                    Ok(id) => Some(id),
                    Err(_) => {
                        error.set(Some("Parent category must be a numeric id".to_string()));
                        return;
                    }
                }
            };

            saving.set(true);
            let payload = NewCategory {
                name: category_name,
                description: description(),
                is_active: is_active(),
                parent_category,
            };
            let client = CatalogClient::new(session());
            match client.create_category(&payload).await {
                Ok(_) => {
                    nav.push(Route::Categories {});
                }
                Err(e) => {
                    tracing::error!("Failed to create category: {e}");
                    if e.is_unauthenticated() {
                        ui::redirect_to_login();
                    }
                    saving.set(false);
                    error.set(Some("Error creating category".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "category-form",

            h1 { "Create a New Category" }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { "Category Name" }
                    input {
                        r#type: "text",
                        placeholder: "Enter category name",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Description" }
                    textarea {
                        placeholder: "Enter description",
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

                div {
                    class: "form-field",
                    label { "Parent Category" }
                    input {
                        r#type: "number",
                        placeholder: "Enter parent category ID (optional)",
                        value: parent(),
                        oninput: move |evt| parent.set(evt.value()),
                    }
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    "Create Category"
                }
            }
        }
    }
}

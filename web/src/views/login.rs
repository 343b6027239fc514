//! Login page view with the username/password form.

use dioxus::prelude::*;

use api::CatalogClient;
use ui::use_session;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: straight to the overview
    if session().is_authenticated() {
        nav.replace(Route::Categories {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let user = username().trim().to_string();
            let pass = password();

            if user.is_empty() || pass.is_empty() {
                error.set(Some("Both fields are required!".to_string()));
                return;
            }

            loading.set(true);
            let mut client = CatalogClient::new(session());
            match client.login(&user, &pass).await {
                Ok(new_session) => {
                    session.set(new_session);
                    nav.replace(Route::Categories {});
                }
                Err(e) => {
                    tracing::error!("Login failed: {e}");
                    loading.set(false);
                    error.set(Some("Login failed".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",

            div {
                class: "login-card",

                h1 { "Login" }

                form {
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: username(),
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    if let Some(err) = error() {
                        p { class: "form-error", "{err}" }
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }
            }
        }
    }
}

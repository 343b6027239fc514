use dioxus::prelude::*;

use crate::auth::use_auth;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Top bar showing who is logged in. Renders nothing until the user loads.
#[component]
pub fn Header() -> Element {
    let auth = use_auth();

    let Some(user) = auth().user else {
        return rsx! {};
    };

    rsx! {
        document::Stylesheet { href: HEADER_CSS }

        header {
            class: "app-header",
            span { class: "app-header-name", "{user.display_name()}" }
            span { class: "app-header-email", "{user.email}" }
        }
    }
}

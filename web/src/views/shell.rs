use dioxus::prelude::*;

use ui::{Header, RequireAuth, Sidebar};

use crate::Route;

/// Layout around every protected route: sidebar on the left, header on top,
/// the routed view below. `RequireAuth` bounces unauthenticated visitors to
/// the login view before any of it renders.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireAuth {
            div {
                class: "app-layout",

                Sidebar {
                    on_view_categories: move |_| {
                        nav.push(Route::Categories {});
                    },
                    on_create_category: move |_| {
                        nav.push(Route::CategoryCreate {});
                    },
                }

                div {
                    class: "app-main",
                    Header {}
                    main {
                        class: "app-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

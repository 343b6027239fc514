use dioxus::prelude::*;

use crate::auth::LogoutButton;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Left navigation for the admin shell.
#[component]
pub fn Sidebar(
    on_view_categories: EventHandler<()>,
    on_create_category: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",
            nav {
                class: "sidebar-nav",
                button {
                    class: "sidebar-link view",
                    onclick: move |_| on_view_categories.call(()),
                    "View Categories"
                }
                button {
                    class: "sidebar-link create",
                    onclick: move |_| on_create_category.call(()),
                    "Create Category"
                }
                LogoutButton {
                    label: "Logout",
                    class: "sidebar-link logout",
                }
            }
        }
    }
}

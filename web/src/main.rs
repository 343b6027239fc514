use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Categories, CategoryCreate, CategoryDetail, CategoryEdit, Login, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/categories")]
        Categories {},
        #[route("/categories/create")]
        CategoryCreate {},
        #[route("/categories/:id")]
        CategoryDetail { id: u64 },
        #[route("/categories/:id/edit")]
        CategoryEdit { id: u64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/categories`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Categories {});
    rsx! {}
}

use dioxus::prelude::*;

use ui::CategoryTable;

use crate::Route;

/// Categories overview: the searchable, sortable, paginated tree table.
#[component]
pub fn Categories() -> Element {
    let nav = use_navigator();

    rsx! {
        CategoryTable {
            on_select: move |id| {
                nav.push(Route::CategoryDetail { id });
            },
            on_edit: move |id| {
                nav.push(Route::CategoryEdit { id });
            },
        }
    }
}

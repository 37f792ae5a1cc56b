use dioxus::prelude::*;

use crate::Route;

/// Header and page frame shared by every view.
#[component]
pub fn Shell() -> Element {
    let bookmarks = ui::use_bookmarks();
    let saved = bookmarks.list().len();

    rsx! {
        header {
            class: "app-header",
            Link { class: "brand", to: Route::Dashboard { page: 1 }, "Matrimony" }
            nav {
                class: "app-nav",
                Link { to: Route::Dashboard { page: 1 }, "Bookmarks ({saved})" }
                Link { to: Route::Search {}, "Search" }
                Link { class: "upgrade", to: Route::UpgradePlan {}, "Upgrade" }
            }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "empty-state",
            h2 { "Page not found" }
            p { "/{path}" }
            Link { to: Route::Dashboard { page: 1 }, "Back to bookmarks" }
        }
    }
}

use dioxus::prelude::*;

use ui::{use_bookmarks, GridListCard};

use super::{card_page, detail_route};

/// Bookmarked profiles, rendered with the same cards as search results.
#[component]
pub fn Dashboard(page: u32) -> Element {
    let bookmarks = use_bookmarks();
    let nav = use_navigator();
    let profiles = bookmarks.list();

    rsx! {
        section {
            class: "dashboard",
            h2 { "Bookmarked Profiles" }
            if profiles.is_empty() {
                p { class: "empty-state", "No bookmarked profiles yet." }
            } else {
                div {
                    class: "profile-grid",
                    for profile in profiles {
                        GridListCard {
                            key: "{profile.profile_id}",
                            profile: profile.clone(),
                            page_number: card_page(page),
                            on_open_profile: move |navigation| {
                                nav.push(detail_route(navigation));
                            },
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use ui::{use_filters, use_search_results, AdvancedSearch, GridListCard};

use super::{card_page, detail_route};
use crate::Route;

#[component]
pub fn Search() -> Element {
    let nav = use_navigator();

    rsx! {
        AdvancedSearch {
            on_search_results: move |_| {
                nav.push(Route::SearchProfiles { page: 1 });
            },
            on_find_match: move |_| {
                nav.push(Route::FindMatch {});
            },
            on_cancel: move |_| {
                nav.push(Route::Dashboard { page: 1 });
            },
        }
    }
}

/// Results of a quick profile-id search.
#[component]
pub fn SearchProfiles(page: u32) -> Element {
    let results = use_search_results();
    let nav = use_navigator();
    let profiles = results.get();
    let count = profiles.len();

    rsx! {
        section {
            class: "search-results",
            div {
                class: "results-header",
                h2 { "Search Results" }
                span { class: "results-count", "{count} found" }
            }
            if profiles.is_empty() {
                p { class: "empty-state", "No profiles found." }
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
            Link { class: "back-link", to: Route::Search {}, "Back to search" }
        }
    }
}

/// The filter set submitted from the advanced search form.
#[component]
pub fn FindMatch() -> Element {
    let filters = use_filters();
    let rows = filters.get().summary();

    rsx! {
        section {
            class: "find-match",
            h2 { "Matching Criteria" }
            if rows.is_empty() {
                p { class: "empty-state", "No filters selected. All profiles match." }
            } else {
                dl {
                    class: "criteria-list",
                    for (label, value) in rows {
                        dt { key: "{label}", "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            Link { class: "back-link", to: Route::Search {}, "Refine search" }
        }
    }
}

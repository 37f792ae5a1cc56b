use dioxus::prelude::*;

use ui::gallery::page_id_for_path;
use ui::secure_id::decode_profile_id;
use ui::{use_detail_navigation, use_services, ProfileSlickView};

use crate::Route;

#[component]
pub fn ProfileDetails(id: String, rasi: u8, order_by: String) -> Element {
    let services = use_services();
    let detail_nav = use_detail_navigation();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let Some(profile_id) = decode_profile_id(&id, &services.config.secure_id.key) else {
        tracing::warn!("Undecodable profile id in URL: {id}");
        return rsx! {
            div {
                class: "empty-state",
                h2 { "Profile not found" }
                Link { to: Route::Dashboard { page: 1 }, "Back to bookmarks" }
            }
        };
    };

    let page_id = page_id_for_path(&route.to_string()).to_string();
    // Card page the viewer came from, when the navigation was recorded for this id.
    let from_page = detail_nav
        .last()
        .filter(|last| last.secure_id == id)
        .map(|last| last.page_number);

    rsx! {
        section {
            class: "profile-details",
            div {
                class: "details-header",
                button { class: "back-link", onclick: move |_| nav.go_back(), "Back" }
                h2 { "Profile {profile_id}" }
                if rasi > 0 {
                    span { class: "details-meta", "Rasi {rasi}" }
                }
                if let Some(page) = from_page {
                    span { class: "details-meta", "Page {page}" }
                }
                if !order_by.is_empty() {
                    span { class: "details-meta", "Sorted by {order_by}" }
                }
            }
            ProfileSlickView { profile_id: profile_id.clone(), page_id }
        }
    }
}

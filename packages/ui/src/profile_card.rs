use dioxus::prelude::*;
use store::Profile;

use crate::access_gate::{check_access, CardGate, DetailNavigation, GateOutcome};
use crate::bookmarks::{reconcile_wish_list, toggle_bookmark};
use crate::context::{use_bookmarks, use_detail_navigation};
use crate::icons::{FaCircleCheck, FaLock};
use crate::components::{use_toast, ToastOptions};
use crate::regular_icons::FaBookmark as FaBookmarkOutline;
use crate::restriction_popups::RestrictionPopup;
use crate::services::use_services;
use crate::Icon;

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Profile summary card used in grid and list layouts.
///
/// Clicking the card runs the access gate; `on_open_profile` fires only when
/// the backend grants access.
#[component]
pub fn GridListCard(
    profile: Profile,
    #[props(default = 1)] page_number: u32,
    on_open_profile: EventHandler<DetailNavigation>,
) -> Element {
    let services = use_services();
    let mut bookmarks = use_bookmarks();
    let mut detail_nav = use_detail_navigation();
    let toast_api = use_toast();
    let mut gate = use_signal(CardGate::default);
    let mut image_failed = use_signal(|| false);

    // Backend-side wish-list entries join the durable set on first render.
    let wished = profile.clone();
    let storage = services.storage.clone();
    use_effect(move || {
        reconcile_wish_list(&storage, &mut bookmarks, &wished);
    });

    let settled = profile.is_settled();
    let bookmarked = bookmarks.contains(&profile.profile_id);
    let default_img = services
        .config
        .images
        .for_viewer(services.storage.viewer().gender)
        .to_string();
    let image_src = if image_failed() || profile.profile_img.trim().is_empty() {
        default_img
    } else {
        profile.profile_img.clone()
    };
    let name = if profile.profile_name.trim().is_empty() {
        "Unknown".to_string()
    } else {
        profile.profile_name.clone()
    };
    let profile_id = or_na(&profile.profile_id).to_string();
    let age = or_na(&profile.profile_age).to_string();
    let height = or_na(&profile.height).to_string();
    let degree = or_na(&profile.degree).to_string();
    let profession = or_na(&profile.profession).to_string();
    let location = or_na(&profile.location).to_string();
    let badge = profile.visited_marriage_badge.clone().unwrap_or_default();
    let cursor = if settled { "cursor-not-allowed" } else { "cursor-pointer" };

    let card_profile = profile.clone();
    let card_services = services.clone();
    let open_card = move |evt: Event<MouseData>| {
        evt.stop_propagation();
        if !gate.write().try_begin(&card_profile) {
            return;
        }
        let profile = card_profile.clone();
        let services = card_services.clone();
        spawn(async move {
            let outcome = check_access(
                &services.api,
                &services.storage,
                &services.config.secure_id.key,
                &profile,
                page_number,
            )
            .await;
            gate.write().finish(&outcome);
            match outcome {
                GateOutcome::Open(navigation) => {
                    detail_nav.record(navigation.clone());
                    on_open_profile.call(navigation);
                }
                GateOutcome::Notify(message) => toast_api.error(message, ToastOptions::new()),
                GateOutcome::Restricted(_) => {}
            }
        });
    };

    let bookmark_profile = profile.clone();
    let bookmark_storage = services.storage.clone();
    let on_bookmark = move |evt: Event<MouseData>| {
        evt.stop_propagation();
        toggle_bookmark(&bookmark_storage, &mut bookmarks, &bookmark_profile);
    };

    rsx! {
        div {
            class: "profile-card {cursor}",
            onclick: open_card,

            if gate.read().loading() {
                div {
                    class: "card-loading",
                    div { class: "spinner" }
                    p { "Please wait..." }
                }
            }

            div {
                class: "card-photo",
                img {
                    src: "{image_src}",
                    alt: "Profile-image",
                    onerror: move |_| image_failed.set(true),
                }
                if profile.photo_protection {
                    div {
                        class: "card-lock",
                        Icon { icon: FaLock, width: 40, height: 40 }
                        p { "Click and Enter password to view profile photo" }
                    }
                }
                if settled {
                    div {
                        class: "card-settled",
                        img {
                            src: "{badge}",
                            alt: "Marriage Badge",
                        }
                    }
                } else {
                    button {
                        class: "card-bookmark",
                        title: if bookmarked { "Remove bookmark" } else { "Bookmark" },
                        onclick: on_bookmark,
                        if bookmarked {
                            Icon { icon: crate::icons::FaBookmark, width: 20, height: 20 }
                        } else {
                            Icon { icon: FaBookmarkOutline, width: 20, height: 20 }
                        }
                    }
                }
            }

            div {
                class: "card-details",
                div {
                    class: "card-name",
                    h5 { "{name}" }
                    if profile.verified {
                        span { class: "verified", Icon { icon: FaCircleCheck, width: 18, height: 18 } }
                    }
                }
                p { class: "card-id", "({profile_id})" }
                p {
                    class: "card-meta",
                    "{age} yrs"
                    span { class: "divider", "|" }
                    "{height}"
                }
                p { class: "card-meta ellipsis", "{degree}" }
                p { class: "card-meta", "{profession}" }
                p { class: "card-meta", "{location}" }
            }

            if let Some(restriction) = gate.read().popup() {
                RestrictionPopup {
                    restriction,
                    on_close: move |_| gate.write().dismiss(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_render_as_na() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("  "), "N/A");
        assert_eq!(or_na("B.E"), "B.E");
    }
}

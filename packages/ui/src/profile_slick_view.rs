use dioxus::prelude::*;

use crate::gallery::{fallback_image, load_gallery, unlock_photos, Gallery, THUMBNAILS_SHOWN};
use crate::icons::{FaChevronLeft, FaChevronRight, FaLock, FaTriangleExclamation};
use crate::components::{use_toast, ToastLevel, ToastOptions};
use crate::services::use_services;
use crate::Icon;

/// Photo carousel of a profile's detail page, with the password gate for
/// protected photos.
#[component]
pub fn ProfileSlickView(profile_id: String, page_id: String) -> Element {
    let services = use_services();
    let mut gallery = use_signal(Gallery::loading);
    let mut password = use_signal(String::new);
    let toast_api = use_toast();
    let mut failed_url = use_signal(|| None::<String>);

    let loader_services = services.clone();
    let _loader = use_resource(use_reactive!(|(profile_id, page_id)| {
        let services = loader_services.clone();
        async move {
            gallery.set(Gallery::loading());
            let loaded = load_gallery(
                &services.api,
                &services.storage,
                &services.config.images,
                &profile_id,
                &page_id,
            )
            .await;
            gallery.set(loaded);
        }
    }));

    let fallback = fallback_image(&services.config.images, &profile_id).to_string();

    let submit_profile = profile_id.clone();
    let submit_fallback = fallback.clone();
    let submit_services = services.clone();
    let submit_password = move |_: Event<MouseData>| {
        let entered = password();
        let profile_id = submit_profile.clone();
        let fallback = submit_fallback.clone();
        let services = submit_services.clone();
        spawn(async move {
            let outcome = unlock_photos(&services.api, &services.storage, &profile_id, &entered).await;
            let (level, message) = outcome.toast();
            match level {
                ToastLevel::Success => toast_api.success(message.to_string(), ToastOptions::new()),
                ToastLevel::Error => toast_api.error(message.to_string(), ToastOptions::new()),
            }
            gallery.write().apply_unlock(&outcome, &fallback);
            password.set(String::new());
        });
    };

    let state = gallery();
    if state.is_loading() {
        return rsx! {
            div {
                class: "gallery-loading",
                div { class: "spinner" }
                p { "Loading images..." }
            }
        };
    }

    let urls = state.urls();
    let active_url = state.active_url().unwrap_or(&fallback).to_string();
    let shown_url = if failed_url.read().as_deref() == Some(active_url.as_str()) {
        fallback.clone()
    } else {
        active_url.clone()
    };
    let thumbnails: Vec<(usize, String)> = state
        .thumbnail_window(THUMBNAILS_SHOWN)
        .into_iter()
        .map(|i| (i, urls[i].clone()))
        .collect();
    let locked = state.is_locked();
    let photo_class = if locked { "gallery-main fade-img-effect" } else { "gallery-main" };

    rsx! {
        div {
            class: "profile-gallery",
            if let Some(error) = state.error() {
                div { class: "error-message", "{error}" }
            }

            div {
                class: "{photo_class}",
                onmouseenter: {
                    let url = active_url.clone();
                    move |_| gallery.write().hover(&url)
                },
                onmouseleave: move |_| gallery.write().leave(),
                img {
                    src: "{shown_url}",
                    alt: "Profile",
                    onerror: {
                        let url = active_url.clone();
                        move |_| failed_url.set(Some(url.clone()))
                    },
                }
                if state.is_carousel() {
                    button {
                        class: "gallery-arrow prev",
                        onclick: move |_| gallery.write().prev(),
                        Icon { icon: FaChevronLeft, width: 16, height: 16 }
                    }
                    button {
                        class: "gallery-arrow next",
                        onclick: move |_| gallery.write().next(),
                        Icon { icon: FaChevronRight, width: 16, height: 16 }
                    }
                }
                if locked {
                    div {
                        class: "lock-style",
                        role: "button",
                        onclick: move |_| gallery.write().request_unlock(),
                        Icon { icon: FaLock, width: 50, height: 50 }
                        p { "Click here to request password to view profile photo" }
                    }
                }
            }

            if state.is_carousel() {
                div {
                    class: "gallery-thumbnails",
                    for (index, url) in thumbnails {
                        img {
                            key: "{index}",
                            class: if index == state.active() { "thumbnail active" } else { "thumbnail" },
                            src: "{url}",
                            alt: "Thumb {index}",
                            onclick: move |_| gallery.write().select(index),
                            onmouseenter: move |_| gallery.write().hover_index(index),
                            onmouseleave: move |_| gallery.write().leave(),
                        }
                    }
                }
            }

            if state.is_prompting() {
                div {
                    class: "password-popup",
                    div {
                        class: "password-popup-header",
                        Icon { icon: FaTriangleExclamation, width: 22, height: 22 }
                        label { r#for: "photo-password", "Enter Password to View Photo" }
                    }
                    input {
                        id: "photo-password",
                        r#type: "password",
                        placeholder: "Enter The Password",
                        "aria-label": "Photo password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    div {
                        class: "popup-actions",
                        button {
                            class: "secondary",
                            onclick: move |_| {
                                password.set(String::new());
                                gallery.write().close_prompt();
                            },
                            "Cancel"
                        }
                        button { class: "primary", onclick: submit_password, "Submit" }
                    }
                }
            }
        }

        if let Some(zoom) = state.zoom() {
            div {
                class: "zoomed-image-container zoomed-visible",
                img { class: "zoomed-image", src: "{zoom}", alt: "Zoomed" }
            }
        }
    }
}

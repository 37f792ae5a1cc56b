use dioxus::prelude::*;

use crate::access_gate::Restriction;
use crate::components::{Dialog, DialogDescription, DialogTitle};
use crate::icons::{FaCrown, FaLock, FaTriangleExclamation};
use crate::Icon;

/// Where the upgrade buttons send the viewer.
pub const UPGRADE_PLAN_PATH: &str = "/UpgradePlan";

/// Full page load of the upgrade page.
pub fn open_upgrade_plan() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(UPGRADE_PLAN_PATH);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("Upgrade requested ({UPGRADE_PLAN_PATH})");
}

/// Text and buttons of one restriction popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupCopy {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    /// Label of the button that only closes the popup, if any.
    pub dismiss: Option<&'static str>,
    /// Label of the upgrade button, if any.
    pub upgrade: Option<&'static str>,
    pub tone: &'static str,
}

impl PopupCopy {
    pub fn for_restriction(restriction: Restriction) -> Self {
        match restriction {
            Restriction::FreeLimit => PopupCopy {
                title: "Viewing Limit Reached",
                lines: &[
                    "You have reached your profile viewing limit.",
                    "Upgrade your plan to continue viewing more profiles.",
                ],
                dismiss: Some("Cancel"),
                upgrade: Some("Upgrade Now"),
                tone: "danger",
            },
            Restriction::PremiumDailyLimit => PopupCopy {
                title: "Daily View Limit Reached",
                lines: &[
                    "Today’s view limit has been reached.",
                    "Please log in tomorrow to view more new profiles.",
                    "You can still revisit profiles you’ve already viewed.",
                ],
                dismiss: Some("OK"),
                upgrade: None,
                tone: "warning",
            },
            Restriction::PlatinumOnly => PopupCopy {
                title: "Platinum Members Only",
                lines: &[
                    "This profile is visible to Platinum members only.",
                    "Upgrade to Platinum to view this profile.",
                ],
                dismiss: Some("Cancel"),
                upgrade: Some("Upgrade"),
                tone: "platinum",
            },
        }
    }
}

#[component]
fn RestrictionDialog(restriction: Restriction, on_close: EventHandler<()>) -> Element {
    let copy = PopupCopy::for_restriction(restriction);
    let tone = copy.tone;

    rsx! {
        Dialog {
            on_close,
            div {
                class: "popup-icon {tone}",
                {match restriction {
                    Restriction::FreeLimit => rsx! { Icon { icon: FaLock, width: 22, height: 22 } },
                    Restriction::PremiumDailyLimit => rsx! { Icon { icon: FaTriangleExclamation, width: 22, height: 22 } },
                    Restriction::PlatinumOnly => rsx! { Icon { icon: FaCrown, width: 22, height: 22 } },
                }}
            }
            DialogTitle { class: "popup-title", "{copy.title}" }
            DialogDescription {
                class: "popup-message",
                for line in copy.lines.iter() {
                    p { "{line}" }
                }
            }
            div {
                class: "popup-actions",
                if let Some(label) = copy.dismiss {
                    button {
                        class: if copy.upgrade.is_some() { "secondary" } else { "primary" },
                        onclick: move |_| on_close.call(()),
                        "{label}"
                    }
                }
                if let Some(label) = copy.upgrade {
                    button { class: "primary", onclick: move |_| open_upgrade_plan(), "{label}" }
                }
            }
        }
    }
}

#[component]
pub fn FreeLimitPopup(on_close: EventHandler<()>) -> Element {
    rsx! { RestrictionDialog { restriction: Restriction::FreeLimit, on_close } }
}

#[component]
pub fn PremiumLimitPopup(on_close: EventHandler<()>) -> Element {
    rsx! { RestrictionDialog { restriction: Restriction::PremiumDailyLimit, on_close } }
}

#[component]
pub fn PlatinumPopup(on_close: EventHandler<()>) -> Element {
    rsx! { RestrictionDialog { restriction: Restriction::PlatinumOnly, on_close } }
}

/// The popup matching `restriction`.
#[component]
pub fn RestrictionPopup(restriction: Restriction, on_close: EventHandler<()>) -> Element {
    match restriction {
        Restriction::FreeLimit => rsx! { FreeLimitPopup { on_close } },
        Restriction::PremiumDailyLimit => rsx! { PremiumLimitPopup { on_close } },
        Restriction::PlatinumOnly => rsx! { PlatinumPopup { on_close } },
    }
}

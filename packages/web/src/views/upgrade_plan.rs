use dioxus::prelude::*;

/// Landing page for the upgrade buttons in the restriction popups.
#[component]
pub fn UpgradePlan() -> Element {
    rsx! {
        section {
            class: "upgrade-plan",
            h2 { "Upgrade Your Plan" }
            p { "Premium and Platinum members view more profiles every day." }
        }
    }
}

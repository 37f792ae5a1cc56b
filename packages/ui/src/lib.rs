//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`context`] | [`AppState`] and its capability handles, [`AppProvider`] |
//! | [`access_gate`] | Card click → eligibility check → detail / popup / toast |
//! | [`bookmarks`] | Bookmark toggling kept in step with storage |
//! | [`gallery`] | Photo carousel and password gate state |
//! | [`search_form`] | Quick search and age-range rules |
//! | [`secure_id`] | Profile id obfuscation for detail URLs |
//! | [`components`] | Toast and dialog wrappers over `dioxus-primitives` |

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod regular_icons {
    pub use dioxus_free_icons::icons::fa_regular_icons::*;
}

pub const MATRIMONY_CSS: Asset = asset!("/assets/matrimony.css");

pub mod access_gate;
pub mod bookmarks;
pub mod context;
pub mod gallery;
pub mod search_form;
pub mod secure_id;
mod timer;

mod services;
pub use services::{make_services, make_storage, use_services, PlatformStore, Services};

pub use context::{
    use_app_state, use_bookmarks, use_detail_navigation, use_filters, use_search_results,
    AppProvider, AppState, BookmarkHandle, DetailNavHandle, DhosamPreference, FilterHandle,
    SearchFilters, SearchResultsHandle,
};
pub use components::{use_toast, ToastLevel, ToastOptions};

mod restriction_popups;
pub use restriction_popups::{
    open_upgrade_plan, FreeLimitPopup, PlatinumPopup, PopupCopy, PremiumLimitPopup,
    RestrictionPopup,
};

mod profile_card;
pub use profile_card::GridListCard;

mod profile_slick_view;
pub use profile_slick_view::ProfileSlickView;

mod advanced_search;
pub use advanced_search::AdvancedSearch;

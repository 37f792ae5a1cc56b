//! # Shared application state
//!
//! [`AppState`] is built once by [`AppProvider`] and handed out through Dioxus
//! context. Components never receive the whole state: they ask for the handle
//! covering the slice they mutate.
//!
//! | Handle | Slice | Used by |
//! |--------|-------|---------|
//! | [`FilterHandle`] | [`SearchFilters`] | advanced search form, find-match view |
//! | [`BookmarkHandle`] | selected (bookmarked) profiles | profile cards, dashboard |
//! | [`SearchResultsHandle`] | quick-search results | search form, results view |
//! | [`DetailNavHandle`] | last navigation into a profile detail | profile cards, detail view |

use dioxus::prelude::*;
use store::{Gender, MatrimonyConfig, Profile};

use crate::access_gate::DetailNavigation;
use crate::bookmarks::BookmarkSink;
use crate::components::ToastProvider;
use crate::services::make_services;

/// Preference for a dhosam filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DhosamPreference {
    Yes,
    No,
    Both,
}

impl DhosamPreference {
    pub const ALL: [DhosamPreference; 3] = [Self::Yes, Self::No, Self::Both];

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Both => "Both",
        }
    }
}

impl std::fmt::Display for DhosamPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Every filter of the advanced search form. Numeric bounds use 0 for "not set".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilters {
    pub from_age: u32,
    pub to_age: u32,
    pub from_height: u32,
    pub to_height: u32,
    pub marital_status: Vec<String>,
    pub professions: Vec<String>,
    pub education: String,
    pub field_of_study: Vec<String>,
    pub min_income: String,
    pub max_income: String,
    pub chevvai_dhosam: Option<DhosamPreference>,
    pub rahu_ketu_dhosam: Option<DhosamPreference>,
    pub birth_star: String,
    pub native_state: Vec<String>,
    pub work_location: String,
    pub people_only_with_photo: bool,
}

impl SearchFilters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Seed the height filter from the viewer's own height: the upper bound for
    /// male viewers, the lower bound for female viewers.
    pub fn seed_height(&mut self, viewer_gender: Option<Gender>, height: u32) {
        match viewer_gender {
            Some(Gender::Male) => self.to_height = height,
            Some(Gender::Female) => self.from_height = height,
            None => {}
        }
    }

    /// Human-readable `(label, value)` pairs for every filter that is set.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        let range = |from: u32, to: u32| match (from, to) {
            (0, 0) => None,
            (f, 0) => Some(format!("from {f}")),
            (0, t) => Some(format!("up to {t}")),
            (f, t) => Some(format!("{f} to {t}")),
        };
        if let Some(ages) = range(self.from_age, self.to_age) {
            rows.push(("Age", ages));
        }
        if let Some(heights) = range(self.from_height, self.to_height) {
            rows.push(("Height", heights));
        }
        let lists: [(&'static str, &Vec<String>); 4] = [
            ("Marital status", &self.marital_status),
            ("Profession", &self.professions),
            ("Field of study", &self.field_of_study),
            ("Native state", &self.native_state),
        ];
        for (label, values) in lists {
            if !values.is_empty() {
                rows.push((label, values.join(", ")));
            }
        }
        let singles: [(&'static str, &String); 5] = [
            ("Education", &self.education),
            ("Minimum income", &self.min_income),
            ("Maximum income", &self.max_income),
            ("Birth star", &self.birth_star),
            ("Work location", &self.work_location),
        ];
        for (label, value) in singles {
            if !value.is_empty() {
                rows.push((label, value.clone()));
            }
        }
        if let Some(pref) = self.chevvai_dhosam {
            rows.push(("Chevvai dhosam", pref.label().to_string()));
        }
        if let Some(pref) = self.rahu_ketu_dhosam {
            rows.push(("Rahu/Ketu dhosam", pref.label().to_string()));
        }
        if self.people_only_with_photo {
            rows.push(("Photo", "Only profiles with photo".to_string()));
        }
        rows
    }
}

/// Add `id` to `set` when `checked`, remove it otherwise. Keeps insertion order
/// and never duplicates.
pub fn set_membership(set: &mut Vec<String>, id: &str, checked: bool) {
    let present = set.iter().any(|v| v == id);
    if checked && !present {
        set.push(id.to_string());
    } else if !checked && present {
        set.retain(|v| v != id);
    }
}

/// Flip membership of `id` in `set`.
pub fn toggle_membership(set: &mut Vec<String>, id: &str) {
    let present = set.iter().any(|v| v == id);
    set_membership(set, id, !present);
}

/// Root of the shared state. Cheap to copy: every field is a signal.
#[derive(Clone, Copy)]
pub struct AppState {
    filters: Signal<SearchFilters>,
    selected_profiles: Signal<Vec<Profile>>,
    search_results: Signal<Vec<Profile>>,
    detail_navigation: Signal<Option<DetailNavigation>>,
}

impl AppState {
    /// Must be called inside a component scope.
    pub fn new(initial_bookmarks: Vec<Profile>) -> Self {
        Self {
            filters: Signal::new(SearchFilters::default()),
            selected_profiles: Signal::new(initial_bookmarks),
            search_results: Signal::new(Vec::new()),
            detail_navigation: Signal::new(None),
        }
    }

    pub fn filters(self) -> FilterHandle {
        FilterHandle {
            filters: self.filters,
        }
    }

    pub fn bookmarks(self) -> BookmarkHandle {
        BookmarkHandle {
            selected: self.selected_profiles,
        }
    }

    pub fn search_results(self) -> SearchResultsHandle {
        SearchResultsHandle {
            results: self.search_results,
        }
    }

    pub fn detail_navigation(self) -> DetailNavHandle {
        DetailNavHandle {
            last: self.detail_navigation,
        }
    }
}

/// Read and update the advanced search filters.
#[derive(Clone, Copy)]
pub struct FilterHandle {
    filters: Signal<SearchFilters>,
}

impl FilterHandle {
    /// Current filters (subscribes the caller).
    pub fn get(&self) -> SearchFilters {
        self.filters.read().clone()
    }

    pub fn update(&mut self, f: impl FnOnce(&mut SearchFilters)) {
        f(&mut self.filters.write());
    }

    pub fn set_age_range(&mut self, from: u32, to: u32) {
        self.update(|filters| {
            filters.from_age = from;
            filters.to_age = to;
        });
    }

    pub fn reset(&mut self) {
        self.update(SearchFilters::reset);
    }
}

/// The bookmarked profiles mirrored from durable storage.
#[derive(Clone, Copy)]
pub struct BookmarkHandle {
    selected: Signal<Vec<Profile>>,
}

impl BookmarkHandle {
    pub fn list(&self) -> Vec<Profile> {
        self.selected.read().clone()
    }

    pub fn contains(&self, profile_id: &str) -> bool {
        self.selected.read().iter().any(|p| p.profile_id == profile_id)
    }
}

impl BookmarkSink for BookmarkHandle {
    fn set_selected_profiles(&mut self, profiles: Vec<Profile>) {
        self.selected.set(profiles);
    }
}

/// Profiles found by the quick id/name search.
#[derive(Clone, Copy)]
pub struct SearchResultsHandle {
    results: Signal<Vec<Profile>>,
}

impl SearchResultsHandle {
    pub fn get(&self) -> Vec<Profile> {
        self.results.read().clone()
    }

    pub fn set(&mut self, profiles: Vec<Profile>) {
        self.results.set(profiles);
    }
}

/// Where the viewer last navigated into a profile from.
#[derive(Clone, Copy)]
pub struct DetailNavHandle {
    last: Signal<Option<DetailNavigation>>,
}

impl DetailNavHandle {
    pub fn last(&self) -> Option<DetailNavigation> {
        self.last.read().clone()
    }

    pub fn record(&mut self, navigation: DetailNavigation) {
        self.last.set(Some(navigation));
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

pub fn use_filters() -> FilterHandle {
    use_app_state().filters()
}

pub fn use_bookmarks() -> BookmarkHandle {
    use_app_state().bookmarks()
}

pub fn use_search_results() -> SearchResultsHandle {
    use_app_state().search_results()
}

pub fn use_detail_navigation() -> DetailNavHandle {
    use_app_state().detail_navigation()
}

/// Provides services, shared state and the toast host to its children.
/// Wrap the router with this component.
#[component]
pub fn AppProvider(config: MatrimonyConfig, children: Element) -> Element {
    let services = use_context_provider(|| make_services(config));
    use_context_provider(|| AppState::new(services.storage.bookmarks()));

    rsx! {
        ToastProvider {
            {children}
        }
    }
}

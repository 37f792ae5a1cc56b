//! # Storage — typed browser-storage operations on an abstract key/value store
//!
//! [`Storage`] is the only place in the workspace that knows which keys live in
//! local storage, which live in session storage, and how their values are
//! encoded. All reads and writes go through the [`KeyValueStore`] trait, so the
//! same logic works against the browser's `localStorage`/`sessionStorage`
//! ([`crate::WebStorage`]) or an in-memory map ([`crate::MemoryStore`]) on native
//! targets and in tests.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous interface with three methods: `get`, `set` and `remove`. Browser
//! storage calls are synchronous and each write replaces a single key, so no
//! transaction semantics are needed.
//!
//! ## Operations
//!
//! | Method | Scope | Description |
//! |--------|-------|-------------|
//! | [`viewer`](Storage::viewer) | local | Logged-in member id, gender and age. |
//! | [`bookmarks`](Storage::bookmarks) / [`set_bookmarks`](Storage::set_bookmarks) | local | Ordered bookmark set (JSON array of [`Profile`]). |
//! | [`toggle_bookmark`](Storage::toggle_bookmark) | local | Add or remove one profile by id, returning the new state. |
//! | [`unlocked_images`](Storage::unlocked_images) / [`cache_unlocked_images`](Storage::cache_unlocked_images) | session | Photo sets revealed by password, keyed by profile id. |
//! | [`photo_lock`](Storage::photo_lock) / [`set_photo_lock_value`](Storage::set_photo_lock_value) | session | Photo-lock flags. |
//! | [`search_state`](Storage::search_state) | session | Snapshot of the listing's search/pagination state. |
//! | [`set_search_profile`](Storage::set_search_profile) / [`clear_search_profile`](Storage::clear_search_profile) | session | Last quick-search query. |
//! | [`viewer_height`](Storage::viewer_height) | session | Viewer's own height, seeded into height filters. |
//!
//! Decoding failures are treated as "no value": a corrupt bookmark entry reads as
//! an empty set rather than breaking the page.

use crate::keys;
use crate::models::{Gender, Profile, UserImages};

/// Synchronous string key/value store (local or session scope).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The logged-in member, as recorded by the login flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewer {
    /// Empty when nobody is logged in.
    pub profile_id: String,
    pub gender: Option<Gender>,
    /// 0 when unknown.
    pub age: u32,
}

impl Viewer {
    pub fn is_logged_in(&self) -> bool {
        !self.profile_id.is_empty()
    }
}

/// Listing state carried to the detail view so "back" restores the same page.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    pub search_profile_id: String,
    pub profession: String,
    pub select_age: String,
    pub selected_location: String,
    pub pagination_value: String,
    pub current_view: String,
    pub sort_order: String,
    pub search_value: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            search_profile_id: String::new(),
            profession: String::new(),
            select_age: String::new(),
            selected_location: String::new(),
            pagination_value: "1".to_string(),
            current_view: "gridlist".to_string(),
            sort_order: "1".to_string(),
            search_value: String::new(),
        }
    }
}

/// Typed access to local + session storage.
#[derive(Clone, Debug)]
pub struct Storage<S: KeyValueStore> {
    local: S,
    session: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(local: S, session: S) -> Self {
        Self { local, session }
    }

    pub fn local(&self) -> &S {
        &self.local
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// The logged-in member.
    pub fn viewer(&self) -> Viewer {
        Viewer {
            profile_id: self.local.get(keys::LOGIN_PROFILE_ID).unwrap_or_default(),
            gender: self
                .local
                .get(keys::GENDER)
                .as_deref()
                .and_then(Gender::parse),
            age: self
                .local
                .get(keys::AGE)
                .and_then(|a| a.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    /// The durable bookmark set, in insertion order.
    pub fn bookmarks(&self) -> Vec<Profile> {
        let Some(raw) = self.local.get(keys::BOOKMARKED_PROFILES) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Ignoring unreadable bookmark set: {e}");
                Vec::new()
            }
        }
    }

    pub fn set_bookmarks(&self, profiles: &[Profile]) {
        match serde_json::to_string(profiles) {
            Ok(json) => self.local.set(keys::BOOKMARKED_PROFILES, &json),
            Err(e) => tracing::error!("Failed to encode bookmark set: {e}"),
        }
    }

    pub fn is_bookmarked(&self, profile_id: &str) -> bool {
        self.bookmarks().iter().any(|p| p.profile_id == profile_id)
    }

    /// Add `profile` if absent, remove it if present. Returns the updated set
    /// and whether the profile is now bookmarked.
    pub fn toggle_bookmark(&self, profile: &Profile) -> (Vec<Profile>, bool) {
        let mut set = self.bookmarks();
        let before = set.len();
        set.retain(|p| p.profile_id != profile.profile_id);
        let now_bookmarked = set.len() == before;
        if now_bookmarked {
            set.push(profile.clone());
        }
        self.set_bookmarks(&set);
        (set, now_bookmarked)
    }

    /// Make sure a profile the backend reports as wish-listed is in the durable set.
    pub fn ensure_bookmarked(&self, profile: &Profile) -> bool {
        let mut set = self.bookmarks();
        if set.iter().any(|p| p.profile_id == profile.profile_id) {
            return false;
        }
        set.push(profile.clone());
        self.set_bookmarks(&set);
        true
    }

    /// Photo set previously unlocked for `profile_id` in this session.
    pub fn unlocked_images(&self, profile_id: &str) -> Option<UserImages> {
        let raw = self.session.get(&keys::user_images(profile_id))?;
        serde_json::from_str(&raw).ok()
    }

    pub fn cache_unlocked_images(&self, profile_id: &str, images: &UserImages) {
        if let Ok(json) = serde_json::to_string(images) {
            self.session.set(&keys::user_images(profile_id), &json);
        }
    }

    /// Whether photos start locked. Absent means locked.
    pub fn photo_lock(&self) -> bool {
        self.session
            .get(keys::PHOTO_LOCK)
            .map(|v| v.trim() != "0")
            .unwrap_or(true)
    }

    /// Record the protection flag returned after a successful unlock.
    pub fn set_photo_lock_value(&self, locked: bool) {
        self.session
            .set(keys::PHOTO_LOCK_VALUE, if locked { "1" } else { "0" });
    }

    pub fn set_search_profile(&self, query: &str) {
        self.session.set(keys::SEARCH_PROFILE, query);
    }

    pub fn clear_search_profile(&self) {
        self.session.remove(keys::SEARCH_PROFILE);
    }

    pub fn search_profile(&self) -> Option<String> {
        self.session.get(keys::SEARCH_PROFILE)
    }

    /// Viewer's own height in cm, if the profile page recorded it.
    pub fn viewer_height(&self) -> Option<u32> {
        self.session
            .get(keys::USER_HEIGHT)
            .and_then(|h| h.trim().parse().ok())
    }

    /// Snapshot of the listing state. Missing and blank keys take the listing
    /// defaults.
    pub fn search_state(&self) -> SearchState {
        let defaults = SearchState::default();
        let read = |key: &str, default: String| {
            self.session
                .get(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(default)
        };
        SearchState {
            search_profile_id: read(keys::SEARCH_PROFILE_ID, defaults.search_profile_id),
            profession: read(keys::PROFESSION, defaults.profession),
            select_age: read(keys::SELECT_AGE, defaults.select_age),
            selected_location: read(keys::SELECTED_LOCATION, defaults.selected_location),
            pagination_value: read(keys::PAGINATION_VALUE, defaults.pagination_value),
            current_view: read(keys::CURRENT_VIEW, defaults.current_view),
            sort_order: read(keys::SORT_ORDER, defaults.sort_order),
            search_value: read(keys::SEARCH_VALUE, defaults.search_value),
        }
    }
}

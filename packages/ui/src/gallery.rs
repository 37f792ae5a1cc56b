//! # Photo gallery and password gate
//!
//! [`Gallery`] is the state behind the profile photo carousel. The main image and
//! the thumbnail strip both read one `active` index, so they cannot drift apart.
//!
//! ```text
//! Loading ──load──▶ Open
//!    │
//!    └────load────▶ Locked ──request_unlock──▶ Prompting
//!                     ▲                           │
//!                     └──── rejected / cancel ────┤
//!                                                 └── unlocked ──▶ Unlocked
//! ```
//!
//! A photo set unlocked earlier in the session is cached under
//! `userImages_<id>` and wins over the (still locked) set fetched on mount.

use api::{Backend, MatrimonyApi, PhotoUnlock};
use store::config::ImagesConfig;
use store::{Gender, KeyValueStore, Storage, UserImages};

use crate::components::ToastLevel;

pub const EMPTY_PASSWORD_MESSAGE: &str = "Please Enter Password";
pub const WRONG_PASSWORD_MESSAGE: &str = "Please Enter Correct Password";
pub const UNLOCK_FAILED_MESSAGE: &str = "An error occurred. Please try again.";
pub const UNLOCKED_MESSAGE: &str = "Photo fetched successfully";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching profiles";

/// Number of thumbnails visible at once.
pub const THUMBNAILS_SHOWN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoAccess {
    Loading,
    Open,
    Locked,
    /// Locked, with the password prompt on screen.
    Prompting,
    Unlocked,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    images: UserImages,
    access: PhotoAccess,
    active: usize,
    zoom: Option<String>,
    error: Option<String>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::loading()
    }
}

impl Gallery {
    pub fn loading() -> Self {
        Self {
            images: UserImages::new(),
            access: PhotoAccess::Loading,
            active: 0,
            zoom: None,
            error: None,
        }
    }

    /// Settle the fetched photo set. `locked` is the combined protection flag;
    /// a session-cached unlocked set overrides both.
    pub fn load(&mut self, fetched: &UserImages, fallback: &str, locked: bool, cached: Option<UserImages>) {
        match cached {
            Some(unlocked) => {
                self.images = unlocked.normalized(fallback);
                self.access = PhotoAccess::Unlocked;
            }
            None => {
                self.images = fetched.normalized(fallback);
                self.access = if locked {
                    PhotoAccess::Locked
                } else {
                    PhotoAccess::Open
                };
            }
        }
        self.active = 0;
        self.error = None;
    }

    /// Fetch failed: show the default photo and the error.
    pub fn load_failed(&mut self, fallback: &str, message: Option<&str>) {
        self.images = UserImages::single_default(fallback);
        self.access = PhotoAccess::Open;
        self.active = 0;
        self.error = message.map(str::to_string);
    }

    pub fn access(&self) -> PhotoAccess {
        self.access
    }

    pub fn is_loading(&self) -> bool {
        self.access == PhotoAccess::Loading
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.access, PhotoAccess::Locked | PhotoAccess::Prompting)
    }

    pub fn is_prompting(&self) -> bool {
        self.access == PhotoAccess::Prompting
    }

    pub fn request_unlock(&mut self) {
        if self.access == PhotoAccess::Locked {
            self.access = PhotoAccess::Prompting;
        }
    }

    pub fn close_prompt(&mut self) {
        if self.access == PhotoAccess::Prompting {
            self.access = PhotoAccess::Locked;
        }
    }

    /// Apply the result of a password submission. The prompt always closes.
    pub fn apply_unlock(&mut self, outcome: &UnlockOutcome, fallback: &str) {
        self.close_prompt();
        if let UnlockOutcome::Unlocked { images, revealed, .. } = outcome {
            if let Some(images) = images {
                self.images = images.normalized(fallback);
                self.active = 0;
            }
            if *revealed {
                self.access = PhotoAccess::Unlocked;
            }
        }
    }

    pub fn images(&self) -> &UserImages {
        &self.images
    }

    pub fn urls(&self) -> Vec<String> {
        self.images.urls()
    }

    /// More than one photo: show the thumbnail strip.
    pub fn is_carousel(&self) -> bool {
        self.images.len() > 1
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_url(&self) -> Option<&str> {
        self.images.get(self.active).map(|e| e.url.as_str())
    }

    pub fn select(&mut self, index: usize) {
        let len = self.images.len();
        if len > 0 {
            self.active = index % len;
        }
    }

    pub fn next(&mut self) {
        self.select(self.active + 1);
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.active = (self.active + len - 1) % len;
        }
    }

    /// Indices shown in the thumbnail strip, starting at the active photo and
    /// wrapping around.
    pub fn thumbnail_window(&self, shown: usize) -> Vec<usize> {
        let len = self.images.len();
        (0..shown.min(len)).map(|i| (self.active + i) % len).collect()
    }

    pub fn hover(&mut self, url: &str) {
        self.zoom = Some(url.to_string());
    }

    /// Zoom the photo at `index`, as when hovering its thumbnail. The active
    /// photo does not change.
    pub fn hover_index(&mut self, index: usize) {
        if let Some(entry) = self.images.get(index) {
            self.zoom = Some(entry.url.clone());
        }
    }

    pub fn leave(&mut self) {
        self.zoom = None;
    }

    pub fn zoom(&self) -> Option<&str> {
        self.zoom.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Result of a password submission.
#[derive(Clone, Debug, PartialEq)]
pub enum UnlockOutcome {
    /// Blank password; nothing was sent.
    EmptyPassword,
    Unlocked {
        images: Option<UserImages>,
        /// Whether the photos should now show without the lock overlay.
        revealed: bool,
        message: String,
    },
    WrongPassword,
    Failed,
}

impl UnlockOutcome {
    pub fn toast(&self) -> (ToastLevel, &str) {
        match self {
            UnlockOutcome::EmptyPassword => (ToastLevel::Error, EMPTY_PASSWORD_MESSAGE),
            UnlockOutcome::Unlocked { message, .. } => (ToastLevel::Success, message.as_str()),
            UnlockOutcome::WrongPassword => (ToastLevel::Error, WRONG_PASSWORD_MESSAGE),
            UnlockOutcome::Failed => (ToastLevel::Error, UNLOCK_FAILED_MESSAGE),
        }
    }
}

/// Default photo for the profile being viewed.
pub fn fallback_image<'a>(images: &'a ImagesConfig, profile_id: &str) -> &'a str {
    images.for_member(Gender::from_profile_id(profile_id))
}

/// Page id sent when fetching details: `"1"` from the home and search pages,
/// `"2"` everywhere else.
pub fn page_id_for_path(path: &str) -> &'static str {
    let route = path.split('?').next().unwrap_or(path);
    match route.trim_end_matches('/') {
        "/LoginHome" | "/Search" => "1",
        _ => "2",
    }
}

/// Fetch the photo set of `profile_id` and decide the initial gallery state.
pub async fn load_gallery<B: Backend, S: KeyValueStore>(
    api: &MatrimonyApi<B>,
    storage: &Storage<S>,
    images_config: &ImagesConfig,
    profile_id: &str,
    page_id: &str,
) -> Gallery {
    let fallback = fallback_image(images_config, profile_id);
    let mut gallery = Gallery::loading();
    let viewer = storage.viewer();
    if !viewer.is_logged_in() {
        gallery.load_failed(fallback, None);
        return gallery;
    }
    match api.profile_details(&viewer.profile_id, profile_id, page_id).await {
        Ok(details) => {
            let locked = details.photo_protection && storage.photo_lock();
            let cached = storage.unlocked_images(profile_id);
            gallery.load(&details.user_images, fallback, locked, cached);
        }
        Err(e) => {
            tracing::warn!("Failed to fetch photos of {profile_id}: {e}");
            gallery.load_failed(fallback, Some(FETCH_FAILED_MESSAGE));
        }
    }
    gallery
}

/// Submit a photo password. A blank password sends nothing.
pub async fn unlock_photos<B: Backend, S: KeyValueStore>(
    api: &MatrimonyApi<B>,
    storage: &Storage<S>,
    profile_id: &str,
    password: &str,
) -> UnlockOutcome {
    if password.trim().is_empty() {
        return UnlockOutcome::EmptyPassword;
    }
    let viewer = storage.viewer();
    match api
        .photo_by_password(&viewer.profile_id, profile_id, password)
        .await
    {
        Ok(PhotoUnlock::Unlocked {
            images,
            photo_protection,
            message,
        }) => {
            if let Some(images) = &images {
                storage.cache_unlocked_images(profile_id, images);
            }
            if let Some(protected) = photo_protection {
                storage.set_photo_lock_value(protected);
            }
            UnlockOutcome::Unlocked {
                revealed: images.is_some() || photo_protection == Some(false),
                images,
                message: message.unwrap_or_else(|| UNLOCKED_MESSAGE.to_string()),
            }
        }
        Ok(PhotoUnlock::Rejected) => UnlockOutcome::WrongPassword,
        Err(e) => {
            tracing::warn!("Photo password request failed: {e}");
            UnlockOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{StaticBackend, PHOTO_BY_PASSWORD_PATH, PROFILE_ACCESS_PATH};
    use serde_json::json;
    use store::{keys, MemoryStore};

    const FALLBACK: &str = "bride.png";

    fn images(urls: &[&str]) -> UserImages {
        let mut set = UserImages::new();
        for (i, url) in urls.iter().enumerate() {
            set.push((i + 1).to_string(), *url);
        }
        set
    }

    fn storage() -> Storage<MemoryStore> {
        let local = MemoryStore::with_entries([(keys::LOGIN_PROFILE_ID, "VM1")]);
        Storage::new(local, MemoryStore::new())
    }

    #[test]
    fn test_empty_set_becomes_single_default() {
        let mut gallery = Gallery::loading();
        gallery.load(&UserImages::new(), FALLBACK, false, None);
        assert_eq!(gallery.access(), PhotoAccess::Open);
        assert_eq!(gallery.images().len(), 1);
        assert_eq!(gallery.images().entries()[0].key, "default");
        assert_eq!(gallery.active_url(), Some(FALLBACK));
        assert!(!gallery.is_carousel());
    }

    #[test]
    fn test_single_active_index_wraps_both_ways() {
        let mut gallery = Gallery::loading();
        gallery.load(&images(&["a", "b", "c"]), FALLBACK, false, None);
        assert!(gallery.is_carousel());

        gallery.prev();
        assert_eq!(gallery.active(), 2);
        gallery.next();
        assert_eq!(gallery.active(), 0);
        gallery.select(4);
        assert_eq!(gallery.active_url(), Some("b"));
        assert_eq!(gallery.thumbnail_window(THUMBNAILS_SHOWN), vec![1, 2, 0]);
    }

    #[test]
    fn test_lock_prompt_transitions() {
        let mut gallery = Gallery::loading();
        gallery.request_unlock();
        assert_eq!(gallery.access(), PhotoAccess::Loading);

        gallery.load(&images(&["a", "b"]), FALLBACK, true, None);
        assert!(gallery.is_locked());
        gallery.request_unlock();
        assert!(gallery.is_prompting());
        gallery.close_prompt();
        assert_eq!(gallery.access(), PhotoAccess::Locked);

        gallery.request_unlock();
        gallery.apply_unlock(&UnlockOutcome::WrongPassword, FALLBACK);
        assert_eq!(gallery.access(), PhotoAccess::Locked);

        gallery.request_unlock();
        gallery.apply_unlock(
            &UnlockOutcome::Unlocked {
                images: Some(images(&["real"])),
                revealed: true,
                message: UNLOCKED_MESSAGE.to_string(),
            },
            FALLBACK,
        );
        assert_eq!(gallery.access(), PhotoAccess::Unlocked);
        assert_eq!(gallery.urls(), vec!["real"]);
    }

    #[test]
    fn test_cached_unlocked_set_takes_precedence() {
        let mut gallery = Gallery::loading();
        gallery.load(&images(&["blurred"]), FALLBACK, true, Some(images(&["clear1", "clear2"])));
        assert_eq!(gallery.access(), PhotoAccess::Unlocked);
        assert_eq!(gallery.urls(), vec!["clear1", "clear2"]);
    }

    #[test]
    fn test_hover_zoom() {
        let mut gallery = Gallery::loading();
        gallery.hover("a.png");
        assert_eq!(gallery.zoom(), Some("a.png"));
        gallery.leave();
        assert_eq!(gallery.zoom(), None);
    }

    #[test]
    fn test_thumbnail_hover_zooms_that_photo() {
        let mut gallery = Gallery::loading();
        gallery.load(&images(&["a.png", "b.png", "c.png"]), FALLBACK, false, None);
        gallery.hover_index(2);
        assert_eq!(gallery.zoom(), Some("c.png"));
        assert_eq!(gallery.active(), 0);
        gallery.hover_index(9);
        assert_eq!(gallery.zoom(), Some("c.png"));
        gallery.leave();
        assert_eq!(gallery.zoom(), None);
    }

    #[test]
    fn test_page_id_by_path() {
        assert_eq!(page_id_for_path("/LoginHome"), "1");
        assert_eq!(page_id_for_path("/Search/"), "1");
        assert_eq!(page_id_for_path("/ProfileDetails"), "2");
        assert_eq!(page_id_for_path("/LoginHome?page=2"), "1");
    }

    #[tokio::test]
    async fn test_blank_password_sends_nothing() {
        let backend = StaticBackend::new();
        let api = MatrimonyApi::new(backend.clone());
        let outcome = unlock_photos(&api, &storage(), "VF2", "   ").await;
        assert_eq!(outcome, UnlockOutcome::EmptyPassword);
        assert_eq!(outcome.toast(), (ToastLevel::Error, "Please Enter Password"));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_successful_unlock_is_cached_for_the_session() {
        let backend = StaticBackend::new().reply(
            PHOTO_BY_PASSWORD_PATH,
            json!({
                "status": "success",
                "photo_protection": 0,
                "data": {"user_images": {"1": "real.png"}}
            }),
        );
        let api = MatrimonyApi::new(backend);
        let storage = storage();

        let outcome = unlock_photos(&api, &storage, "VF2", "secret").await;
        assert_eq!(outcome.toast(), (ToastLevel::Success, UNLOCKED_MESSAGE));
        assert_eq!(
            storage.unlocked_images("VF2").map(|i| i.urls()),
            Some(vec!["real.png".to_string()])
        );
        assert_eq!(storage.session().get(keys::PHOTO_LOCK_VALUE).as_deref(), Some("0"));
    }

    #[tokio::test]
    async fn test_rejection_and_transport_failure() {
        let backend = StaticBackend::new().reply(PHOTO_BY_PASSWORD_PATH, json!({"status": "failure"}));
        let api = MatrimonyApi::new(backend.clone());
        let storage = storage();
        assert_eq!(
            unlock_photos(&api, &storage, "VF2", "nope").await,
            UnlockOutcome::WrongPassword
        );

        backend.set_reply(
            PHOTO_BY_PASSWORD_PATH,
            api::StaticReply::Rejected { status: 503, body: None },
        );
        let outcome = unlock_photos(&api, &storage, "VF2", "nope").await;
        assert_eq!(outcome.toast().1, "An error occurred. Please try again.");
        assert!(storage.unlocked_images("VF2").is_none());
    }

    #[tokio::test]
    async fn test_load_respects_session_lock_flag() {
        let backend = StaticBackend::new().reply(
            PROFILE_ACCESS_PATH,
            json!({"user_images": {"1": "a.png", "2": ""}, "photo_protection": 1}),
        );
        let api = MatrimonyApi::new(backend);
        let storage = storage();
        let config = ImagesConfig::default();

        let gallery = load_gallery(&api, &storage, &config, "VF2", "2").await;
        assert_eq!(gallery.access(), PhotoAccess::Locked);
        assert_eq!(gallery.urls(), vec!["a.png".to_string(), config.default_bride.clone()]);

        storage.session().set(keys::PHOTO_LOCK, "0");
        let gallery = load_gallery(&api, &storage, &config, "VF2", "2").await;
        assert_eq!(gallery.access(), PhotoAccess::Open);
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_default() {
        let api = MatrimonyApi::new(StaticBackend::new());
        let config = ImagesConfig::default();
        let gallery = load_gallery(&api, &storage(), &config, "VM3", "2").await;
        assert_eq!(gallery.error(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(gallery.active_url(), Some(config.default_groom.as_str()));
    }
}

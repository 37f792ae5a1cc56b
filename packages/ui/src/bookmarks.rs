//! Bookmark toggling: durable storage and in-memory selection move together.

use store::{KeyValueStore, Profile, Storage};

/// Receiver of the updated selected-profiles list.
pub trait BookmarkSink {
    fn set_selected_profiles(&mut self, profiles: Vec<Profile>);
}

/// Add or remove `profile` from the durable bookmark set and mirror the result
/// into `sink`. Returns whether the profile is now bookmarked.
pub fn toggle_bookmark<S: KeyValueStore>(
    storage: &Storage<S>,
    sink: &mut impl BookmarkSink,
    profile: &Profile,
) -> bool {
    let (set, now_bookmarked) = storage.toggle_bookmark(profile);
    tracing::debug!(
        "{} {}",
        if now_bookmarked { "Bookmarked" } else { "Removed bookmark" },
        profile.profile_id
    );
    sink.set_selected_profiles(set);
    now_bookmarked
}

/// A card whose backend payload says it is wish-listed joins the durable set.
/// Returns whether anything changed.
pub fn reconcile_wish_list<S: KeyValueStore>(
    storage: &Storage<S>,
    sink: &mut impl BookmarkSink,
    profile: &Profile,
) -> bool {
    if !profile.wish_list || !storage.ensure_bookmarked(profile) {
        return false;
    }
    sink.set_selected_profiles(storage.bookmarks());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[derive(Default)]
    struct Selected(Vec<Profile>);

    impl BookmarkSink for Selected {
        fn set_selected_profiles(&mut self, profiles: Vec<Profile>) {
            self.0 = profiles;
        }
    }

    fn profile(id: &str) -> Profile {
        Profile {
            profile_id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_mirrors_storage_after_each_toggle() {
        let storage = Storage::new(MemoryStore::new(), MemoryStore::new());
        let mut selected = Selected::default();

        assert!(toggle_bookmark(&storage, &mut selected, &profile("VF1")));
        assert!(toggle_bookmark(&storage, &mut selected, &profile("VF2")));
        assert_eq!(selected.0, storage.bookmarks());

        assert!(!toggle_bookmark(&storage, &mut selected, &profile("VF1")));
        assert_eq!(selected.0, storage.bookmarks());
        assert_eq!(selected.0.len(), 1);
        assert!(storage.is_bookmarked("VF2"));
    }

    #[test]
    fn test_wish_listed_card_joins_the_set_once() {
        let storage = Storage::new(MemoryStore::new(), MemoryStore::new());
        let mut selected = Selected::default();
        let wished = Profile {
            wish_list: true,
            ..profile("VF9")
        };

        assert!(reconcile_wish_list(&storage, &mut selected, &wished));
        assert!(!reconcile_wish_list(&storage, &mut selected, &wished));
        assert!(!reconcile_wish_list(&storage, &mut selected, &profile("VF10")));
        assert_eq!(storage.bookmarks().len(), 1);
        assert_eq!(selected.0, storage.bookmarks());
    }
}

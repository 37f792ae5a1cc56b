//! Browser storage keys shared with the rest of the site.
//!
//! The login flow and other pages write several of these, so the names are
//! fixed and must not be renamed.

// Local storage (durable)
pub const LOGIN_PROFILE_ID: &str = "loginuser_profile_id";
pub const GENDER: &str = "gender";
pub const AGE: &str = "age";
pub const BOOKMARKED_PROFILES: &str = "bookmarkedProfiles";

// Session storage
pub const PHOTO_LOCK: &str = "photolock";
pub const PHOTO_LOCK_VALUE: &str = "photolockval";
pub const SEARCH_PROFILE: &str = "searchProfile";
pub const USER_HEIGHT: &str = "userheightfromapi";

pub const SEARCH_PROFILE_ID: &str = "searchProfileId";
pub const PROFESSION: &str = "profession";
pub const SELECT_AGE: &str = "selectAge";
pub const SELECTED_LOCATION: &str = "selectedLocation";
pub const PAGINATION_VALUE: &str = "paginationValue";
pub const CURRENT_VIEW: &str = "currentView";
pub const SORT_ORDER: &str = "sortOrder";
pub const SEARCH_VALUE: &str = "searchvalue";

/// Session key holding the unlocked photo set of one profile.
pub fn user_images(profile_id: &str) -> String {
    format!("userImages_{profile_id}")
}

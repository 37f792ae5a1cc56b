//! # Profile access — eligibility and photo unlock contracts
//!
//! The backend decides whether the viewer may open a profile and reports a
//! refusal as `status: "failure"` plus a human-readable `message`. This module
//! turns those messages into the closed [`Denial`] variant once, at the API
//! boundary, so the UI matches on variants instead of prose.

use serde::Deserialize;
use serde_json::Value;
use store::models::flexible;
use store::UserImages;

use crate::error::message_of;

/// Message sent when a free member has used up their profile views.
pub const FREE_LIMIT_MESSAGE: &str = "You have reached your profile viewing limit.";
/// Message sent when a premium member has used up today's views.
pub const PREMIUM_DAILY_LIMIT_MESSAGE: &str = "Today’s view limit has been reached.Please log in tomorrow to view more new profiles.You can still revisit profiles you’ve already viewed.";
/// Leading sentence of [`PREMIUM_DAILY_LIMIT_MESSAGE`], matched loosely on error paths.
pub const PREMIUM_DAILY_LIMIT_PREFIX: &str = "Today’s view limit has been reached";
/// Message sent when the profile is visible to platinum members only.
pub const PLATINUM_RESTRICTED_MESSAGE: &str = "Profile visibility restricted";

/// Why the backend refused to show a profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Denial {
    FreeLimit,
    PremiumDailyLimit,
    PlatinumRestricted,
    /// Any other refusal; carries the server message when there was one.
    Other(Option<String>),
}

impl Denial {
    /// Classify a `status: "failure"` message. Matching is exact.
    pub fn from_message(message: Option<&str>) -> Self {
        match message {
            Some(FREE_LIMIT_MESSAGE) => Denial::FreeLimit,
            Some(PREMIUM_DAILY_LIMIT_MESSAGE) => Denial::PremiumDailyLimit,
            Some(PLATINUM_RESTRICTED_MESSAGE) => Denial::PlatinumRestricted,
            other => Denial::Other(other.map(str::to_string)),
        }
    }

    /// Classify a message carried by an error response. The premium message is
    /// matched by its first sentence since error bodies are not always verbatim.
    pub fn from_error_message(message: Option<&str>) -> Self {
        match message {
            Some(m) if m.contains(PREMIUM_DAILY_LIMIT_PREFIX) => Denial::PremiumDailyLimit,
            other => Self::from_message(other),
        }
    }

    /// Message to show in a generic notification for unmapped refusals.
    pub fn notice(&self) -> Option<&str> {
        match self {
            Denial::Other(message) => message.as_deref(),
            _ => None,
        }
    }
}

/// Profile detail payload returned when access is granted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDetails {
    pub user_images: UserImages,
    pub photo_protection: bool,
    /// The full payload, for views that need more than the photo set.
    pub raw: Value,
}

impl ProfileDetails {
    /// Read the photo set and protection flag from the top level, or from a
    /// nested `data` object when the backend wraps the payload.
    pub fn from_value(value: Value) -> Self {
        let source = match value.get("user_images") {
            Some(_) => &value,
            None => value.get("data").unwrap_or(&value),
        };
        let user_images = source
            .get("user_images")
            .map(UserImages::from_value)
            .unwrap_or_default();
        let photo_protection = source
            .get("photo_protection")
            .or_else(|| value.get("photo_protection"))
            .map(flexible::value_to_flag)
            .unwrap_or(false);
        Self {
            user_images,
            photo_protection,
            raw: value,
        }
    }
}

/// Outcome of an eligibility check.
#[derive(Clone, Debug, PartialEq)]
pub enum Eligibility {
    Granted(ProfileDetails),
    Denied(Denial),
}

impl Eligibility {
    pub(crate) fn from_response(body: Value) -> Self {
        if status_of(&body) == Some("failure") {
            let message = message_of(&body);
            Eligibility::Denied(Denial::from_message(message.as_deref()))
        } else {
            Eligibility::Granted(ProfileDetails::from_value(body))
        }
    }
}

/// Outcome of submitting a photo password.
#[derive(Clone, Debug, PartialEq)]
pub enum PhotoUnlock {
    Unlocked {
        /// Revealed photo set; `None` when the backend omitted it.
        images: Option<UserImages>,
        /// New protection flag, when the backend sent one.
        photo_protection: Option<bool>,
        message: Option<String>,
    },
    /// Wrong password (any status other than `"success"`).
    Rejected,
}

#[derive(Deserialize)]
struct UnlockData {
    #[serde(default)]
    user_images: Option<UserImages>,
}

impl PhotoUnlock {
    pub(crate) fn from_response(body: Value) -> Self {
        if status_of(&body) != Some("success") {
            return PhotoUnlock::Rejected;
        }
        let images = body
            .get("data")
            .cloned()
            .and_then(|d| serde_json::from_value::<UnlockData>(d).ok())
            .and_then(|d| d.user_images);
        PhotoUnlock::Unlocked {
            images,
            photo_protection: body
                .get("photo_protection")
                .filter(|v| !v.is_null())
                .map(flexible::value_to_flag),
            message: message_of(&body),
        }
    }
}

pub(crate) fn status_of(body: &Value) -> Option<&str> {
    body.get("status").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exact_messages_map_to_their_variant() {
        assert_eq!(Denial::from_message(Some(FREE_LIMIT_MESSAGE)), Denial::FreeLimit);
        assert_eq!(
            Denial::from_message(Some(PREMIUM_DAILY_LIMIT_MESSAGE)),
            Denial::PremiumDailyLimit
        );
        assert_eq!(
            Denial::from_message(Some(PLATINUM_RESTRICTED_MESSAGE)),
            Denial::PlatinumRestricted
        );
        assert_eq!(
            Denial::from_message(Some("Profile not found")),
            Denial::Other(Some("Profile not found".to_string()))
        );
        assert_eq!(Denial::from_message(None), Denial::Other(None));
    }

    #[test]
    fn test_premium_prefix_only_matches_on_error_path() {
        let truncated = "Today’s view limit has been reached. Try again later.";
        assert_eq!(
            Denial::from_message(Some(truncated)),
            Denial::Other(Some(truncated.to_string()))
        );
        assert_eq!(
            Denial::from_error_message(Some(truncated)),
            Denial::PremiumDailyLimit
        );
    }

    #[test]
    fn test_eligibility_from_failure_and_success() {
        let denied = Eligibility::from_response(json!({
            "status": "failure",
            "message": FREE_LIMIT_MESSAGE,
        }));
        assert_eq!(denied, Eligibility::Denied(Denial::FreeLimit));

        let granted = Eligibility::from_response(json!({
            "status": "success",
            "data": {
                "user_images": {"1": "a.png", "2": "b.png"},
                "photo_protection": 1
            }
        }));
        let Eligibility::Granted(details) = granted else {
            panic!("expected granted");
        };
        assert_eq!(details.user_images.urls(), vec!["a.png", "b.png"]);
        assert!(details.photo_protection);
    }

    #[test]
    fn test_photo_unlock_decoding() {
        assert_eq!(
            PhotoUnlock::from_response(json!({"status": "failure"})),
            PhotoUnlock::Rejected
        );

        let unlocked = PhotoUnlock::from_response(json!({
            "status": "success",
            "message": "Photo unlocked",
            "photo_protection": 0,
            "data": {"user_images": {"1": "real.png"}}
        }));
        let PhotoUnlock::Unlocked { images, photo_protection, message } = unlocked else {
            panic!("expected unlocked");
        };
        assert_eq!(images.map(|i| i.urls()), Some(vec!["real.png".to_string()]));
        assert_eq!(photo_protection, Some(false));
        assert_eq!(message.as_deref(), Some("Photo unlocked"));
    }
}

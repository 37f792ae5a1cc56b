//! # Domain models for profiles and photo sets
//!
//! Defines the records the backend returns when listing profiles, checking
//! access to a profile, or unlocking a protected photo set. These types are
//! `Serialize + Deserialize` so they can round-trip through the backend's JSON
//! and through browser storage (the bookmark set is a JSON array of
//! [`Profile`] snapshots).
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Profile`] | One profile summary as rendered on a grid/list card. |
//! | [`UserImages`] | Ordered key → URL map of a profile's photos. |
//! | [`Gender`] | The viewer's gender, used for default images and search rules. |
//!
//! The backend is loose about scalar types: flags arrive as `0`/`1`, `true`/`false`
//! or `"1"`, ages as numbers or strings, and `user_images` as either an object or a
//! bare URL string. The `flexible` helpers below absorb those variations so the
//! rest of the workspace only sees `bool`, `String` and [`UserImages`].

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key used when a photo set collapses to a single fallback image.
pub const DEFAULT_IMAGE_KEY: &str = "default";

/// Profile id prefix assigned to female members.
pub const FEMALE_ID_PREFIX: &str = "VF";
/// Profile id prefix assigned to male members.
pub const MALE_ID_PREFIX: &str = "VM";

/// Summary of a single profile, as shown on a card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "flexible::string")]
    pub profile_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub profile_name: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub profile_img: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub profile_age: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub height: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub degree: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub profession: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub location: String,
    #[serde(default, deserialize_with = "flexible::flag")]
    pub verified: bool,
    #[serde(default, deserialize_with = "flexible::flag")]
    pub photo_protection: bool,
    #[serde(default, deserialize_with = "flexible::flag")]
    pub wish_list: bool,
    #[serde(default, deserialize_with = "flexible::flag")]
    pub visited_marriage_check: bool,
    #[serde(default, deserialize_with = "flexible::optional_string")]
    pub visited_marriage_badge: Option<String>,
}

impl Profile {
    /// A "settled" profile has been marked as married and can no longer be opened.
    pub fn is_settled(&self) -> bool {
        self.visited_marriage_check
    }

    /// Gender implied by the profile id prefix, if it follows the `VM`/`VF` convention.
    pub fn gender(&self) -> Option<Gender> {
        Gender::from_profile_id(&self.profile_id)
    }
}

/// Viewer or member gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the value stored under the `gender` storage key (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Gender encoded in a `VM...` / `VF...` profile id.
    pub fn from_profile_id(profile_id: &str) -> Option<Self> {
        let upper = profile_id.trim().to_ascii_uppercase();
        if upper.starts_with(MALE_ID_PREFIX) {
            Some(Gender::Male)
        } else if upper.starts_with(FEMALE_ID_PREFIX) {
            Some(Gender::Female)
        } else {
            None
        }
    }

    /// The id prefix members of this gender carry.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Gender::Male => MALE_ID_PREFIX,
            Gender::Female => FEMALE_ID_PREFIX,
        }
    }
}

/// One photo in a [`UserImages`] set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageEntry {
    pub key: String,
    pub url: String,
}

/// Ordered photo set of a profile.
///
/// Serialised as a JSON object (`{"1": "https://...", "2": "https://..."}`) so
/// it matches both the backend payload and the `userImages_<id>` session entry.
/// Deserialisation also accepts a bare string (treated as `{"default": url}`)
/// and `null` (empty set).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserImages(Vec<ImageEntry>);

impl UserImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly one image under [`DEFAULT_IMAGE_KEY`].
    pub fn single_default(url: impl Into<String>) -> Self {
        Self(vec![ImageEntry {
            key: DEFAULT_IMAGE_KEY.to_string(),
            url: url.into(),
        }])
    }

    pub fn push(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.0.push(ImageEntry {
            key: key.into(),
            url: url.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.0
    }

    pub fn urls(&self) -> Vec<String> {
        self.0.iter().map(|e| e.url.clone()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.0.get(index)
    }

    /// Replace blank URLs with `fallback`; an empty set becomes a single default image.
    pub fn normalized(&self, fallback: &str) -> Self {
        if self.0.is_empty() {
            return Self::single_default(fallback);
        }
        Self(
            self.0
                .iter()
                .map(|e| ImageEntry {
                    key: e.key.clone(),
                    url: if e.url.trim().is_empty() {
                        fallback.to_string()
                    } else {
                        e.url.clone()
                    },
                })
                .collect(),
        )
    }

    /// Decode from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(url) => Self::single_default(url.clone()),
            Value::Object(map) => Self(
                map.iter()
                    .map(|(key, v)| ImageEntry {
                        key: key.clone(),
                        url: match v {
                            Value::String(s) => s.clone(),
                            Value::Null => String::new(),
                            other => other.to_string(),
                        },
                    })
                    .collect(),
            ),
            Value::Array(items) => Self(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| ImageEntry {
                        key: (i + 1).to_string(),
                        url: v.as_str().unwrap_or_default().to_string(),
                    })
                    .collect(),
            ),
            _ => Self::default(),
        }
    }
}

impl Serialize for UserImages {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.key, &entry.url)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UserImages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Lenient deserializers for backend scalars.
pub mod flexible {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// `1`, `true`, `"1"`, `"true"` are true; everything else (including null) is false.
    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(value_to_flag(&Value::deserialize(deserializer)?))
    }

    pub fn value_to_flag(value: &Value) -> bool {
        match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => matches!(s.trim(), "1" | "true" | "True" | "yes"),
            _ => false,
        }
    }

    /// Strings pass through, numbers are formatted, null becomes empty.
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(value_to_string(&Value::deserialize(deserializer)?))
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let s = value_to_string(&Value::deserialize(deserializer)?);
        Ok(if s.is_empty() { None } else { Some(s) })
    }

    pub fn value_to_string(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

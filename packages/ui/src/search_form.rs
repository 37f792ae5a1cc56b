//! # Search form rules
//!
//! Validation for the quick id/name search and the filter form's age range,
//! plus the quick-search request itself. Errors are field-scoped and never
//! leave the browser; their `Display` text is what the form shows.

use api::{Backend, MatrimonyApi};
use store::{Gender, KeyValueStore, Profile, Storage, Viewer};
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Profile ID or Profile Name is required")]
    QueryRequired,
    #[error("This profile does not match your gender preference.")]
    GenderMismatch,
    #[error("No profile found with that ID or name.")]
    NoMatch,
    #[error("An error occurred. Please try again.")]
    SearchFailed,
    #[error("Your age preference does not match this profile.")]
    AgePreference,
    #[error("From Age cannot be greater than To Age")]
    AgeOrder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchField {
    FromAge,
    ToAge,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: SearchField,
    pub error: ValidationError,
}

/// Check a quick-search query before anything is sent. Viewers cannot look up
/// ids carrying their own gender's prefix.
pub fn validate_quick_search(query: &str, viewer_gender: Option<Gender>) -> Result<String, ValidationError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::QueryRequired);
    }
    if let Some(gender) = viewer_gender {
        if query.to_ascii_uppercase().starts_with(gender.id_prefix()) {
            return Err(ValidationError::GenderMismatch);
        }
    }
    Ok(query.to_string())
}

/// Keep only ASCII digits, as typed into a numeric field.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Parse a numeric field. Empty and 0 both mean "not set".
pub fn parse_bound(input: &str) -> Option<u32> {
    digits_only(input).parse().ok().filter(|n| *n > 0)
}

/// Age bounds as entered; `None` means not set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgeRange {
    pub from: Option<u32>,
    pub to: Option<u32>,
}

impl AgeRange {
    pub fn parse(from: &str, to: &str) -> Self {
        Self {
            from: parse_bound(from),
            to: parse_bound(to),
        }
    }
}

/// Every age-range violation for `viewer`, in field order.
///
/// - male viewer: `to` may exceed their age by at most one year
/// - female viewer: `from` may be at most one year below their age
/// - `from` must not exceed `to`
pub fn validate_age_range(range: AgeRange, viewer: &Viewer) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let age = i64::from(viewer.age);
    match (viewer.gender, range.from, range.to) {
        (Some(Gender::Male), _, Some(to)) if i64::from(to) > age + 1 => errors.push(FieldError {
            field: SearchField::ToAge,
            error: ValidationError::AgePreference,
        }),
        (Some(Gender::Female), Some(from), _) if i64::from(from) < age - 1 => {
            errors.push(FieldError {
                field: SearchField::FromAge,
                error: ValidationError::AgePreference,
            })
        }
        _ => {}
    }
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            errors.push(FieldError {
                field: SearchField::FromAge,
                error: ValidationError::AgeOrder,
            });
        }
    }
    errors
}

/// First error reported for `field`.
pub fn first_error(errors: &[FieldError], field: SearchField) -> Option<&ValidationError> {
    errors.iter().find(|e| e.field == field).map(|e| &e.error)
}

/// Validate and run a quick search. On success the query is remembered in
/// session storage and the matching profiles are returned.
pub async fn quick_search<B: Backend, S: KeyValueStore>(
    api: &MatrimonyApi<B>,
    storage: &Storage<S>,
    query: &str,
) -> Result<Vec<Profile>, ValidationError> {
    let viewer = storage.viewer();
    let query = validate_quick_search(query, viewer.gender)?;
    match api.search_by_profile_id(&viewer.profile_id, &query).await {
        Ok(found) if found.is_empty() => Err(ValidationError::NoMatch),
        Ok(found) => {
            storage.set_search_profile(&query);
            Ok(found)
        }
        Err(e) => {
            tracing::warn!("Quick search for {query} failed: {e}");
            Err(ValidationError::SearchFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{StaticBackend, SEARCH_BY_PROFILE_ID_PATH};
    use serde_json::json;
    use store::{keys, MemoryStore};

    fn viewer(gender: Gender, age: u32) -> Viewer {
        Viewer {
            profile_id: "VM1".to_string(),
            gender: Some(gender),
            age,
        }
    }

    #[test]
    fn test_query_rules() {
        assert_eq!(
            validate_quick_search("  ", None),
            Err(ValidationError::QueryRequired)
        );
        assert_eq!(
            validate_quick_search("vm123", Some(Gender::Male)),
            Err(ValidationError::GenderMismatch)
        );
        assert_eq!(
            validate_quick_search("Vf9", Some(Gender::Female)),
            Err(ValidationError::GenderMismatch)
        );
        assert_eq!(
            validate_quick_search(" VF123 ", Some(Gender::Male)).as_deref(),
            Ok("VF123")
        );
        assert_eq!(
            ValidationError::QueryRequired.to_string(),
            "Profile ID or Profile Name is required"
        );
    }

    #[test]
    fn test_numeric_inputs() {
        assert_eq!(digits_only("2a5"), "25");
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("0"), None);
        assert_eq!(parse_bound("31"), Some(31));
    }

    #[test]
    fn test_male_upper_bound() {
        let male = viewer(Gender::Male, 30);
        let errors = validate_age_range(AgeRange::parse("", "32"), &male);
        assert_eq!(
            first_error(&errors, SearchField::ToAge),
            Some(&ValidationError::AgePreference)
        );
        assert!(validate_age_range(AgeRange::parse("", "31"), &male).is_empty());
        assert!(validate_age_range(AgeRange::parse("", "0"), &male).is_empty());
    }

    #[test]
    fn test_female_lower_bound() {
        let female = viewer(Gender::Female, 30);
        let errors = validate_age_range(AgeRange::parse("28", ""), &female);
        assert_eq!(
            first_error(&errors, SearchField::FromAge).map(ToString::to_string),
            Some("Your age preference does not match this profile.".to_string())
        );
        assert!(validate_age_range(AgeRange::parse("29", ""), &female).is_empty());
    }

    #[test]
    fn test_from_above_to() {
        let male = viewer(Gender::Male, 30);
        let errors = validate_age_range(AgeRange::parse("20", "18"), &male);
        assert_eq!(
            errors,
            vec![FieldError {
                field: SearchField::FromAge,
                error: ValidationError::AgeOrder,
            }]
        );
        assert_eq!(first_error(&errors, SearchField::ToAge), None);
    }

    fn storage(gender: &str) -> Storage<MemoryStore> {
        let local = MemoryStore::with_entries([
            (keys::LOGIN_PROFILE_ID, "VM1"),
            (keys::GENDER, gender),
            (keys::AGE, "30"),
        ]);
        Storage::new(local, MemoryStore::new())
    }

    #[tokio::test]
    async fn test_same_gender_query_is_never_sent() {
        let backend = StaticBackend::new();
        let api = MatrimonyApi::new(backend.clone());
        let result = quick_search(&api, &storage("male"), "vm123").await;
        assert_eq!(result, Err(ValidationError::GenderMismatch));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_quick_search_outcomes() {
        let backend = StaticBackend::new().reply(
            SEARCH_BY_PROFILE_ID_PATH,
            json!({"status": "success", "data": [{"profile_id": "VF7", "profile_name": "Anu"}]}),
        );
        let api = MatrimonyApi::new(backend.clone());
        let storage = storage("male");

        let found = quick_search(&api, &storage, "VF7").await.unwrap();
        assert_eq!(found[0].profile_name, "Anu");
        assert_eq!(storage.search_profile().as_deref(), Some("VF7"));

        backend.set_reply(
            SEARCH_BY_PROFILE_ID_PATH,
            api::StaticReply::Json(json!({"status": "failure"})),
        );
        assert_eq!(
            quick_search(&api, &storage, "Anu").await,
            Err(ValidationError::NoMatch)
        );

        backend.set_reply(
            SEARCH_BY_PROFILE_ID_PATH,
            api::StaticReply::Rejected { status: 500, body: None },
        );
        assert_eq!(
            quick_search(&api, &storage, "Anu").await,
            Err(ValidationError::SearchFailed)
        );
        assert_eq!(storage.search_profile().as_deref(), Some("VF7"));
    }
}

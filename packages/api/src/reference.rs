//! # Reference data — option lists for the search form
//!
//! Each option list comes from its own endpoint and arrives as a JSON object
//! whose *values* are the records (`{"0": {...}, "1": {...}}`). Lookups are
//! best-effort: a failed request yields [`Enrichment::Absent`], which renders as
//! an empty list. There is no retry and nothing is shown to the user.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use store::models::flexible;

/// Result of an optional lookup: the records, or nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum Enrichment<T> {
    Present(Vec<T>),
    Absent,
}

impl<T> Enrichment<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Enrichment::Present(_))
    }

    /// The records, or an empty list when the lookup failed.
    pub fn into_options(self) -> Vec<T> {
        match self {
            Enrichment::Present(items) => items,
            Enrichment::Absent => Vec::new(),
        }
    }
}

impl<T> Default for Enrichment<T> {
    fn default() -> Self {
        Enrichment::Absent
    }
}

/// The reference lists the search form uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    MaritalStatus,
    Profession,
    Education,
    BirthStar,
    AnnualIncome,
    FieldOfStudy,
    State,
}

impl ReferenceKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            ReferenceKind::MaritalStatus => "/auth/Get_Marital_Status/",
            ReferenceKind::Profession => "/auth/Get_Profes_Pref/",
            ReferenceKind::Education => "/auth/Get_Highest_Education/",
            ReferenceKind::BirthStar => "/auth/Get_Birth_Star/",
            ReferenceKind::AnnualIncome => "/auth/Get_Annual_Income/",
            ReferenceKind::FieldOfStudy => "/auth/Get_Field_ofstudy/",
            ReferenceKind::State => "/auth/Get_State_Pref/",
        }
    }

    /// Request body; most lookups take none.
    pub fn body(self) -> Value {
        match self {
            ReferenceKind::BirthStar => serde_json::json!({ "state_id": "" }),
            _ => serde_json::json!({}),
        }
    }
}

/// Decode the object-of-records shape. Records that fail to decode are skipped.
pub(crate) fn decode_options<T: DeserializeOwned>(kind: ReferenceKind, body: Value) -> Vec<T> {
    let values: Vec<Value> = match body {
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    values
        .into_iter()
        .filter_map(|v| match serde_json::from_value(v) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!("Skipping malformed {kind:?} option: {e}");
                None
            }
        })
        .collect()
}

/// A record that can be rendered as a checkbox or `<option>`.
pub trait ReferenceOption {
    /// Value submitted for this option.
    fn option_value(&self) -> String;
    /// Text shown to the user.
    fn option_label(&self) -> &str;
}

macro_rules! reference_record {
    ($(#[$meta:meta])* $name:ident { $id:literal, $label:literal }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Deserialize)]
        pub struct $name {
            #[serde(rename = $id, deserialize_with = "flexible::string")]
            pub id: String,
            #[serde(rename = $label, default, deserialize_with = "flexible::string")]
            pub label: String,
        }

        impl ReferenceOption for $name {
            fn option_value(&self) -> String {
                self.id.clone()
            }

            fn option_label(&self) -> &str {
                &self.label
            }
        }
    };
}

reference_record!(MaritalStatus { "marital_sts_id", "marital_sts_name" });
reference_record!(Profession { "Profes_Pref_id", "Profes_name" });
reference_record!(Education { "education_id", "education_description" });
reference_record!(BirthStar { "birth_id", "birth_star" });
reference_record!(Income { "income_id", "income_description" });
reference_record!(FieldOfStudy { "study_id", "study_description" });
reference_record!(
    /// A state, used both for "native state" and "work location".
    StateOption { "State_Pref_id", "State_name" }
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_values_become_options() {
        let body = json!({
            "0": {"marital_sts_id": 1, "marital_sts_name": "Never Married"},
            "1": {"marital_sts_id": 2, "marital_sts_name": "Divorced"},
            "2": {"unexpected": true}
        });
        let options: Vec<MaritalStatus> = decode_options(ReferenceKind::MaritalStatus, body);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].option_value(), "1");
        assert_eq!(options[1].option_label(), "Divorced");
    }

    #[test]
    fn test_absent_enrichment_is_empty() {
        let absent: Enrichment<Income> = Enrichment::Absent;
        assert!(!absent.is_present());
        assert!(absent.into_options().is_empty());
    }
}

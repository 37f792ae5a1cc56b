//! # API crate — REST client for the matrimony backend
//!
//! The backend owns every real decision (who may view whom, how many views are
//! left, whether a photo password is correct, which profiles match). This crate
//! wraps its JSON-over-POST endpoints in typed calls that the UI awaits.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`access`] | Eligibility check and photo unlock contracts; the closed [`Denial`] variant |
//! | [`reference`] | Best-effort option lists for the search form ([`Enrichment`]) |
//! | [`client`] | [`HttpBackend`], the `reqwest` transport |
//! | [`error`] | [`ApiError`] |
//!
//! ## Calls exposed by [`MatrimonyApi`]
//!
//! - **Access**: `check_profile_access`, `profile_details`, `photo_by_password`
//! - **Search**: `search_by_profile_id`
//! - **Reference data**: `reference_options`
//!
//! [`MatrimonyApi`] is generic over [`Backend`], a one-method transport trait, so
//! the same request/response handling runs against HTTP in the browser and
//! against [`StaticBackend`] in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub mod access;
pub mod client;
pub mod error;
pub mod reference;

pub use access::{Denial, Eligibility, PhotoUnlock, ProfileDetails};
pub use client::HttpBackend;
pub use error::{ApiError, Result};
pub use reference::{Enrichment, ReferenceKind, ReferenceOption};
pub use store::Profile;

pub const PROFILE_ACCESS_PATH: &str = "/auth/Get_profile_det_match/";
pub const PHOTO_BY_PASSWORD_PATH: &str = "/auth/Get_photo_bypassword/";
pub const SEARCH_BY_PROFILE_ID_PATH: &str = "/auth/Search_byprofile_id/";

/// Async transport: POST a JSON body, get a JSON body back.
pub trait Backend {
    fn post_json(
        &self,
        path: &str,
        body: &Value,
    ) -> impl std::future::Future<Output = Result<Value>>;
}

#[derive(Serialize)]
struct AccessRequest<'a> {
    profile_id: &'a str,
    user_profile_id: &'a str,
    page_id: &'a str,
}

#[derive(Serialize)]
struct PhotoPasswordRequest<'a> {
    profile_id: &'a str,
    profile_to: &'a str,
    photo_password: &'a str,
}

#[derive(Serialize)]
struct QuickSearchRequest<'a> {
    profile_id: &'a str,
    search_profile_id: &'a str,
}

/// Typed calls against the matrimony backend.
#[derive(Clone, Debug)]
pub struct MatrimonyApi<B: Backend> {
    backend: B,
}

impl<B: Backend> MatrimonyApi<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn post<T: Serialize>(&self, path: &str, request: &T) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        self.backend.post_json(path, &body).await
    }

    /// Ask whether `viewer_id` may open `target_id` from page `page_id`.
    pub async fn check_profile_access(
        &self,
        viewer_id: &str,
        target_id: &str,
        page_id: &str,
    ) -> Result<Eligibility> {
        let body = self
            .post(
                PROFILE_ACCESS_PATH,
                &AccessRequest {
                    profile_id: viewer_id,
                    user_profile_id: target_id,
                    page_id,
                },
            )
            .await?;
        Ok(Eligibility::from_response(body))
    }

    /// Detail payload of a profile; a refusal becomes [`ApiError::Denied`].
    pub async fn profile_details(
        &self,
        viewer_id: &str,
        target_id: &str,
        page_id: &str,
    ) -> Result<ProfileDetails> {
        match self.check_profile_access(viewer_id, target_id, page_id).await? {
            Eligibility::Granted(details) => Ok(details),
            Eligibility::Denied(denial) => Err(ApiError::Denied(denial)),
        }
    }

    /// Submit a photo password for `target_id`.
    pub async fn photo_by_password(
        &self,
        viewer_id: &str,
        target_id: &str,
        password: &str,
    ) -> Result<PhotoUnlock> {
        let body = self
            .post(
                PHOTO_BY_PASSWORD_PATH,
                &PhotoPasswordRequest {
                    profile_id: viewer_id,
                    profile_to: target_id,
                    photo_password: password,
                },
            )
            .await?;
        Ok(PhotoUnlock::from_response(body))
    }

    /// Search by profile id or name. A `"failure"` status or missing data is an
    /// empty result, not an error.
    pub async fn search_by_profile_id(&self, viewer_id: &str, query: &str) -> Result<Vec<Profile>> {
        let body = self
            .post(
                SEARCH_BY_PROFILE_ID_PATH,
                &QuickSearchRequest {
                    profile_id: viewer_id,
                    search_profile_id: query,
                },
            )
            .await?;
        if access::status_of(&body) == Some("failure") {
            return Ok(Vec::new());
        }
        match body.get("data") {
            Some(data @ Value::Array(_)) => Ok(serde_json::from_value(data.clone())?),
            Some(data @ Value::Object(_)) => Ok(vec![serde_json::from_value(data.clone())?]),
            _ => Ok(Vec::new()),
        }
    }

    /// Fetch one option list. Never fails: errors degrade to [`Enrichment::Absent`].
    pub async fn reference_options<T: DeserializeOwned>(&self, kind: ReferenceKind) -> Enrichment<T> {
        match self.backend.post_json(kind.endpoint(), &kind.body()).await {
            Ok(body) => Enrichment::Present(reference::decode_options(kind, body)),
            Err(e) => {
                tracing::warn!("{kind:?} options unavailable: {e}");
                Enrichment::Absent
            }
        }
    }
}

/// One canned reply of a [`StaticBackend`].
#[derive(Clone, Debug)]
pub enum StaticReply {
    Json(Value),
    Rejected { status: u16, body: Option<Value> },
}

/// In-memory Backend for testing and offline previews.
///
/// Replies are keyed by path; every call is recorded with its body so callers
/// can assert on what was (or was not) sent.
#[derive(Clone, Debug, Default)]
pub struct StaticBackend {
    replies: Arc<Mutex<HashMap<String, StaticReply>>>,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl StaticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, path: &str, body: Value) -> Self {
        self.set_reply(path, StaticReply::Json(body));
        self
    }

    pub fn reject(self, path: &str, status: u16, body: Option<Value>) -> Self {
        self.set_reply(path, StaticReply::Rejected { status, body });
        self
    }

    pub fn set_reply(&self, path: &str, reply: StaticReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.insert(path.to_string(), reply);
        }
    }

    /// Every `(path, body)` posted so far.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|(p, _)| p == path).count()
    }
}

impl Backend for StaticBackend {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((path.to_string(), body.clone()));
        }
        let reply = self.replies.lock().ok().and_then(|r| r.get(path).cloned());
        match reply {
            Some(StaticReply::Json(value)) => Ok(value),
            Some(StaticReply::Rejected { status, body }) => Err(ApiError::rejected(status, body.as_ref())),
            None => Err(ApiError::rejected(404, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{FREE_LIMIT_MESSAGE, PREMIUM_DAILY_LIMIT_MESSAGE};
    use crate::reference::{MaritalStatus, ReferenceOption};
    use serde_json::json;

    #[tokio::test]
    async fn test_access_request_carries_viewer_target_and_page() {
        let backend = StaticBackend::new().reply(PROFILE_ACCESS_PATH, json!({"status": "success"}));
        let api = MatrimonyApi::new(backend.clone());

        let result = api.check_profile_access("VM1", "VF2", "1").await.unwrap();
        assert!(matches!(result, Eligibility::Granted(_)));

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].1,
            json!({"profile_id": "VM1", "user_profile_id": "VF2", "page_id": "1"})
        );
    }

    #[tokio::test]
    async fn test_failure_status_is_a_denial_not_an_error() {
        let backend = StaticBackend::new().reply(
            PROFILE_ACCESS_PATH,
            json!({"status": "failure", "message": PREMIUM_DAILY_LIMIT_MESSAGE}),
        );
        let api = MatrimonyApi::new(backend);
        assert_eq!(
            api.check_profile_access("VM1", "VF2", "1").await.unwrap(),
            Eligibility::Denied(Denial::PremiumDailyLimit)
        );

        let err = api.profile_details("VM1", "VF2", "2").await.unwrap_err();
        assert_eq!(err.denial(), Denial::PremiumDailyLimit);
    }

    #[tokio::test]
    async fn test_rejected_status_keeps_payload_message() {
        let backend = StaticBackend::new().reject(
            PROFILE_ACCESS_PATH,
            403,
            Some(json!({"message": FREE_LIMIT_MESSAGE})),
        );
        let api = MatrimonyApi::new(backend);
        let err = api.check_profile_access("VM1", "VF2", "1").await.unwrap_err();
        assert_eq!(err.denial(), Denial::FreeLimit);
    }

    #[tokio::test]
    async fn test_quick_search_results() {
        let backend = StaticBackend::new().reply(
            SEARCH_BY_PROFILE_ID_PATH,
            json!({"status": "success", "data": [
                {"profile_id": "VF10", "profile_name": "Divya"},
                {"profile_id": "VF11", "profile_name": "Divyashree"}
            ]}),
        );
        let api = MatrimonyApi::new(backend.clone());
        let found = api.search_by_profile_id("VM1", "Divya").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].profile_id, "VF11");
        assert_eq!(
            backend.calls()[0].1,
            json!({"profile_id": "VM1", "search_profile_id": "Divya"})
        );

        backend.set_reply(
            SEARCH_BY_PROFILE_ID_PATH,
            StaticReply::Json(json!({"status": "failure", "message": "No data"})),
        );
        assert!(api.search_by_profile_id("VM1", "x").await.unwrap().is_empty());

        backend.set_reply(SEARCH_BY_PROFILE_ID_PATH, StaticReply::Json(json!({"status": "success", "data": []})));
        assert!(api.search_by_profile_id("VM1", "x").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reference_lookup_degrades_silently() {
        let backend = StaticBackend::new().reply(
            ReferenceKind::MaritalStatus.endpoint(),
            json!({"0": {"marital_sts_id": 1, "marital_sts_name": "Never Married"}}),
        );
        let api = MatrimonyApi::new(backend.clone());

        let statuses: Enrichment<MaritalStatus> =
            api.reference_options(ReferenceKind::MaritalStatus).await;
        let statuses = statuses.into_options();
        assert_eq!(statuses[0].option_label(), "Never Married");

        // No reply registered: the lookup fails and nothing propagates.
        let stars: Enrichment<reference::BirthStar> = api.reference_options(ReferenceKind::BirthStar).await;
        assert_eq!(stars, Enrichment::Absent);
        assert_eq!(backend.calls()[1].1, json!({"state_id": ""}));
    }

    #[tokio::test]
    async fn test_photo_password_request_shape() {
        let backend = StaticBackend::new().reply(PHOTO_BY_PASSWORD_PATH, json!({"status": "failure"}));
        let api = MatrimonyApi::new(backend.clone());
        assert_eq!(
            api.photo_by_password("VM1", "VF2", "secret").await.unwrap(),
            PhotoUnlock::Rejected
        );
        assert_eq!(
            backend.calls()[0].1,
            json!({"profile_id": "VM1", "profile_to": "VF2", "photo_password": "secret"})
        );
    }
}

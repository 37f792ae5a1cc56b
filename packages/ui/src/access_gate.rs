//! # Profile card access gate
//!
//! Clicking a card asks the backend whether the viewer may open that profile.
//! [`CardGate`] holds the per-card state (request in flight, which popup is
//! open) and [`check_access`] performs the request and classifies the answer.
//!
//! | Backend answer | [`GateOutcome`] |
//! |----------------|-----------------|
//! | granted | `Open` with the detail-route parameters |
//! | free limit / premium daily limit / platinum only | `Restricted` |
//! | any other refusal or transport failure | `Notify` with a message |

use api::{Backend, Denial, Eligibility, MatrimonyApi};
use store::{KeyValueStore, Profile, SearchState, Storage};

use crate::secure_id::encode_profile_id;

/// Page id sent with eligibility checks issued from profile cards.
pub const CARD_PAGE_ID: &str = "1";
/// Shown when a refusal carries no usable message.
pub const GENERIC_ACCESS_ERROR: &str = "Error accessing profile.";
/// Views a detail page can return to.
pub const DETAIL_ORIGINS: [&str; 2] = ["LoginHome", "SearchProfiles"];

/// Popup to show for a restricted profile. At most one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restriction {
    FreeLimit,
    PremiumDailyLimit,
    PlatinumOnly,
}

impl Restriction {
    pub fn from_denial(denial: &Denial) -> Option<Self> {
        match denial {
            Denial::FreeLimit => Some(Restriction::FreeLimit),
            Denial::PremiumDailyLimit => Some(Restriction::PremiumDailyLimit),
            Denial::PlatinumRestricted => Some(Restriction::PlatinumOnly),
            Denial::Other(_) => None,
        }
    }
}

/// Parameters of the navigation into a profile's detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailNavigation {
    /// Obfuscated profile id for the `id` query parameter.
    pub secure_id: String,
    pub rasi: u8,
    pub order_by: String,
    pub page_number: u32,
    pub from: Vec<String>,
    pub search_state: SearchState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GateOutcome {
    Open(DetailNavigation),
    Restricted(Restriction),
    Notify(String),
}

impl GateOutcome {
    fn from_denial(denial: Denial) -> Self {
        match Restriction::from_denial(&denial) {
            Some(restriction) => GateOutcome::Restricted(restriction),
            None => GateOutcome::Notify(
                denial.notice().unwrap_or(GENERIC_ACCESS_ERROR).to_string(),
            ),
        }
    }
}

/// Per-card gate state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardGate {
    loading: bool,
    popup: Option<Restriction>,
}

impl CardGate {
    /// Claim the gate for a new request. Refused for settled profiles, while a
    /// request is in flight, and while a popup is open.
    pub fn try_begin(&mut self, profile: &Profile) -> bool {
        if profile.is_settled() || self.loading || self.popup.is_some() {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish(&mut self, outcome: &GateOutcome) {
        self.loading = false;
        if let GateOutcome::Restricted(restriction) = outcome {
            self.popup = Some(*restriction);
        }
    }

    pub fn dismiss(&mut self) {
        self.popup = None;
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn popup(&self) -> Option<Restriction> {
        self.popup
    }
}

/// Ask whether the logged-in viewer may open `profile`.
pub async fn check_access<B: Backend, S: KeyValueStore>(
    api: &MatrimonyApi<B>,
    storage: &Storage<S>,
    secure_key: &str,
    profile: &Profile,
    page_number: u32,
) -> GateOutcome {
    let viewer = storage.viewer();
    match api
        .check_profile_access(&viewer.profile_id, &profile.profile_id, CARD_PAGE_ID)
        .await
    {
        Ok(Eligibility::Granted(_)) => {
            let search_state = storage.search_state();
            GateOutcome::Open(DetailNavigation {
                secure_id: encode_profile_id(&profile.profile_id, secure_key),
                rasi: 1,
                order_by: search_state.sort_order.clone(),
                page_number,
                from: DETAIL_ORIGINS.iter().map(|s| s.to_string()).collect(),
                search_state,
            })
        }
        Ok(Eligibility::Denied(denial)) => GateOutcome::from_denial(denial),
        Err(e) => {
            tracing::error!("Error accessing profile {}: {e}", profile.profile_id);
            GateOutcome::from_denial(e.denial())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::access::{FREE_LIMIT_MESSAGE, PLATINUM_RESTRICTED_MESSAGE, PREMIUM_DAILY_LIMIT_MESSAGE};
    use api::{StaticBackend, PROFILE_ACCESS_PATH};
    use serde_json::json;
    use store::{keys, MemoryStore};

    use crate::secure_id::decode_profile_id;

    fn setup(backend: StaticBackend) -> (MatrimonyApi<StaticBackend>, Storage<MemoryStore>) {
        let local = MemoryStore::with_entries([(keys::LOGIN_PROFILE_ID, "VM100")]);
        (MatrimonyApi::new(backend), Storage::new(local, MemoryStore::new()))
    }

    fn target() -> Profile {
        Profile {
            profile_id: "VF200".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_granted_opens_detail_with_snapshot() {
        let backend = StaticBackend::new().reply(PROFILE_ACCESS_PATH, json!({"status": "success"}));
        let (api, storage) = setup(backend.clone());
        storage.session().set(keys::SORT_ORDER, "3");

        let outcome = check_access(&api, &storage, "key", &target(), 2).await;
        let GateOutcome::Open(nav) = outcome else {
            panic!("expected navigation");
        };
        assert_eq!(decode_profile_id(&nav.secure_id, "key").as_deref(), Some("VF200"));
        assert_eq!(nav.order_by, "3");
        assert_eq!(nav.page_number, 2);
        assert_eq!(nav.from, vec!["LoginHome", "SearchProfiles"]);
        assert_eq!(nav.search_state.current_view, "gridlist");
        assert_eq!(nav.search_state.pagination_value, "1");

        assert_eq!(
            backend.calls()[0].1,
            json!({"profile_id": "VM100", "user_profile_id": "VF200", "page_id": "1"})
        );
    }

    #[tokio::test]
    async fn test_each_limit_opens_only_its_popup() {
        for (message, expected) in [
            (FREE_LIMIT_MESSAGE, Restriction::FreeLimit),
            (PREMIUM_DAILY_LIMIT_MESSAGE, Restriction::PremiumDailyLimit),
            (PLATINUM_RESTRICTED_MESSAGE, Restriction::PlatinumOnly),
        ] {
            let backend = StaticBackend::new().reply(
                PROFILE_ACCESS_PATH,
                json!({"status": "failure", "message": message}),
            );
            let (api, storage) = setup(backend);
            let mut gate = CardGate::default();
            assert!(gate.try_begin(&target()));

            let outcome = check_access(&api, &storage, "key", &target(), 1).await;
            gate.finish(&outcome);
            assert_eq!(outcome, GateOutcome::Restricted(expected));
            assert_eq!(gate.popup(), Some(expected));
            assert!(!gate.loading());
        }
    }

    #[tokio::test]
    async fn test_other_refusals_notify() {
        let backend = StaticBackend::new().reply(
            PROFILE_ACCESS_PATH,
            json!({"status": "failure", "message": "Profile is hidden"}),
        );
        let (api, storage) = setup(backend.clone());
        assert_eq!(
            check_access(&api, &storage, "key", &target(), 1).await,
            GateOutcome::Notify("Profile is hidden".to_string())
        );

        backend.set_reply(
            PROFILE_ACCESS_PATH,
            api::StaticReply::Rejected { status: 500, body: None },
        );
        assert_eq!(
            check_access(&api, &storage, "key", &target(), 1).await,
            GateOutcome::Notify(GENERIC_ACCESS_ERROR.to_string())
        );
    }

    #[tokio::test]
    async fn test_limit_reported_through_error_status() {
        let backend = StaticBackend::new().reject(
            PROFILE_ACCESS_PATH,
            429,
            Some(json!({"message": "Today’s view limit has been reached. Come back tomorrow."})),
        );
        let (api, storage) = setup(backend);
        assert_eq!(
            check_access(&api, &storage, "key", &target(), 1).await,
            GateOutcome::Restricted(Restriction::PremiumDailyLimit)
        );
    }

    #[test]
    fn test_gate_refuses_reentry() {
        let mut gate = CardGate::default();
        assert!(gate.try_begin(&target()));
        assert!(!gate.try_begin(&target()));

        gate.finish(&GateOutcome::Restricted(Restriction::FreeLimit));
        assert!(!gate.try_begin(&target()));

        gate.dismiss();
        assert!(gate.try_begin(&target()));
        gate.finish(&GateOutcome::Notify(GENERIC_ACCESS_ERROR.to_string()));
        assert_eq!(gate.popup(), None);
    }

    #[test]
    fn test_settled_profile_never_requests() {
        let settled = Profile {
            visited_marriage_check: true,
            ..target()
        };
        let mut gate = CardGate::default();
        assert!(!gate.try_begin(&settled));
        assert!(!gate.loading());
    }
}

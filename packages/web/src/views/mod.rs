use ui::access_gate::DetailNavigation;

use crate::Route;

mod shell;
pub use shell::{NotFound, Shell};

mod dashboard;
pub use dashboard::Dashboard;

mod search;
pub use search::{FindMatch, Search, SearchProfiles};

mod profile_details;
pub use profile_details::ProfileDetails;

mod upgrade_plan;
pub use upgrade_plan::UpgradePlan;

/// Page number handed to the cards of a listing; a missing `?page=` reads as 0.
pub(crate) fn card_page(page: u32) -> u32 {
    page.max(1)
}

/// Detail route for a card that passed the access gate.
pub(crate) fn detail_route(navigation: DetailNavigation) -> Route {
    Route::ProfileDetails {
        id: navigation.secure_id,
        rasi: navigation.rasi,
        order_by: navigation.order_by,
    }
}

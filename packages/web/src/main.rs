use dioxus::prelude::*;

use store::MatrimonyConfig;
use ui::AppProvider;
use views::{
    Dashboard, FindMatch, NotFound, ProfileDetails, Search, SearchProfiles, Shell, UpgradePlan,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(Shell)]
    #[route("/LoginHome?:page")]
    Dashboard { page: u32 },
    #[route("/Search")]
    Search {},
    #[route("/Search/SearchProfiles?:page")]
    SearchProfiles { page: u32 },
    #[route("/Search/FindMatch")]
    FindMatch {},
    #[route("/ProfileDetails?:id&:rasi&:order_by")]
    ProfileDetails { id: String, rasi: u8, order_by: String },
    #[route("/UpgradePlan")]
    UpgradePlan {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const BUNDLED_CONFIG: &str = include_str!("../matrimony.toml");

fn main() {
    dioxus::launch(App);
}

/// Bundled config, with the backend overridable at build time through
/// `MATRIMONY_API_BASE`.
fn load_config() -> MatrimonyConfig {
    let config = match MatrimonyConfig::from_toml(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {e}", MatrimonyConfig::filename());
            MatrimonyConfig::default()
        }
    };
    match option_env!("MATRIMONY_API_BASE") {
        Some(base) if !base.is_empty() => config.with_base_url(base),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::MATRIMONY_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard { page: 1 });
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = MatrimonyConfig::from_toml(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.search.results_delay_ms, 1000);
        assert!(!config.secure_id.key.is_empty());
    }

    #[test]
    fn test_detail_route_carries_query() {
        let route = Route::ProfileDetails {
            id: "0a1b".to_string(),
            rasi: 1,
            order_by: "1".to_string(),
        };
        let path = route.to_string();
        assert!(path.starts_with("/ProfileDetails?"));
        assert!(path.contains("id=0a1b"));
        assert_eq!(ui::gallery::page_id_for_path(&path), "2");
    }

    #[test]
    fn test_listing_page_reaches_cards() {
        let route: Route = "/Search/SearchProfiles?page=3".parse().unwrap();
        assert_eq!(route, Route::SearchProfiles { page: 3 });
        assert_eq!(views::card_page(3), 3);
        // A missing or zero page is the first page.
        assert_eq!(views::card_page(0), 1);
    }
}

//! Result Page
//!
//! Loads the recommendation for the carried-over choices, renders the three
//! place lists and opens the chosen course on the map.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_select_one::{query_elements, setup_selection_with_class};
use reactive_stores::Store;
use log::{info, warn};

use super::{BrowserHost, Command, Host};
use crate::components::{PlaceList, WeatherSummary};
use crate::config::config;
use crate::dom;
use crate::models::PlaceKind;
use crate::store::{ResultQuery, ResultState, ResultStateStoreFields, ResultStore};

pub const CONTENT_SECTIONS: &str = ".content-section";
pub const TABS: &str = ".tab";
pub const WEATHER_INFO_ID: &str = "weather-info";
pub const COURSE_BUTTON_ID: &str = "selected-course-btn";

const ACTIVE_CLASS: &str = "active";

pub fn activate() {
    let query = ResultQuery::parse(&dom::location_search());
    info!("[RESULT] activating with {:?}", query);
    let store = Store::new(ResultState::new(query));

    if let Some(button) = dom::by_id(COURSE_BUTTON_ID) {
        dom::listen(&button, "click", move |_| {
            let map_link_base = config().map_link_base;
            let commands = store.with_untracked(|s| s.open_course(&map_link_base));
            run(BrowserHost, store, commands);
        });
    }

    let commands = store.write().start();
    run(BrowserHost, store, commands);
}

fn run<H: Host>(host: H, store: ResultStore, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::FetchRecommendation(request) => {
                let host = host.clone();
                spawn_local(async move {
                    let result = host.recommend(request).await;
                    let next = store.write().recommendation_loaded(result);
                    run(host, store, next);
                });
            }
            Command::RenderRecommendation => host.render_recommendation(store),
            Command::ShowCourseButton => host.show(COURSE_BUTTON_ID),
            Command::OpenWindow(url) => host.open_window(&url),
            Command::Alert(message) => host.alert(message),
            other => warn!("[RESULT] unexpected command {:?}", other),
        }
    }
}

pub(super) fn render(store: ResultStore) {
    if let Some(weather) = store.weather().get_untracked() {
        mount_into(WEATHER_INFO_ID, move || view! { <WeatherSummary weather=weather /> });
    }

    for kind in PlaceKind::ALL {
        let places = store.with_untracked(|s| s.places(kind).to_vec());
        let on_pick = move |index: usize| {
            let commands = store.write().pick(kind, index);
            run(BrowserHost, store, commands);
        };
        mount_into(kind.as_str(), move || view! { <PlaceList kind=kind places=places on_pick=on_pick /> });
    }

    setup_tab_navigation();
}

/// Replace a server-rendered container's content with a Leptos view
fn mount_into<F, N>(id: &str, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let Some(container) = dom::by_id(id) else { return };
    container.set_inner_html("");
    leptos::mount::mount_to(container, view).forget();
}

/// Exactly one tab and its `data-section` target carry `active`
fn setup_tab_navigation() {
    setup_selection_with_class(TABS, ACTIVE_CLASS, |dataset| {
        for section in query_elements(CONTENT_SECTIONS) {
            let _ = section.class_list().remove_1(ACTIVE_CLASS);
        }
        match dataset.get("section").and_then(|id| dom::by_id(id)) {
            Some(section) => {
                let _ = section.class_list().add_1(ACTIVE_CLASS);
            }
            None => warn!("[RESULT] tab without a matching section: {:?}", dataset),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseWeather, Place, RecommendResponse};
    use crate::pages::testing::{init_executor, settle, RecordingHost};
    use crate::store::LOAD_FAILED_MESSAGE;

    const QUERY: &str = "?district=jongno&food_category=%ED%95%9C%EC%8B%9D&budget_range=1";

    fn place(name: &str) -> Place {
        Place { name: name.into(), category: None, score: None, address: None, price_range: None }
    }

    fn load(host: &RecordingHost) -> ResultStore {
        let store = Store::new(ResultState::new(ResultQuery::parse(QUERY)));
        let commands = store.write().start();
        run(host.clone(), store, commands);
        settle();
        store
    }

    #[test]
    fn test_failed_recommendation_alerts() {
        init_executor();
        let host = RecordingHost::default();
        let store = load(&host);

        assert_eq!(host.calls(), vec!["recommend 한식".to_string(), format!("alert {LOAD_FAILED_MESSAGE}")]);
        assert!(!store.with_untracked(|s| s.loaded));
    }

    #[test]
    fn test_loaded_recommendation_renders_then_opens_course() {
        init_executor();
        let response = RecommendResponse {
            weather_info: CourseWeather::default(),
            restaurants: vec![place("A")],
            attractions: vec![place("B")],
            cafes: vec![place("C")],
        };
        let host = RecordingHost::default().with_recommendation(Ok(response));
        let store = load(&host);
        assert_eq!(host.calls(), vec!["recommend 한식", "render"]);

        for kind in PlaceKind::ALL {
            let commands = store.write().pick(kind, 0);
            run(host.clone(), store, commands);
        }
        let commands = store.with_untracked(|s| s.open_course("https://map.example/"));
        run(host.clone(), store, commands);

        assert_eq!(
            host.calls()[2..],
            ["show #selected-course-btn", "open_window https://map.example/A,B,C"]
        );
    }
}

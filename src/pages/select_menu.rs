//! Select Menu Page
//!
//! Food category and budget picker for the district carried in the URL.
//! The weather line is fetched once on activation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_select_one::{setup_selection, Dataset};
use log::{debug, info, warn};
use wasm_bindgen::JsCast;

use super::{BrowserHost, Command, Host};
use crate::budget::BudgetRange;
use crate::dom;
use crate::error::ApiError;
use crate::models::DistrictInfo;
use crate::routes;

pub const CATEGORY_BUTTONS: &str = ".btn-category";
pub const BUDGET_SLIDER_ID: &str = "budget-range";
pub const BUDGET_DISPLAY_ID: &str = "budget-display";
pub const CURRENT_WEATHER_ID: &str = "current-weather";
pub const RECOMMEND_BUTTON_ID: &str = "recommend-btn";

pub const WEATHER_FALLBACK: &str = "날씨 정보를 불러올 수 없습니다.";

#[derive(Debug, Clone, Default)]
pub struct SelectMenuSession {
    pub district: Option<String>,
    pub category: Option<String>,
    pub budget: BudgetRange,
    weather_requested: bool,
}

impl SelectMenuSession {
    /// Build from `?district=..`; a missing district is kept as `None`
    pub fn from_query(query: &str) -> Self {
        let params = routes::parse_query(query);
        Self {
            district: params.get("district").cloned(),
            ..Default::default()
        }
    }

    /// Weather is requested on the first call only
    pub fn start(&mut self) -> Vec<Command> {
        if self.weather_requested {
            return Vec::new();
        }
        self.weather_requested = true;
        match &self.district {
            Some(district) => vec![Command::FetchWeather(district.clone())],
            None => {
                warn!("[SELECT] no district in URL, skipping weather");
                vec![Command::SetText { id: CURRENT_WEATHER_ID, text: WEATHER_FALLBACK.to_string() }]
            }
        }
    }

    pub fn choose_category(&mut self, dataset: &Dataset) -> Vec<Command> {
        self.category = dataset.get("category").cloned();
        debug!("[SELECT] category = {:?}", self.category);
        Vec::new()
    }

    /// Slider moved to `raw`; unparseable values leave the budget unchanged
    pub fn slide_budget(&mut self, raw: &str) -> Vec<Command> {
        let Some(budget) = BudgetRange::parse(raw) else {
            warn!("[SELECT] ignoring slider value {:?}", raw);
            return Vec::new();
        };
        self.budget = budget;
        vec![Command::SetText { id: BUDGET_DISPLAY_ID, text: budget.label().to_string() }]
    }

    /// A payload without `weather` leaves the line untouched
    pub fn weather_loaded(&self, result: &Result<DistrictInfo, ApiError>) -> Vec<Command> {
        match result {
            Ok(info) => match &info.weather {
                Some(weather) => vec![Command::SetText { id: CURRENT_WEATHER_ID, text: weather.summary() }],
                None => Vec::new(),
            },
            Err(_) => vec![Command::SetText { id: CURRENT_WEATHER_ID, text: WEATHER_FALLBACK.to_string() }],
        }
    }

    pub fn recommend(&self) -> Vec<Command> {
        vec![Command::Navigate(routes::result_url(
            self.district.as_deref(),
            self.category.as_deref(),
            self.budget,
        ))]
    }
}

pub fn activate() {
    let session = StoredValue::new(SelectMenuSession::from_query(&dom::location_search()));
    info!("[SELECT] activating for {:?}", session.with_value(|s| s.district.clone()));

    setup_selection(CATEGORY_BUTTONS, move |dataset| {
        let mut commands = Vec::new();
        session.update_value(|s| commands = s.choose_category(&dataset));
        run(BrowserHost, session, commands);
    });

    if let Some(slider) = dom::by_id(BUDGET_SLIDER_ID) {
        dom::listen(&slider, "input", move |ev| {
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let mut commands = Vec::new();
            session.update_value(|s| commands = s.slide_budget(&input.value()));
            run(BrowserHost, session, commands);
        });
    }

    if let Some(button) = dom::by_id(RECOMMEND_BUTTON_ID) {
        dom::listen(&button, "click", move |_| {
            run(BrowserHost, session, session.with_value(|s| s.recommend()));
        });
    }

    let mut commands = Vec::new();
    session.update_value(|s| commands = s.start());
    run(BrowserHost, session, commands);
}

fn run<H: Host>(host: H, session: StoredValue<SelectMenuSession>, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::FetchWeather(district) => {
                let host = host.clone();
                spawn_local(async move {
                    let result = host.district_info(district).await;
                    let next = session.with_value(|s| s.weather_loaded(&result));
                    run(host, session, next);
                });
            }
            Command::SetText { id, text } => host.set_text(id, &text),
            Command::Navigate(url) => host.navigate(&url),
            other => warn!("[SELECT] unexpected command {:?}", other),
        }
    }
}

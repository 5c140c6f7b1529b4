//! Result Page State Store
//!
//! Uses Leptos reactive_stores for field-level access to the loaded
//! recommendation and the course being assembled.

use leptos::prelude::*;
use log::{info, warn};
use reactive_stores::Store;

use crate::budget::BudgetRange;
use crate::error::ApiError;
use crate::models::{CourseWeather, Place, PlaceKind, RecommendRequest, RecommendResponse};
use crate::pages::Command;
use crate::routes::{self, RANDOM_CATEGORY};

pub const LOAD_FAILED_MESSAGE: &str = "데이트 코스를 불러오는 데 실패했습니다.";

/// Choices carried over from the select page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultQuery {
    pub district: Option<String>,
    pub food_category: Option<String>,
    pub budget: BudgetRange,
    pub station: Option<String>,
}

impl ResultQuery {
    pub fn parse(query: &str) -> Self {
        let mut params = routes::parse_query(query);
        let budget = match params.get("budget_range") {
            Some(raw) => BudgetRange::parse(raw).unwrap_or_else(|| {
                warn!("[RESULT] invalid budget_range {:?}, using default", raw);
                BudgetRange::default()
            }),
            None => BudgetRange::default(),
        };
        Self {
            district: params.remove("district"),
            food_category: params.remove("food_category"),
            budget,
            station: params.remove("station").filter(|s| !s.is_empty()),
        }
    }

    pub fn to_request(&self) -> RecommendRequest {
        RecommendRequest {
            district: self.district.clone(),
            food_category: self.food_category.clone().unwrap_or_else(|| RANDOM_CATEGORY.to_string()),
            budget_range: self.budget.index(),
            station: self.station.clone(),
        }
    }
}

/// One chosen place per list
///
/// Once all three are chosen the course is revealed, and it stays revealed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseSelection {
    restaurant: Option<Place>,
    attraction: Option<Place>,
    cafe: Option<Place>,
    revealed: bool,
}

impl CourseSelection {
    pub fn get(&self, kind: PlaceKind) -> Option<&Place> {
        match kind {
            PlaceKind::Restaurants => self.restaurant.as_ref(),
            PlaceKind::Attractions => self.attraction.as_ref(),
            PlaceKind::Cafes => self.cafe.as_ref(),
        }
    }

    /// Record a choice; returns whether the course is complete afterwards
    pub fn set(&mut self, kind: PlaceKind, place: Place) -> bool {
        let slot = match kind {
            PlaceKind::Restaurants => &mut self.restaurant,
            PlaceKind::Attractions => &mut self.attraction,
            PlaceKind::Cafes => &mut self.cafe,
        };
        *slot = Some(place);
        if self.is_complete() {
            self.revealed = true;
        }
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        PlaceKind::ALL.iter().all(|&kind| self.get(kind).is_some())
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Place names in course order
    pub fn names(&self) -> Option<[&str; 3]> {
        Some([
            self.restaurant.as_ref()?.name.as_str(),
            self.attraction.as_ref()?.name.as_str(),
            self.cafe.as_ref()?.name.as_str(),
        ])
    }
}

/// Result page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ResultState {
    pub query: ResultQuery,
    pub weather: Option<CourseWeather>,
    pub restaurants: Vec<Place>,
    pub attractions: Vec<Place>,
    pub cafes: Vec<Place>,
    pub course: CourseSelection,
    pub loaded: bool,
    requested: bool,
}

impl ResultState {
    pub fn new(query: ResultQuery) -> Self {
        Self { query, ..Default::default() }
    }

    pub fn places(&self, kind: PlaceKind) -> &[Place] {
        match kind {
            PlaceKind::Restaurants => &self.restaurants,
            PlaceKind::Attractions => &self.attractions,
            PlaceKind::Cafes => &self.cafes,
        }
    }

    /// The recommendation is requested on the first call only
    pub fn start(&mut self) -> Vec<Command> {
        if self.requested {
            return Vec::new();
        }
        self.requested = true;
        vec![Command::FetchRecommendation(self.query.to_request())]
    }

    /// Failure is fatal for the page: alert and render nothing
    pub fn recommendation_loaded(&mut self, result: Result<RecommendResponse, ApiError>) -> Vec<Command> {
        match result {
            Ok(response) => {
                info!(
                    "[RESULT] loaded {} restaurants, {} attractions, {} cafes",
                    response.restaurants.len(),
                    response.attractions.len(),
                    response.cafes.len()
                );
                self.weather = Some(response.weather_info);
                self.restaurants = response.restaurants;
                self.attractions = response.attractions;
                self.cafes = response.cafes;
                self.loaded = true;
                vec![Command::RenderRecommendation]
            }
            Err(e) => {
                warn!("[RESULT] recommendation failed: {}", e);
                vec![Command::Alert(LOAD_FAILED_MESSAGE)]
            }
        }
    }

    /// A place in one list was clicked
    pub fn pick(&mut self, kind: PlaceKind, index: usize) -> Vec<Command> {
        let Some(place) = self.places(kind).get(index).cloned() else {
            warn!("[RESULT] no {} at index {}", kind.as_str(), index);
            return Vec::new();
        };
        if self.course.set(kind, place) {
            vec![Command::ShowCourseButton]
        } else {
            Vec::new()
        }
    }

    /// Course button clicked; a no-op until every list has a choice
    pub fn open_course(&self, map_link_base: &str) -> Vec<Command> {
        match self.course.names() {
            Some(names) => vec![Command::OpenWindow(routes::map_url(map_link_base, &names))],
            None => {
                warn!("[RESULT] course button clicked before all places were chosen");
                Vec::new()
            }
        }
    }
}

/// Type alias for the store
pub type ResultStore = Store<ResultState>;

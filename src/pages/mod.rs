//! Page Controllers
//!
//! Each page keeps its state in a session object. Event handlers call into
//! the session, which answers with the commands to run; each page's `run`
//! carries them out through a [`Host`], which owns the DOM and the network.

pub mod index;
pub mod result;
pub mod select_menu;

use std::future::Future;
use std::pin::Pin;

use crate::api;
use crate::dom;
use crate::error::ApiError;
use crate::models::{DistrictInfo, RecommendRequest, RecommendResponse};
use crate::store::ResultStore;

/// Commands requested by a page session
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `GET /api/district/{district}` on the index page
    LookupDistrict(String),
    /// `GET /api/district/{district}` for the weather line
    FetchWeather(String),
    /// `POST /api/recommend`
    FetchRecommendation(RecommendRequest),
    /// Render weather and place lists from the loaded recommendation
    RenderRecommendation,
    SetText { id: &'static str, text: String },
    ShowCourseButton,
    Navigate(String),
    OpenWindow(String),
    Alert(&'static str),
}

/// Future returned by host fetches; runs on the local executor
pub type LocalFuture<T> = Pin<Box<dyn Future<Output = T>>>;

/// Side effects available to the page controllers
pub trait Host: Clone + 'static {
    fn district_info(&self, district: String) -> LocalFuture<Result<DistrictInfo, ApiError>>;
    fn recommend(&self, request: RecommendRequest) -> LocalFuture<Result<RecommendResponse, ApiError>>;
    fn set_text(&self, id: &str, text: &str);
    fn show(&self, id: &str);
    fn navigate(&self, url: &str);
    fn open_window(&self, url: &str);
    fn alert(&self, message: &str);
    /// Mount the weather summary and place lists of a loaded recommendation
    fn render_recommendation(&self, store: ResultStore);
}

/// The live page: backend over HTTP, effects on the document
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn district_info(&self, district: String) -> LocalFuture<Result<DistrictInfo, ApiError>> {
        Box::pin(async move { api::district_info(&district).await })
    }

    fn recommend(&self, request: RecommendRequest) -> LocalFuture<Result<RecommendResponse, ApiError>> {
        Box::pin(async move { api::recommend(&request).await })
    }

    fn set_text(&self, id: &str, text: &str) {
        dom::set_text(id, text);
    }

    fn show(&self, id: &str) {
        dom::show(id);
    }

    fn navigate(&self, url: &str) {
        dom::navigate(url);
    }

    fn open_window(&self, url: &str) {
        dom::open_new_window(url);
    }

    fn alert(&self, message: &str) {
        dom::alert(message);
    }

    fn render_recommendation(&self, store: ResultStore) {
        result::render(store);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use any_spawner::Executor;

    use super::*;

    /// Local executor for driving spawned page tasks in tests
    pub fn init_executor() {
        let _ = Executor::init_futures_executor();
    }

    /// Run every spawned task until nothing is left to do
    pub fn settle() {
        Executor::poll_local();
    }

    /// Records every effect; fetches answer with the canned responses,
    /// or fail with a 503 when none is set
    #[derive(Clone, Default)]
    pub struct RecordingHost {
        calls: Rc<RefCell<Vec<String>>>,
        district: Rc<RefCell<Option<Result<DistrictInfo, ApiError>>>>,
        recommendation: Rc<RefCell<Option<Result<RecommendResponse, ApiError>>>>,
    }

    impl RecordingHost {
        pub fn with_district(self, response: Result<DistrictInfo, ApiError>) -> Self {
            *self.district.borrow_mut() = Some(response);
            self
        }

        pub fn with_recommendation(self, response: Result<RecommendResponse, ApiError>) -> Self {
            *self.recommendation.borrow_mut() = Some(response);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    fn unavailable(url: String) -> ApiError {
        ApiError::Status { status: 503, url }
    }

    impl Host for RecordingHost {
        fn district_info(&self, district: String) -> LocalFuture<Result<DistrictInfo, ApiError>> {
            self.record(format!("district_info {district}"));
            let response = self
                .district
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(unavailable(format!("/api/district/{district}"))));
            Box::pin(async move { response })
        }

        fn recommend(&self, request: RecommendRequest) -> LocalFuture<Result<RecommendResponse, ApiError>> {
            self.record(format!("recommend {}", request.food_category));
            let response = self
                .recommendation
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(unavailable("/api/recommend".into())));
            Box::pin(async move { response })
        }

        fn set_text(&self, id: &str, text: &str) {
            self.record(format!("set_text #{id} {text}"));
        }

        fn show(&self, id: &str) {
            self.record(format!("show #{id}"));
        }

        fn navigate(&self, url: &str) {
            self.record(format!("navigate {url}"));
        }

        fn open_window(&self, url: &str) {
            self.record(format!("open_window {url}"));
        }

        fn alert(&self, message: &str) {
            self.record(format!("alert {message}"));
        }

        fn render_recommendation(&self, _store: ResultStore) {
            self.record("render".into());
        }
    }
}

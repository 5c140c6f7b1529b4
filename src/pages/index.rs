//! Index Page
//!
//! District picker. Choosing a district looks it up and then always moves on
//! to the select page, whether or not the lookup worked.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_select_one::{setup_selection, Dataset};
use log::{info, warn};

use super::{BrowserHost, Command, Host};
use crate::error::ApiError;
use crate::models::DistrictInfo;
use crate::routes;

pub const DISTRICT_BUTTONS: &str = ".btn-district";

#[derive(Debug, Clone, Default)]
pub struct IndexSession {
    /// Last district clicked
    pub district: Option<String>,
}

impl IndexSession {
    pub fn choose_district(&mut self, dataset: &Dataset) -> Vec<Command> {
        let Some(district) = dataset.get("district") else {
            warn!("[INDEX] district button without data-district");
            return Vec::new();
        };
        self.district = Some(district.clone());
        vec![Command::LookupDistrict(district.clone())]
    }

    /// Navigation happens on success and failure alike
    pub fn lookup_finished(&self, district: &str, result: &Result<DistrictInfo, ApiError>) -> Vec<Command> {
        match result {
            Ok(info) => match &info.stats {
                Some(stats) => info!(
                    "[INDEX] {}: {} restaurants, {} attractions, {} cafes",
                    district, stats.restaurants, stats.attractions, stats.cafes
                ),
                None => info!("[INDEX] {}: {:?}", district, info),
            },
            Err(e) => warn!("[INDEX] lookup for {} failed, continuing: {}", district, e),
        }
        vec![Command::Navigate(routes::select_url(district))]
    }
}

pub fn activate() {
    info!("[INDEX] activating");
    let session = StoredValue::new(IndexSession::default());
    setup_selection(DISTRICT_BUTTONS, move |dataset| {
        let mut commands = Vec::new();
        session.update_value(|s| commands = s.choose_district(&dataset));
        run(BrowserHost, session, commands);
    });
}

fn run<H: Host>(host: H, session: StoredValue<IndexSession>, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::LookupDistrict(district) => {
                let host = host.clone();
                spawn_local(async move {
                    let result = host.district_info(district.clone()).await;
                    let next = session.with_value(|s| s.lookup_finished(&district, &result));
                    run(host, session, next);
                });
            }
            Command::Navigate(url) => host.navigate(&url),
            other => warn!("[INDEX] unexpected command {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{init_executor, settle, RecordingHost};

    fn dataset(district: &str) -> Dataset {
        Dataset::from([("district".to_string(), district.to_string())])
    }

    #[test]
    fn test_choose_district_requests_lookup() {
        let mut session = IndexSession::default();
        let commands = session.choose_district(&dataset("mapo"));
        assert_eq!(commands, vec![Command::LookupDistrict("mapo".into())]);
        assert_eq!(session.district.as_deref(), Some("mapo"));
    }

    #[test]
    fn test_missing_data_attribute_does_nothing() {
        let mut session = IndexSession::default();
        assert!(session.choose_district(&Dataset::new()).is_empty());
        assert!(session.district.is_none());
    }

    #[test]
    fn test_navigates_after_successful_lookup() {
        let session = IndexSession::default();
        let commands = session.lookup_finished("mapo", &Ok(DistrictInfo::default()));
        assert_eq!(commands, vec![Command::Navigate("/select/mapo?district=mapo".into())]);
    }

    #[test]
    fn test_navigates_after_failed_lookup() {
        let session = IndexSession::default();
        let failure = Err(ApiError::Status { status: 500, url: "/api/district/mapo".into() });
        let commands = session.lookup_finished("mapo", &failure);
        assert_eq!(commands, vec![Command::Navigate("/select/mapo?district=mapo".into())]);
    }

    #[test]
    fn test_lookup_failure_still_navigates() {
        init_executor();
        let host = RecordingHost::default();
        let session = StoredValue::new(IndexSession::default());

        run(host.clone(), session, vec![Command::LookupDistrict("mapo".into())]);
        settle();

        assert_eq!(
            host.calls(),
            vec!["district_info mapo", "navigate /select/mapo?district=mapo"]
        );
    }

    #[test]
    fn test_click_to_navigation() {
        init_executor();
        let host = RecordingHost::default().with_district(Ok(DistrictInfo::default()));
        let session = StoredValue::new(IndexSession::default());

        let mut commands = Vec::new();
        session.update_value(|s| commands = s.choose_district(&dataset("jongno")));
        run(host.clone(), session, commands);
        settle();

        assert_eq!(
            host.calls(),
            vec!["district_info jongno", "navigate /select/jongno?district=jongno"]
        );
    }
}

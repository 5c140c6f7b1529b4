//! Page Bootstrap
//!
//! The server renders one of three pages; the markers present in the
//! document decide which controller runs.

use any_spawner::Executor;
use log::{debug, info, warn};

use crate::dom;
use crate::pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    SelectMenu,
    Result,
}

/// Marker selectors in probe order
pub const PAGE_MARKERS: &[(&str, Page)] = &[
    (pages::index::DISTRICT_BUTTONS, Page::Index),
    (pages::select_menu::CATEGORY_BUTTONS, Page::SelectMenu),
    (pages::result::CONTENT_SECTIONS, Page::Result),
];

/// Answers whether the current document has an element matching a selector
pub trait MarkerProbe {
    fn has_marker(&self, selector: &str) -> bool;
}

/// Probes the live document
pub struct DocumentProbe;

impl MarkerProbe for DocumentProbe {
    fn has_marker(&self, selector: &str) -> bool {
        dom::exists(selector)
    }
}

/// First page whose marker is present
pub fn detect_page(probe: &impl MarkerProbe) -> Option<Page> {
    PAGE_MARKERS
        .iter()
        .find(|(selector, _)| probe.has_marker(selector))
        .map(|&(_, page)| page)
}

pub fn activate(page: Page) {
    match page {
        Page::Index => pages::index::activate(),
        Page::SelectMenu => pages::select_menu::activate(),
        Page::Result => pages::result::activate(),
    }
}

/// Dispatch to at most one controller once the document is parsed.
///
/// No root view is mounted, so the task executor is set up here.
pub fn run() {
    if let Err(e) = Executor::init_wasm_bindgen() {
        warn!("[BOOT] executor already initialized: {:?}", e);
    }
    dom::on_content_ready(|| match detect_page(&DocumentProbe) {
        Some(page) => {
            info!("[BOOT] {:?} page", page);
            activate(page);
        }
        None => debug!("[BOOT] no page markers, nothing to do"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FakeDocument(HashSet<&'static str>);

    impl MarkerProbe for FakeDocument {
        fn has_marker(&self, selector: &str) -> bool {
            self.0.contains(selector)
        }
    }

    fn doc(markers: &[&'static str]) -> FakeDocument {
        FakeDocument(markers.iter().copied().collect())
    }

    #[test]
    fn test_detects_each_page() {
        assert_eq!(detect_page(&doc(&[".btn-district"])), Some(Page::Index));
        assert_eq!(detect_page(&doc(&[".btn-category"])), Some(Page::SelectMenu));
        assert_eq!(detect_page(&doc(&[".content-section"])), Some(Page::Result));
    }

    #[test]
    fn test_probe_order_wins() {
        let all = doc(&[".content-section", ".btn-category", ".btn-district"]);
        assert_eq!(detect_page(&all), Some(Page::Index));

        let later = doc(&[".content-section", ".btn-category"]);
        assert_eq!(detect_page(&later), Some(Page::SelectMenu));
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(detect_page(&doc(&[".tab", "#weather-info"])), None);
    }
}

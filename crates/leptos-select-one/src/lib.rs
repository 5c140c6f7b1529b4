//! Leptos Select-One Utilities
//!
//! "Pick one of N" groups for Leptos apps.
//! Works both on server-rendered elements (marker class toggling) and
//! inside reactive views (signal-backed selection).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Marker class applied to the chosen element
pub const SELECTED_CLASS: &str = "selected";

/// Data attributes of an element (`data-district="x"` -> `district: x`)
pub type Dataset = HashMap<String, String>;

/// One-of-N selection state over a fixed set of items
#[derive(Debug, Clone)]
pub struct SelectionGroup<T> {
    items: Vec<T>,
    selected: Option<usize>,
}

impl<T> SelectionGroup<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, selected: None }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Select the item at `index`. Out-of-range indices leave the group untouched.
    pub fn select(&mut self, index: usize) -> Option<&T> {
        if index >= self.items.len() {
            return None;
        }
        self.selected = Some(index);
        self.items.get(index)
    }

    /// Select the item at `index` and notify with it.
    /// Returns false (and does not notify) for out-of-range indices.
    pub fn click<F: FnOnce(&T)>(&mut self, index: usize, notify: F) -> bool {
        match self.select(index) {
            Some(item) => {
                notify(item);
                true
            }
            None => false,
        }
    }
}

// ========================
// Server-rendered elements
// ========================

/// Wire every element matching `selector` as one selection group using the
/// default `selected` marker class.
pub fn setup_selection<F>(selector: &str, on_select: F)
where
    F: Fn(Dataset) + 'static,
{
    setup_selection_with_class(selector, SELECTED_CLASS, on_select);
}

/// Wire every element matching `selector` as one selection group.
///
/// Clicking an element moves `class` onto it (and off every other element
/// captured by this call), then invokes `on_select` with its dataset.
/// Elements matched by other calls are never touched.
pub fn setup_selection_with_class<F>(selector: &str, class: &'static str, on_select: F)
where
    F: Fn(Dataset) + 'static,
{
    let elements = query_elements(selector);
    if elements.is_empty() {
        return;
    }

    let group = Rc::new(RefCell::new(SelectionGroup::new(elements)));
    let on_select = Rc::new(on_select);
    let count = group.borrow().len();

    for index in 0..count {
        let group_ref = Rc::clone(&group);
        let on_select = Rc::clone(&on_select);

        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            let mut dataset = None;
            {
                let mut group = group_ref.borrow_mut();
                group.click(index, |element| dataset = Some(read_dataset(element)));
                sync_marker(&group, class);
            }
            // Borrow released: the callback may navigate or wire more groups
            if let Some(dataset) = dataset {
                on_select(dataset);
            }
        });

        if let Some(element) = group.borrow().items().get(index) {
            let _ = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
        on_click.forget();
    }
}

/// Collect all elements matching `selector` in document order
pub fn query_elements(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Read an element's `data-*` attributes
pub fn read_dataset(element: &web_sys::HtmlElement) -> Dataset {
    let map: JsValue = element.dataset().into();
    serde_wasm_bindgen::from_value(map).unwrap_or_default()
}

fn sync_marker(group: &SelectionGroup<web_sys::HtmlElement>, class: &str) {
    for (index, element) in group.items().iter().enumerate() {
        let classes = element.class_list();
        let _ = if group.is_selected(index) {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
}

// ========================
// Reactive views
// ========================

/// Signal-backed selection for lists rendered by Leptos
#[derive(Clone, Copy)]
pub struct SelectionSignal {
    selected_read: ReadSignal<Option<usize>>,
    selected_write: WriteSignal<Option<usize>>,
}

pub fn create_selection() -> SelectionSignal {
    let (selected_read, selected_write) = signal(None::<usize>);
    SelectionSignal { selected_read, selected_write }
}

impl SelectionSignal {
    pub fn select(&self, index: usize) {
        self.selected_write.set(Some(index));
    }

    /// Tracked: re-runs the calling closure when the selection moves
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_read.get() == Some(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected_read.get_untracked()
    }
}

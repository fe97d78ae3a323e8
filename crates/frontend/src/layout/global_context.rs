use leptos::prelude::*;
use web_sys::window;

/// Pages reachable from the sidebar, by key
pub const PAGES: &[(&str, &str, &str)] = &[
    ("dashboard", "Dashboard", "dashboard"),
    ("categories", "Categories", "folder"),
    ("subcategories", "Subcategories", "layers"),
    ("gallery", "Gallery", "image"),
    ("catalog", "Catalog", "book"),
];

pub const DEFAULT_PAGE: &str = "dashboard";

pub fn page_title(key: &str) -> &'static str {
    PAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, title, _)| *title)
        .unwrap_or("Dashboard")
}

fn is_known_page(key: &str) -> bool {
    PAGES.iter().any(|(k, _, _)| *k == key)
}

/// Reads `active` out of a `?active=...&...` query string
pub fn active_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "active")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| is_known_page(value))
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Keeps the active page in sync with `?active=` in the address bar
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_query(&search) {
            self.active.set(key);
        }

        let active = self.active;
        Effect::new(move |_| {
            let new_url = format!("?active={}", urlencoding::encode(&active.get()));
            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open page: {}", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::tabs::tab_labels::{page_for_path, path_for_key, tab_label_for_key, DASHBOARD_KEY};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Связывает табы с URL: путь открывает таб, активный таб задает путь.
    /// Вызывается внутри `<Router>`.
    pub fn init_router_integration(&self) {
        let this = *self;
        let location = use_location();
        let navigate = use_navigate();

        Effect::new(move |_| {
            let path = location.pathname.get();
            match page_for_path(&path) {
                Some(page) => this.open_tab(page.key, page.title),
                None if this.opened.with_untracked(Vec::is_empty) => {
                    this.open_tab(DASHBOARD_KEY, &tab_label_for_key(DASHBOARD_KEY))
                }
                None => {}
            }
        });

        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let target = path_for_key(&key);
            let current = location.pathname.get_untracked();
            // Only navigate if the path actually changed
            if page_for_path(&current).map(|p| p.path) != Some(target) {
                navigate(target, NavigateOptions::default());
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open_tab: {}", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            return;
        }
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: {}", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            match next_active {
                Some(next) => self.active.set(Some(next)),
                // без табов остается dashboard
                None => self.open_tab(DASHBOARD_KEY, &tab_label_for_key(DASHBOARD_KEY)),
            }
        }
    }

    /// Закрыть все табы (при выходе из сессии)
    pub fn reset(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

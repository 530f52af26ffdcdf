//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::routes::Page;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page the user asked for - read
    pub page: ReadSignal<Page>,
    /// Page the user asked for - write
    set_page: WriteSignal<Page>,
    /// Order list refresh interval
    pub poll_interval_ms: u32,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), poll_interval_ms: u32) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            poll_interval_ms,
        }
    }

    /// Go to a page; access rules are applied when rendering
    pub fn navigate(&self, page: Page) {
        log::debug!("navigate to {:?}", page);
        self.set_page.set(page);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

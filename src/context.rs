//! Admin Context
//!
//! Shared admin console state provided via Leptos Context API.

use leptos::prelude::*;

use crate::admin::AdminPage;

/// Admin-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    /// Panel currently shown - read
    pub current_page: ReadSignal<AdminPage>,
    /// Panel currently shown - write
    set_current_page: WriteSignal<AdminPage>,
    /// Mobile sidebar visibility - read
    pub sidebar_open: ReadSignal<bool>,
    /// Mobile sidebar visibility - write
    set_sidebar_open: WriteSignal<bool>,
}

impl AdminContext {
    pub fn new(
        current_page: (ReadSignal<AdminPage>, WriteSignal<AdminPage>),
        sidebar_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
            sidebar_open: sidebar_open.0,
            set_sidebar_open: sidebar_open.1,
        }
    }

    /// Switch panels and close the mobile sidebar
    pub fn navigate(&self, page: AdminPage) {
        log::debug!("[ADMIN] navigate to {}", page.id());
        self.set_current_page.set(page);
        self.set_sidebar_open.set(false);
    }

    pub fn open_sidebar(&self) {
        self.set_sidebar_open.set(true);
    }

    pub fn close_sidebar(&self) {
        self.set_sidebar_open.set(false);
    }
}

/// Get the admin context
pub fn use_admin() -> AdminContext {
    use_context::<AdminContext>().expect("AdminContext should be provided")
}

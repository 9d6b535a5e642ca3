//! Browser Command Wrappers
//!
//! Side effects that leave the page: deep links, phone calls, scrolling and
//! console dumps.

use serde::Serialize;

use crate::error::{AppError, AppResult};

fn window() -> AppResult<web_sys::Window> {
    web_sys::window().ok_or(AppError::NoWindow)
}

/// `window.location.pathname`
pub fn current_path() -> AppResult<String> {
    Ok(window()?.location().pathname()?)
}

/// Open `url` in a new tab
pub fn open_in_new_tab(url: &str) -> AppResult<()> {
    match window()?.open_with_url_and_target(url, "_blank")? {
        Some(_) => Ok(()),
        None => Err(AppError::PopupBlocked(url.to_string())),
    }
}

/// Replace the current location, e.g. with a `tel:` link
pub fn navigate_to(url: &str) -> AppResult<()> {
    window()?.location().set_href(url)?;
    Ok(())
}

/// Smoothly scroll the element matching `selector` into view
pub fn scroll_to_section(selector: &str) -> AppResult<()> {
    let doc = window()?.document().ok_or(AppError::NoWindow)?;
    let Some(el) = doc.query_selector(selector)? else {
        log::debug!("no element for {}", selector);
        return Ok(());
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Log a serializable value as a live object in the devtools console
pub fn console_dump<T: Serialize>(label: &str, value: &T) -> AppResult<()> {
    let js = serde_wasm_bindgen::to_value(value).map_err(|e| AppError::Browser(e.to_string()))?;
    web_sys::console::log_2(&label.into(), &js);
    Ok(())
}

/// Run a command from an event handler, logging instead of propagating
pub fn run(what: &str, result: AppResult<()>) {
    if let Err(e) = result {
        log::warn!("{} failed: {}", what, e);
    }
}

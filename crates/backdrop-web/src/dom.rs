//! Small DOM helpers outside the canvas engine.

use js_sys::Date;
use web_sys as web;

/// Read the reduced-motion preference once at startup. A missing or
/// failing media query counts as motion allowed.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Stamp the footer copyright with the current year, if the page has one.
pub fn stamp_current_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("year") {
        el.set_text_content(Some(&Date::new_0().get_full_year().to_string()));
    }
}

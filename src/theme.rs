use crate::dom::{self, Listener};
use folio_core::{Mount, Theme};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

pub fn current(window: &web::Window, document: &web::Document) -> Theme {
    let attr = document
        .document_element()
        .and_then(|el| el.get_attribute("data-theme"));
    Theme::resolve(attr.as_deref(), dom::prefers_light(window))
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"theme-color\"]") {
        _ = meta.set_attribute("content", theme.meta_color());
    }
}

/// Wire `#theme-toggle` to flip the theme; `on_change` runs after the
/// document has been updated.
pub fn mount_toggle(
    document: &web::Document,
    theme: Rc<Cell<Theme>>,
    on_change: impl Fn(Theme) + 'static,
) -> anyhow::Result<Option<Mount>> {
    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return Ok(None);
    };
    let doc = document.clone();
    let mut mount = Mount::new("theme-toggle");
    mount.add(Listener::add(&button, "click", move |_ev: web::Event| {
        let next = theme.get().toggled();
        theme.set(next);
        apply(&doc, next);
        log::info!("[theme] switched to {}", next);
        on_change(next);
    })?);
    Ok(Some(mount))
}

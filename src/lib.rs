#![cfg(target_arch = "wasm32")]
use folio_core::{Mount, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod dom;
mod field;
mod frame;
mod glow;
mod stage;
mod theme;

thread_local! {
    static MOUNTS: RefCell<Vec<Mount>> = RefCell::new(Vec::new());
    static THEME: Rc<Cell<Theme>> = Rc::new(Cell::new(Theme::Dark));
    static FIELD_REFRESH: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

fn keep(mount: anyhow::Result<Option<Mount>>, what: &str) {
    match mount {
        Ok(Some(m)) => MOUNTS.with(|ms| ms.borrow_mut().push(m)),
        Ok(None) => log::info!("[{}] not present on this page", what),
        Err(e) => log::error!("[{}] mount error: {:?}", what, e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let theme_cell = THEME.with(|t| t.clone());
    theme_cell.set(theme::current(&window, &document));
    theme::apply(&document, theme_cell.get());

    match field::mount(&window, &document, theme_cell.clone()) {
        Ok(Some(f)) => {
            FIELD_REFRESH.with(|r| *r.borrow_mut() = Some(f.refresh.clone()));
            MOUNTS.with(|ms| ms.borrow_mut().push(f.mount));
        }
        other => keep(other.map(|o| o.map(|f| f.mount)), "field"),
    }
    keep(glow::mount(&window, &document), "glow");
    keep(stage::mount(&window, &document), "stage");
    keep(
        theme::mount_toggle(&document, theme_cell, |_| refresh_field()),
        "theme-toggle",
    );
    Ok(())
}

fn refresh_field() {
    let refresh = FIELD_REFRESH.with(|r| r.borrow().clone());
    if let Some(refresh) = refresh {
        refresh();
    }
}

/// Switch theme from the host page (`"dark"` or `"light"`).
#[wasm_bindgen]
pub fn set_theme(name: &str) -> Result<(), JsValue> {
    let next: Theme = name
        .parse()
        .map_err(|e: folio_core::FolioError| JsValue::from_str(&e.to_string()))?;
    THEME.with(|t| t.set(next));
    if let Some(document) = web::window().and_then(|w| w.document()) {
        theme::apply(&document, next);
    }
    refresh_field();
    Ok(())
}

/// Stop every loop and remove every listener this module registered.
#[wasm_bindgen]
pub fn unmount() {
    let mounts = MOUNTS.with(|ms| std::mem::take(&mut *ms.borrow_mut()));
    for mut m in mounts {
        m.teardown();
    }
    FIELD_REFRESH.with(|r| *r.borrow_mut() = None);
}

use crate::dom::{self, Listener};
use crate::frame;
use folio_core::{CursorGlow, Motion, Mount, OnDetach};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub const CURSOR_GLOW_ID: &str = "cursor-glow";

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Option<Mount>> {
    let Some(el) = dom::html_element_by_id(document, CURSOR_GLOW_ID) else {
        return Ok(None);
    };
    if !dom::has_fine_pointer(window) || dom::prefers_reduced_motion(window) {
        dom::set_style(&el, "display", "none");
        log::info!("[glow] hidden (touch device or reduced motion)");
        return Ok(None);
    }

    let glow = Rc::new(RefCell::new(CursorGlow::new()));
    let last = Rc::new(Cell::new(Instant::now()));

    let on_frame = {
        let glow = glow.clone();
        let el = el.clone();
        move || {
            let now = Instant::now();
            let dt_sec = (now - last.get()).as_secs_f32();
            last.set(now);
            let mut g = glow.borrow_mut();
            g.step(dt_sec);
            dom::set_style(&el, "transform", &g.transform_css());
        }
    };
    let frame_loop = frame::start_loop(window, Motion::Full, on_frame, || {})?;

    let mut mount = Mount::new("cursor-glow");
    mount.add(frame_loop);
    mount.add(Listener::add(window, "pointermove", move |ev: web::PointerEvent| {
        glow.borrow_mut()
            .set_target(ev.client_x() as f32, ev.client_y() as f32);
    })?);
    // the loop stops with the mount; hide the glow instead of freezing it
    mount.add(OnDetach(move || dom::set_style(&el, "display", "none")));
    Ok(Some(mount))
}

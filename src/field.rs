use crate::canvas::{self, Canvas2dSurface};
use crate::dom::{self, DebouncedTimeout, Listener};
use crate::frame;
use folio_core::constants::RESIZE_DEBOUNCE_MS;
use folio_core::{
    seed_from_unit, DeviceProfile, FieldContext, Motion, Mount, ParticleField, PointerState, Theme,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

pub struct FieldMount {
    pub mount: Mount,
    /// Repaints the still frame under reduced motion; no-op while animating.
    pub refresh: Rc<dyn Fn()>,
}

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    theme: Rc<Cell<Theme>>,
) -> anyhow::Result<Option<FieldMount>> {
    let Some(canvas) = document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::warn!("[field] missing #{}; particle field disabled", PARTICLE_CANVAS_ID);
        return Ok(None);
    };
    let Some(ctx) = canvas::context_2d(&canvas) else {
        log::warn!("[field] no 2d context; particle field disabled");
        return Ok(None);
    };

    let size = dom::viewport_size(window);
    canvas::sync_canvas_size(&canvas, size);
    let profile = DeviceProfile::resolve(size.x, dom::has_fine_pointer(window));
    let motion = Motion::from_reduced_preference(dom::prefers_reduced_motion(window));
    log::info!(
        "[field] mounting {:.0}x{:.0} profile={:?} motion={:?}",
        size.x,
        size.y,
        profile.class,
        motion
    );

    let field = Rc::new(RefCell::new(ParticleField::new(
        profile,
        size,
        seed_from_unit(js_sys::Math::random()),
    )?));
    let surface = Rc::new(RefCell::new(Canvas2dSurface::new(ctx)));
    let pointer = Rc::new(Cell::new(PointerState::ABSENT));

    let draw_still: Rc<dyn Fn()> = {
        let field = field.clone();
        let surface = surface.clone();
        let theme = theme.clone();
        Rc::new(move || {
            field
                .borrow()
                .draw_static(&mut *surface.borrow_mut(), theme.get());
        })
    };

    let on_frame = {
        let field = field.clone();
        let surface = surface.clone();
        let pointer = pointer.clone();
        let theme = theme.clone();
        move || {
            let ctx = FieldContext {
                pointer: pointer.get(),
                theme: theme.get(),
            };
            field.borrow_mut().frame(&mut *surface.borrow_mut(), &ctx);
        }
    };
    let still = draw_still.clone();
    let frame_loop = frame::start_loop(window, motion, on_frame, move || still())?;

    let mut mount = Mount::new("particle-field");
    mount.add(frame_loop);

    if motion == Motion::Full && profile.pointer_interaction {
        let p = pointer.clone();
        mount.add(Listener::add(window, "pointermove", move |ev: web::PointerEvent| {
            let mut state = p.get();
            state.move_to(ev.client_x() as f32, ev.client_y() as f32);
            p.set(state);
        })?);

        let p = pointer.clone();
        mount.add(Listener::add(window, "pointerout", move |ev: web::PointerEvent| {
            // relatedTarget is null only when the pointer leaves the window
            if ev.related_target().is_none() {
                let mut state = p.get();
                state.leave();
                p.set(state);
            }
        })?);
    }

    let debounce = DebouncedTimeout::new(window, RESIZE_DEBOUNCE_MS);
    {
        let debounce_for_listener = debounce.clone();
        let window_for_resize = window.clone();
        let reduced = motion == Motion::Reduced;
        let draw_still = draw_still.clone();
        let field = field.clone();
        mount.add(Listener::add(window, "resize", move |_ev: web::Event| {
            let window = window_for_resize.clone();
            let canvas = canvas.clone();
            let field = field.clone();
            let draw_still = draw_still.clone();
            debounce_for_listener.arm(move || {
                let size = dom::viewport_size(&window);
                canvas::sync_canvas_size(&canvas, size);
                field.borrow_mut().resize(size);
                if reduced {
                    draw_still();
                }
            });
        })?);
    }
    mount.add(debounce);

    let refresh: Rc<dyn Fn()> = if motion == Motion::Reduced {
        draw_still
    } else {
        Rc::new(|| {})
    };
    Ok(Some(FieldMount { mount, refresh }))
}

use folio_core::{FrameHandle, FrameLoop, FrameScheduler, Motion};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler. Owns the tick closure, so the
/// closure lives exactly as long as the loop does.
pub struct RafScheduler {
    window: web::Window,
    tick: TickClosure,
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> Option<FrameHandle> {
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

pub type SharedLoop = Rc<RefCell<FrameLoop<RafScheduler>>>;

/// Build a loop that calls `on_frame` every display refresh, or calls
/// `still` once when motion is reduced.
pub fn start_loop(
    window: &web::Window,
    motion: Motion,
    mut on_frame: impl FnMut() + 'static,
    still: impl FnOnce(),
) -> anyhow::Result<SharedLoop> {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let frame_loop: SharedLoop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler {
        window: window.clone(),
        tick: tick.clone(),
    })));
    // weak: the loop owns the closure through its scheduler
    let loop_for_tick: Weak<RefCell<FrameLoop<RafScheduler>>> = Rc::downgrade(&frame_loop);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(l) = loop_for_tick.upgrade() {
            l.borrow_mut().tick(&mut on_frame);
        }
    }) as Box<dyn FnMut()>));
    frame_loop.borrow_mut().start(motion, still)?;
    Ok(frame_loop)
}

use folio_core::{Debouncer, Detach};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[inline]
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    media_matches(window, "(prefers-reduced-motion: reduce)")
}

#[inline]
pub fn has_fine_pointer(window: &web::Window) -> bool {
    media_matches(window, "(pointer: fine)")
}

#[inline]
pub fn prefers_light(window: &web::Window) -> bool {
    media_matches(window, "(prefers-color-scheme: light)")
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Event listener on a target that remembers the exact closure it
/// registered, so removal passes the same function reference back.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    capture: bool,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl Listener {
    pub fn add<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self> {
        Self::add_with_capture(target, event, false, handler)
    }

    /// `handler` receives the event cast to `E`; events of another type
    /// are ignored.
    pub fn add_with_capture<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        capture: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback_and_bool(
                event,
                closure.as_ref().unchecked_ref(),
                capture,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            capture,
            closure: Some(closure),
        })
    }
}

impl Detach for Listener {
    fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Err(e) = self.target.remove_event_listener_with_callback_and_bool(
                self.event,
                closure.as_ref().unchecked_ref(),
                self.capture,
            ) {
                log::warn!("remove {} listener failed: {:?}", self.event, e);
            }
        }
    }
}

struct ArmedTimeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

/// Trailing-edge debounced timer. Re-arming clears the previous timeout;
/// only the newest generation runs its action.
#[derive(Clone)]
pub struct DebouncedTimeout {
    window: web::Window,
    delay_ms: i32,
    debouncer: Rc<RefCell<Debouncer>>,
    armed: Rc<RefCell<Option<ArmedTimeout>>>,
}

impl DebouncedTimeout {
    pub fn new(window: &web::Window, delay_ms: i32) -> Self {
        Self {
            window: window.clone(),
            delay_ms,
            debouncer: Rc::new(RefCell::new(Debouncer::new())),
            armed: Rc::new(RefCell::new(None)),
        }
    }

    pub fn arm(&self, action: impl Fn() + 'static) {
        self.clear_armed();
        let generation = self.debouncer.borrow_mut().trigger();
        let debouncer = self.debouncer.clone();
        let closure = Closure::wrap(Box::new(move || {
            if debouncer.borrow_mut().settle(generation) {
                action();
            }
        }) as Box<dyn FnMut()>);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                self.delay_ms,
            ) {
            Ok(id) => {
                *self.armed.borrow_mut() = Some(ArmedTimeout {
                    id,
                    _closure: closure,
                });
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }

    fn clear_armed(&self) {
        // clearing an already-fired id is a no-op
        if let Some(t) = self.armed.borrow_mut().take() {
            self.window.clear_timeout_with_handle(t.id);
        }
    }
}

impl Detach for DebouncedTimeout {
    fn detach(&mut self) {
        self.debouncer.borrow_mut().cancel();
        self.clear_armed();
    }
}

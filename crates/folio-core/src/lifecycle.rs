//! Mount/teardown bookkeeping.
//!
//! A mounted visual owns a frame loop plus the listeners it registered on
//! global targets. [`Mount`] tears all of them down together, exactly once,
//! whether through [`Mount::teardown`] or on drop.

use crate::frame_loop::{FrameLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;

pub trait Detach {
    fn detach(&mut self);
}

impl<S: FrameScheduler> Detach for FrameLoop<S> {
    fn detach(&mut self) {
        self.stop();
    }
}

impl<T: Detach> Detach for Rc<RefCell<T>> {
    fn detach(&mut self) {
        self.borrow_mut().detach();
    }
}

/// Adapter for one-off cleanup closures.
pub struct OnDetach<F: FnMut()>(pub F);

impl<F: FnMut()> Detach for OnDetach<F> {
    fn detach(&mut self) {
        (self.0)();
    }
}

pub struct Mount {
    name: &'static str,
    parts: Vec<Box<dyn Detach>>,
    torn_down: bool,
}

impl Mount {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            parts: Vec::new(),
            torn_down: false,
        }
    }

    /// Parts are detached in the order they were added; add the frame loop
    /// first so no frame runs against half-removed listeners.
    pub fn add(&mut self, part: impl Detach + 'static) {
        if self.torn_down {
            let mut part = part;
            part.detach();
            return;
        }
        self.parts.push(Box::new(part));
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let count = self.parts.len();
        for part in self.parts.iter_mut() {
            part.detach();
        }
        self.parts.clear();
        log::info!("[{}] unmounted ({} parts)", self.name, count);
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.teardown();
    }
}

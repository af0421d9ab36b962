//! Frame loop controller over a host-provided frame scheduler.
//!
//! The browser front-end backs [`FrameScheduler`] with
//! `requestAnimationFrame`; tests use [`ManualScheduler`] and call
//! [`FrameLoop::tick`] themselves to single-step frames.

use crate::error::FolioError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for exactly one callback on the next display refresh.
    /// `None` means the host refused (e.g. no window).
    fn request(&mut self) -> Option<FrameHandle>;
    fn cancel(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Full,
    Reduced,
}

impl Motion {
    pub fn from_reduced_preference(prefers_reduced: bool) -> Self {
        if prefers_reduced {
            Motion::Reduced
        } else {
            Motion::Full
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    /// A single static frame was drawn; nothing is scheduled.
    Still,
    Stopped,
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameHandle>,
    state: LoopState,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames drawn so far, including a reduced-motion still.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Start animating, or under reduced motion draw one still via `still`
    /// and schedule nothing.
    pub fn start(&mut self, motion: Motion, still: impl FnOnce()) -> Result<(), FolioError> {
        match self.state {
            LoopState::Idle => {}
            LoopState::Running | LoopState::Still => return Err(FolioError::LoopAlreadyRunning),
            LoopState::Stopped => return Err(FolioError::LoopTornDown),
        }
        match motion {
            Motion::Full => {
                self.state = LoopState::Running;
                self.pending = self.scheduler.request();
                log::info!("[loop] started");
            }
            Motion::Reduced => {
                still();
                self.frames += 1;
                self.state = LoopState::Still;
                log::info!("[loop] reduced motion: drew a single still frame");
            }
        }
        Ok(())
    }

    /// Run one scheduled frame and request the next. A callback that
    /// arrives after [`stop`](Self::stop) draws nothing and returns false.
    pub fn tick(&mut self, draw: impl FnOnce()) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.pending = None;
        draw();
        self.frames += 1;
        self.pending = self.scheduler.request();
        true
    }

    /// Cancel the pending frame and refuse any further ticks. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.state != LoopState::Stopped {
            log::info!("[loop] stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }
}

/// Scheduler that only records requests; frames fire when a test says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of frames ever requested.
    pub fn requests(&self) -> usize {
        self.requested.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        Some(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

use super::surface::DrawingSurface;
use super::train_animation::{TickOutcome, TrainAnimation};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;

/// Whether a tick source should keep firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

pub type TickCallback = Box<dyn FnMut() -> TickControl>;

/// Fixed-interval tick source owned by the display surface
pub trait TickSource {
    /// Fire `on_tick` every `interval_ms` until it returns [`TickControl::Stop`]
    /// or [`TickSource::stop`] is called. Starting again replaces the callback.
    fn start(&mut self, interval_ms: u32, on_tick: TickCallback);

    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Browser `setInterval` ticks; dropping the ticker cancels them
#[derive(Default)]
pub struct IntervalTicker {
    handle: Rc<RefCell<Option<Interval>>>,
}

impl IntervalTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self, interval_ms: u32, mut on_tick: TickCallback) {
        self.stop();
        let slot = Rc::clone(&self.handle);
        let interval = Interval::new(interval_ms, move || {
            if on_tick() == TickControl::Stop {
                // Dropping the handle clears the browser interval
                slot.borrow_mut().take();
            }
        });
        *self.handle.borrow_mut() = Some(interval);
    }

    fn stop(&mut self) {
        self.handle.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.handle.borrow().is_some()
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Tick source fired by hand, for driving animations synchronously
#[derive(Default)]
pub struct ManualTicker {
    on_tick: Option<TickCallback>,
    interval_ms: Option<u32>,
    fired: usize,
}

impl ManualTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire one tick; returns false if nothing is armed
    pub fn fire(&mut self) -> bool {
        let Some(on_tick) = self.on_tick.as_mut() else {
            return false;
        };
        self.fired += 1;
        if on_tick() == TickControl::Stop {
            self.on_tick = None;
        }
        true
    }

    /// Fire until the callback stops, at most `max_ticks` times; returns ticks fired
    pub fn run_until_stopped(&mut self, max_ticks: usize) -> usize {
        let mut count = 0;
        while count < max_ticks && self.fire() {
            count += 1;
        }
        count
    }

    #[must_use]
    pub fn fired(&self) -> usize {
        self.fired
    }

    #[must_use]
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }
}

impl TickSource for ManualTicker {
    fn start(&mut self, interval_ms: u32, on_tick: TickCallback) {
        self.interval_ms = Some(interval_ms);
        self.on_tick = Some(on_tick);
    }

    fn stop(&mut self) {
        self.on_tick = None;
    }

    fn is_running(&self) -> bool {
        self.on_tick.is_some()
    }
}

/// Arm `ticker` to advance `animation` on `surface` once per tick.
///
/// The ticker stops itself on the tick that clears the marker, so it fires
/// `len + 1` times for a full run. Call this only after the figure is drawn.
pub fn drive_animation<S, T>(
    animation: Rc<RefCell<TrainAnimation>>,
    surface: Rc<RefCell<S>>,
    ticker: &mut T,
    interval_ms: u32,
) where
    S: DrawingSurface + 'static,
    T: TickSource + ?Sized,
{
    crate::logging::log!(
        "Starting train animation: {} stations, {}ms per tick",
        animation.borrow().len(),
        interval_ms
    );
    ticker.start(
        interval_ms,
        Box::new(move || {
            let outcome = animation.borrow_mut().tick(&mut *surface.borrow_mut());
            match outcome {
                TickOutcome::Moved { .. } => TickControl::Continue,
                TickOutcome::Cleared | TickOutcome::Finished => TickControl::Stop,
            }
        }),
    );
}

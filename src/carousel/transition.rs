//! Slide transitions and navigation.

use tracing::debug;

use super::{Carousel, ContainerId, Timer};
use crate::constants::{Millis, TRANSITION_DURATION};
use crate::document::Document;
use crate::effect::Direction;
use crate::render::RenderSink;
use crate::slide::{SlideVisual, TransitionVisuals};

/// The transition currently holding the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub container: ContainerId,
    pub target: usize,
    pub until: Millis,
}

/// Instance-wide guard against overlapping transitions. Every container's
/// transition path goes through the same lock, so a transition in one container
/// rejects requests in every other one until it completes.
#[derive(Debug, Default)]
pub(super) struct TransitionLock {
    holder: Option<InFlight>,
}

impl TransitionLock {
    pub(super) fn is_held(&self) -> bool {
        self.holder.is_some()
    }

    pub(super) fn acquire(&mut self, in_flight: InFlight) {
        self.holder = Some(in_flight);
    }

    pub(super) fn release(&mut self) {
        self.holder = None;
    }

    pub(super) fn holder(&self) -> Option<InFlight> {
        self.holder
    }
}

impl<D: Document, S: RenderSink> Carousel<D, S> {
    /// Ask `container` to show `target`. Requests made while any transition is in
    /// flight, or for a slide that doesn't exist, are dropped without a trace.
    /// Returns whether the request was accepted.
    pub fn request_slide(&mut self, container: ContainerId, target: usize, direction: Direction) -> bool {
        let Some(state) = self.containers.get(container.0) else {
            return false;
        };
        if let Some(in_flight) = self.lock.holder() {
            debug!(container = container.0, target, busy = in_flight.container.0, "transition rejected, one is in flight");
            return false;
        }
        if target >= state.slide_count {
            debug!(container = container.0, target, slide_count = state.slide_count, "transition rejected, no such slide");
            return false;
        }
        let previous = state.current;
        let has_dots = state.controls.is_some_and(|c| c.dots.is_some());

        self.hooks.before(container, previous, target);

        let end = self.timers.schedule(TRANSITION_DURATION, Timer::TransitionEnd { container, target });
        self.lock.acquire(InFlight { container, target, until: end.due() });

        let effect = self.config.effect.effect_for(target);
        match previous {
            None => self.sink.set_slide(container, target, &SlideVisual::SHOWN),
            Some(previous) => {
                let visuals = TransitionVisuals::new(effect, direction);
                if previous != target {
                    self.sink.set_slide(container, previous, &visuals.outgoing);
                }
                self.sink.set_slide(container, target, &visuals.incoming);
            }
        }
        if has_dots {
            self.sink.set_active_dot(container, target);
        }

        // The index moves now; the animation catches up during the window
        self.containers[container.0].current = Some(target);

        debug!(container = container.0, ?previous, target, ?effect, ?direction, "transition started");
        true
    }

    /// First display of a freshly set-up container: no animation, no lock.
    pub(super) fn show_initial(&mut self, container: ContainerId) {
        self.hooks.before(container, None, 0);
        self.sink.set_slide(container, 0, &SlideVisual::SHOWN);
        self.containers[container.0].current = Some(0);
        self.hooks.after(container, 0);
    }

    pub(super) fn complete_transition(&mut self, container: ContainerId, target: usize) {
        self.lock.release();
        debug!(container = container.0, target, "transition finished");
        self.hooks.after(container, target);
    }

    /// The transition holding the lock, if any.
    pub fn in_flight(&self) -> Option<InFlight> {
        self.lock.holder()
    }

    pub fn is_transitioning(&self) -> bool {
        self.lock.is_held()
    }

    // --- Navigation ---

    /// Move forward one slide, wrapping to the first when looping.
    pub fn next(&mut self, container: ContainerId) {
        let Some(state) = self.containers.get(container.0) else {
            return;
        };
        let current = state.current.unwrap_or(0);
        let mut target = current + 1;
        if target >= state.slide_count {
            target = if self.config.looping { 0 } else { current };
        }
        self.request_slide(container, target, Direction::Forward);
    }

    /// Move back one slide, wrapping to the last when looping.
    pub fn previous(&mut self, container: ContainerId) {
        let Some(state) = self.containers.get(container.0) else {
            return;
        };
        let current = state.current.unwrap_or(0);
        let target = match current.checked_sub(1) {
            Some(target) => target,
            None if self.config.looping => state.slide_count - 1,
            None => 0,
        };
        self.request_slide(container, target, Direction::Backward);
    }

    /// Jump to `index`. Manual navigation restarts the autoplay cycle.
    pub fn go_to(&mut self, container: ContainerId, index: usize) {
        let Some(current) = self.current_slide(container) else {
            return;
        };
        self.request_slide(container, index, Direction::between(current, index));
        if self.config.auto_play {
            self.stop_autoplay(container);
            self.start_autoplay(container);
        }
    }
}

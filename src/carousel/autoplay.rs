use tracing::debug;

use super::{Carousel, ContainerId, Timer};
use crate::constants::Millis;
use crate::document::Document;
use crate::render::RenderSink;
use crate::state::AutoplayState;

impl<D: Document, S: RenderSink> Carousel<D, S> {
    /// (Re)start the autoplay cycle of `container`. Any pending advance is dropped
    /// first, and the next one waits as long as the current slide asks for.
    pub fn start_autoplay(&mut self, container: ContainerId) {
        self.stop_autoplay(container);
        let Some(current) = self.current_slide(container) else {
            return;
        };

        let delay = self.config.time_views.delay_for(current);
        let timer = self.timers.schedule(delay, Timer::Autoplay(container));
        self.containers[container.0].autoplay = AutoplayState::Scheduled(timer);
        debug!(container = container.0, current, delay, "autoplay scheduled");
    }

    /// Cancel the pending advance of `container`, if any.
    pub fn stop_autoplay(&mut self, container: ContainerId) {
        let Some(state) = self.containers.get_mut(container.0) else {
            return;
        };
        if let AutoplayState::Scheduled(timer) = std::mem::take(&mut state.autoplay) {
            self.timers.cancel(timer);
        }
    }

    pub(super) fn autoplay_fired(&mut self, container: ContainerId) {
        let Some(state) = self.containers.get_mut(container.0) else {
            return;
        };
        state.autoplay = AutoplayState::Idle;
        self.next(container);
        self.start_autoplay(container);
    }

    /// When the pending autoplay advance of `container` is due.
    pub fn autoplay_due(&self, container: ContainerId) -> Option<Millis> {
        self.container(container).and_then(|c| c.autoplay.due())
    }
}

use super::{Carousel, ContainerId};
use crate::constants::SWIPE_THRESHOLD;
use crate::document::Document;
use crate::effect::Direction;
use crate::render::RenderSink;

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct TouchTracker {
    start_x: Option<f32>,
}

/// Navigation a horizontal gesture asks for. A finger moving left (start right of
/// end) means forward; travel up to the threshold is not a swipe.
pub fn swipe_direction(start_x: f32, end_x: f32) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD {
        None
    } else if diff > 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

impl<D: Document, S: RenderSink> Carousel<D, S> {
    pub(super) fn touch_start(&mut self, container: ContainerId, x: f32) {
        let Some(state) = self.containers.get_mut(container.0) else {
            return;
        };
        if !state.touch_enabled {
            return;
        }
        state.touch.start_x = Some(x);
        self.stop_autoplay(container);
    }

    pub(super) fn touch_end(&mut self, container: ContainerId, x: f32) {
        let Some(state) = self.containers.get_mut(container.0) else {
            return;
        };
        if !state.touch_enabled {
            return;
        }
        // A touch that never started counts as no travel
        let start_x = state.touch.start_x.take().unwrap_or(x);

        match swipe_direction(start_x, x) {
            Some(Direction::Forward) => self.next(container),
            Some(Direction::Backward) => self.previous(container),
            None => {}
        }
        if self.config.auto_play {
            self.start_autoplay(container);
        }
    }
}

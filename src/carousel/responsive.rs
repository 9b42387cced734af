use tracing::debug;

use super::{Carousel, ContainerId};
use crate::config::resolve_breakpoint;
use crate::document::Document;
use crate::render::RenderSink;

impl<D: Document, S: RenderSink> Carousel<D, S> {
    pub(super) fn setup_responsive(&mut self) {
        if self.config.responsive.is_empty() {
            return;
        }
        let width = self.document.viewport_width();
        self.check_breakpoint(width);
    }

    /// Viewport width changed.
    pub fn resize(&mut self, width: u32) {
        if self.config.responsive.is_empty() {
            return;
        }
        self.check_breakpoint(width);
    }

    fn check_breakpoint(&mut self, width: u32) {
        let matched = resolve_breakpoint(&self.config.responsive, width);
        if matched != self.active_breakpoint {
            debug!(width, from = ?self.active_breakpoint, to = ?matched, "breakpoint changed");
            if let Some(index) = matched {
                self.apply_breakpoint(index);
            }
            self.active_breakpoint = matched;
        }
    }

    /// Leaving every breakpoint keeps the options of the last one applied.
    fn apply_breakpoint(&mut self, index: usize) {
        let rule = self.config.responsive[index].clone();

        if let Some(slide_views) = rule.slide_views {
            self.config.slide_views = slide_views;
        }
        if let Some(effect) = rule.effect {
            self.config.effect = effect;
        }
        if let Some(time_views) = rule.time_views {
            self.config.time_views = time_views;
        }
        if let Some(navigation) = rule.navigation {
            navigation.apply_to(&mut self.config.navigation);
            let (arrows, dots) = (self.config.navigation.arrows, self.config.navigation.dots);
            for (index, container) in self.containers.iter().enumerate() {
                if container.controls.is_some() {
                    self.sink.set_controls_visibility(ContainerId(index), arrows, dots);
                }
            }
        }

        // Shared options changed, so every cycle restarts with them
        for index in 0..self.containers.len() {
            let id = ContainerId(index);
            self.stop_autoplay(id);
            if self.config.auto_play {
                self.start_autoplay(id);
            }
        }
    }
}

use std::fmt;

use super::ContainerId;
use crate::config::Config;

type InitHook = Box<dyn FnMut(&Config, usize)>;
type BeforeHook = Box<dyn FnMut(ContainerId, Option<usize>, usize)>;
type SlideHook = Box<dyn FnMut(ContainerId, usize)>;

/// Lifecycle notifications. Hooks observe; they cannot call back into the carousel.
#[derive(Default)]
pub struct Hooks {
    /// Configuration and number of containers set up.
    pub on_init: Option<InitHook>,
    /// Previous slide (none on first display) and target, before anything changes.
    pub before_slide_change: Option<BeforeHook>,
    /// New slide, once the transition window is over.
    pub after_slide_change: Option<SlideHook>,
    /// New slide, right after `after_slide_change`.
    pub on_slide_change: Option<SlideHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_init(mut self, hook: impl FnMut(&Config, usize) + 'static) -> Self {
        self.on_init = Some(Box::new(hook));
        self
    }

    pub fn before_slide_change(mut self, hook: impl FnMut(ContainerId, Option<usize>, usize) + 'static) -> Self {
        self.before_slide_change = Some(Box::new(hook));
        self
    }

    pub fn after_slide_change(mut self, hook: impl FnMut(ContainerId, usize) + 'static) -> Self {
        self.after_slide_change = Some(Box::new(hook));
        self
    }

    pub fn on_slide_change(mut self, hook: impl FnMut(ContainerId, usize) + 'static) -> Self {
        self.on_slide_change = Some(Box::new(hook));
        self
    }

    pub(super) fn before(&mut self, container: ContainerId, previous: Option<usize>, target: usize) {
        if let Some(hook) = self.before_slide_change.as_mut() {
            hook(container, previous, target);
        }
    }

    pub(super) fn after(&mut self, container: ContainerId, index: usize) {
        if let Some(hook) = self.after_slide_change.as_mut() {
            hook(container, index);
        }
        if let Some(hook) = self.on_slide_change.as_mut() {
            hook(container, index);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_init", &self.on_init.is_some())
            .field("before_slide_change", &self.before_slide_change.is_some())
            .field("after_slide_change", &self.after_slide_change.is_some())
            .field("on_slide_change", &self.on_slide_change.is_some())
            .finish()
    }
}

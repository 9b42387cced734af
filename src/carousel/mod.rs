//! The carousel instance: container registry, lifecycle and event routing.
//!
//! One [`Carousel`] drives every container its locator finds. Containers share the
//! configuration and a single transition lock, so a transition running in one
//! container blocks requests in all the others until it completes.

mod autoplay;
mod hooks;
mod responsive;
mod touch;
mod transition;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::Millis;
use crate::document::{ContainerHandle, Document, locate};
use crate::error::ConfigError;
use crate::input::{ArrowSide, InputEvent, Key, KeyboardRouter};
use crate::render::{Controls, RenderSink};
use crate::slide::SlideVisual;
use crate::state::AutoplayState;
use crate::timer::TimerQueue;

pub use hooks::Hooks;
pub use touch::swipe_direction;
pub use transition::InFlight;

use touch::TouchTracker;
use transition::TransitionLock;

/// Position of a container in the registry, in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub usize);

#[derive(Debug)]
struct Container {
    handle: ContainerHandle,
    slide_count: usize,
    current: Option<usize>,
    autoplay: AutoplayState,
    touch: TouchTracker,
    controls: Option<Controls>,
    touch_enabled: bool,
    pause_on_hover: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    TransitionEnd { container: ContainerId, target: usize },
    Autoplay(ContainerId),
}

pub struct Carousel<D, S> {
    config: Config,
    document: D,
    sink: S,
    hooks: Hooks,
    containers: Vec<Container>,
    timers: TimerQueue<Timer>,
    lock: TransitionLock,
    active_breakpoint: Option<usize>,
    keyboard: KeyboardRouter,
}

impl<D: Document, S: RenderSink> Carousel<D, S> {
    pub fn new(config: Config, document: D, sink: S) -> Result<Self, ConfigError> {
        Self::with_hooks(config, document, sink, Hooks::default())
    }

    /// Resolve `options` over the defaults and start a carousel with them.
    pub fn from_options(options: Value, document: D, sink: S, hooks: Hooks) -> Result<Self, ConfigError> {
        Self::with_hooks(Config::resolve(options)?, document, sink, hooks)
    }

    pub fn with_hooks(config: Config, document: D, sink: S, hooks: Hooks) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut carousel = Self {
            config,
            document,
            sink,
            hooks,
            containers: Vec::new(),
            timers: TimerQueue::new(),
            lock: TransitionLock::default(),
            active_breakpoint: None,
            keyboard: KeyboardRouter::default(),
        };
        carousel.init();
        Ok(carousel)
    }

    // --- Lifecycle ---

    fn init(&mut self) {
        self.containers.clear();

        let handles = self
            .config
            .locator()
            .map(|locator| locate(&self.document, locator))
            .unwrap_or_default();
        if handles.is_empty() {
            warn!("no container found");
        }

        for handle in handles {
            self.setup_container(handle);
        }

        self.setup_responsive();

        if self.config.navigation.keyboard {
            self.keyboard.attach();
        }

        if let Some(on_init) = self.hooks.on_init.as_mut() {
            on_init(&self.config, self.containers.len());
        }

        info!(containers = self.containers.len(), "carousel initialized");
    }

    fn setup_container(&mut self, handle: ContainerHandle) {
        let detected = self.document.slide_count(handle, &self.config.slide_class);
        let slide_count = match self.config.slide_count {
            0 => detected,
            cap => detected.min(cap),
        };
        if slide_count == 0 {
            warn!(container = handle.0, "no slide found in container, skipping it");
            return;
        }

        let id = ContainerId(self.containers.len());
        let navigation = self.config.navigation;
        self.containers.push(Container {
            handle,
            slide_count,
            current: None,
            autoplay: AutoplayState::Idle,
            touch: TouchTracker::default(),
            controls: None,
            touch_enabled: navigation.touch,
            pause_on_hover: self.config.pause_on_hover,
        });

        for slide in 0..slide_count {
            self.sink.set_slide(id, slide, &SlideVisual::HIDDEN);
            if self.config.number_format.abbreviate {
                self.sink.format_numbers(id, slide, &self.config.number_format);
            }
        }

        self.show_initial(id);

        if navigation.arrows || navigation.dots {
            let controls = Controls {
                arrows: navigation.arrows,
                dots: navigation.dots.then_some(slide_count),
            };
            self.sink.create_controls(id, controls);
            if controls.dots.is_some() {
                self.sink.set_active_dot(id, 0);
            }
            self.containers[id.0].controls = Some(controls);
        }

        if self.config.auto_play {
            self.start_autoplay(id);
        }

        debug!(container = id.0, handle = handle.0, slide_count, "container ready");
    }

    /// Stop every autoplay timer, remove every control and detach the keyboard.
    /// Containers are released; a transition already in flight still completes.
    pub fn destroy(&mut self) {
        for index in 0..self.containers.len() {
            let id = ContainerId(index);
            self.stop_autoplay(id);
            if self.containers[index].controls.take().is_some() {
                self.sink.remove_controls(id);
            }
        }
        self.containers.clear();
        self.keyboard.detach();
        info!("carousel destroyed");
    }

    /// Merge `partial` over the live configuration, then tear down and start again.
    /// On error nothing changes.
    pub fn reconfigure(&mut self, partial: Value) -> Result<(), ConfigError> {
        let config = self.config.merged(partial)?;
        if config.responsive != self.config.responsive {
            self.active_breakpoint = None;
        }
        self.destroy();
        self.config = config;
        self.init();
        Ok(())
    }

    // --- Time ---

    /// Advance the clock by `dt` ms, firing every timer that comes due on the way.
    pub fn advance(&mut self, dt: Millis) {
        let until = self.timers.now().saturating_add(dt);
        while let Some((_, timer)) = self.timers.pop_due(until) {
            match timer {
                Timer::TransitionEnd { container, target } => self.complete_transition(container, target),
                Timer::Autoplay(container) => self.autoplay_fired(container),
            }
        }
        self.timers.advance_to(until);
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    /// Timers waiting to fire: autoplay advances plus at most one transition end.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // --- Input ---

    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Arrow { container, side } => {
                if self.container(container).and_then(|c| c.controls).is_some_and(|c| c.arrows) {
                    match side {
                        ArrowSide::Prev => self.previous(container),
                        ArrowSide::Next => self.next(container),
                    }
                }
            }
            InputEvent::Dot { container, index } => {
                if self.container(container).and_then(|c| c.controls).is_some_and(|c| c.dots.is_some()) {
                    self.go_to(container, index);
                }
            }
            InputEvent::PointerEnter(container) => {
                if self.container(container).is_some_and(|c| c.pause_on_hover) {
                    self.stop_autoplay(container);
                }
            }
            InputEvent::PointerLeave(container) => {
                if self.config.auto_play && self.container(container).is_some_and(|c| c.pause_on_hover) {
                    self.start_autoplay(container);
                }
            }
            InputEvent::TouchStart { container, x } => self.touch_start(container, x),
            InputEvent::TouchEnd { container, x } => self.touch_end(container, x),
            InputEvent::KeyDown(key) => self.key_down(&key),
            InputEvent::Resize(width) => self.resize(width),
        }
    }

    /// Left and right arrows move every container.
    fn key_down(&mut self, key: &Key) {
        if !self.keyboard.is_attached() {
            return;
        }
        for index in 0..self.containers.len() {
            match key {
                Key::ArrowLeft => self.previous(ContainerId(index)),
                Key::ArrowRight => self.next(ContainerId(index)),
                Key::Other(_) => {}
            }
        }
    }

    // --- Accessors ---

    fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn container_ids(&self) -> impl Iterator<Item = ContainerId> + use<D, S> {
        (0..self.containers.len()).map(ContainerId)
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn container_handle(&self, id: ContainerId) -> Option<ContainerHandle> {
        self.container(id).map(|c| c.handle)
    }

    pub fn slide_count(&self, id: ContainerId) -> Option<usize> {
        self.container(id).map(|c| c.slide_count)
    }

    pub fn current_slide(&self, id: ContainerId) -> Option<usize> {
        self.container(id).and_then(|c| c.current)
    }

    pub fn active_breakpoint(&self) -> Option<usize> {
        self.active_breakpoint
    }

    pub fn keyboard_attached(&self) -> bool {
        self.keyboard.is_attached()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

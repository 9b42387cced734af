use crate::carousel::ContainerId;
use crate::config::NumberFormat;
use crate::slide::SlideVisual;

/// Controls built for a container at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub arrows: bool,
    /// Number of dots, one per slide, when dots are enabled.
    pub dots: Option<usize>,
}

/// Where the carousel sends everything visible. Implementations draw; the carousel decides.
pub trait RenderSink {
    fn set_slide(&mut self, container: ContainerId, slide: usize, visual: &SlideVisual);
    fn create_controls(&mut self, container: ContainerId, controls: Controls);
    fn set_controls_visibility(&mut self, container: ContainerId, arrows: bool, dots: bool);
    fn set_active_dot(&mut self, container: ContainerId, index: usize);
    fn remove_controls(&mut self, container: ContainerId);

    /// Rewrite numeric labels of a slide. Called once per slide at setup when
    /// abbreviation is enabled.
    fn format_numbers(&mut self, _container: ContainerId, _slide: usize, _format: &NumberFormat) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn set_slide(&mut self, container: ContainerId, slide: usize, visual: &SlideVisual) {
        (**self).set_slide(container, slide, visual);
    }
    fn create_controls(&mut self, container: ContainerId, controls: Controls) {
        (**self).create_controls(container, controls);
    }
    fn set_controls_visibility(&mut self, container: ContainerId, arrows: bool, dots: bool) {
        (**self).set_controls_visibility(container, arrows, dots);
    }
    fn set_active_dot(&mut self, container: ContainerId, index: usize) {
        (**self).set_active_dot(container, index);
    }
    fn remove_controls(&mut self, container: ContainerId) {
        (**self).remove_controls(container);
    }
    fn format_numbers(&mut self, container: ContainerId, slide: usize, format: &NumberFormat) {
        (**self).format_numbers(container, slide, format);
    }
}

/// Sink that only traces what it is asked to draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn set_slide(&mut self, container: ContainerId, slide: usize, visual: &SlideVisual) {
        tracing::info!(
            container = container.0,
            slide,
            opacity = visual.opacity,
            visible = visual.visible,
            active = visual.active,
            transform = %visual.transform,
            animation = ?visual.animation,
            "slide"
        );
    }

    fn create_controls(&mut self, container: ContainerId, controls: Controls) {
        tracing::info!(container = container.0, arrows = controls.arrows, dots = ?controls.dots, "controls created");
    }

    fn set_controls_visibility(&mut self, container: ContainerId, arrows: bool, dots: bool) {
        tracing::info!(container = container.0, arrows, dots, "controls visibility");
    }

    fn set_active_dot(&mut self, container: ContainerId, index: usize) {
        tracing::debug!(container = container.0, index, "active dot");
    }

    fn remove_controls(&mut self, container: ContainerId) {
        tracing::info!(container = container.0, "controls removed");
    }
}

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Slide { container: ContainerId, slide: usize, visual: SlideVisual },
    CreateControls { container: ContainerId, controls: Controls },
    ControlsVisibility { container: ContainerId, arrows: bool, dots: bool },
    ActiveDot { container: ContainerId, index: usize },
    RemoveControls { container: ContainerId },
    FormatNumbers { container: ContainerId, slide: usize },
}

/// Sink that remembers every call, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub calls: Vec<RenderCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Latest visual sent for a slide.
    pub fn visual(&self, container: ContainerId, slide: usize) -> Option<&SlideVisual> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Slide { container: c, slide: s, visual } if *c == container && *s == slide => {
                Some(visual)
            }
            _ => None,
        })
    }

    /// Slides of `container` whose latest visual is active.
    pub fn active_slides(&self, container: ContainerId, slide_count: usize) -> Vec<usize> {
        (0..slide_count)
            .filter(|slide| self.visual(container, *slide).is_some_and(|v| v.active))
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn set_slide(&mut self, container: ContainerId, slide: usize, visual: &SlideVisual) {
        self.calls.push(RenderCall::Slide { container, slide, visual: *visual });
    }

    fn create_controls(&mut self, container: ContainerId, controls: Controls) {
        self.calls.push(RenderCall::CreateControls { container, controls });
    }

    fn set_controls_visibility(&mut self, container: ContainerId, arrows: bool, dots: bool) {
        self.calls.push(RenderCall::ControlsVisibility { container, arrows, dots });
    }

    fn set_active_dot(&mut self, container: ContainerId, index: usize) {
        self.calls.push(RenderCall::ActiveDot { container, index });
    }

    fn remove_controls(&mut self, container: ContainerId) {
        self.calls.push(RenderCall::RemoveControls { container });
    }

    fn format_numbers(&mut self, container: ContainerId, slide: usize, _format: &NumberFormat) {
        self.calls.push(RenderCall::FormatNumbers { container, slide });
    }
}

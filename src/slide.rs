use std::fmt;

use crate::effect::{Direction, Effect};

/// Geometric part of a slide's visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    None,
    /// Horizontal offset in percent of the container width.
    TranslateX(f32),
    Scale(f32),
    /// Rotation around the vertical axis, in degrees.
    RotateY(f32),
    /// Depth offset in pixels combined with a vertical-axis rotation in degrees.
    Cube { depth: f32, degrees: f32 },
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transform::None => write!(f, "none"),
            Transform::TranslateX(percent) => write!(f, "translateX({percent}%)"),
            Transform::Scale(factor) => write!(f, "scale({factor})"),
            Transform::RotateY(degrees) => write!(f, "rotateY({degrees}deg)"),
            Transform::Cube { depth, degrees } => {
                write!(f, "translateZ({depth}px) rotateY({degrees}deg)")
            }
        }
    }
}

/// Everything the render sink needs to draw one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    pub opacity: f32,
    pub visible: bool,
    pub transform: Transform,
    pub active: bool,
    /// Effect to animate the change with; `None` applies it instantly.
    pub animation: Option<Effect>,
}

impl SlideVisual {
    /// State of every slide right after its container is set up.
    pub const HIDDEN: SlideVisual = SlideVisual {
        opacity: 0.0,
        visible: false,
        transform: Transform::None,
        active: false,
        animation: None,
    };

    /// First display of a container: the slide simply appears.
    pub const SHOWN: SlideVisual = SlideVisual {
        opacity: 1.0,
        visible: true,
        transform: Transform::TranslateX(0.0),
        active: true,
        animation: None,
    };
}

/// Visual states of the outgoing and incoming slides for one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionVisuals {
    pub outgoing: SlideVisual,
    pub incoming: SlideVisual,
}

impl TransitionVisuals {
    pub fn new(effect: Effect, direction: Direction) -> Self {
        let sign = if effect.is_directional() { direction.sign() } else { 0.0 };

        // Where the outgoing slide ends up and where the incoming one settles
        let (leave, enter) = match effect {
            Effect::Fade => (Transform::None, Transform::None),
            Effect::Scale => (Transform::Scale(0.8), Transform::Scale(1.0)),
            Effect::Rotate => (Transform::RotateY(90.0 * sign), Transform::RotateY(0.0)),
            Effect::Cube => (
                Transform::Cube { depth: -200.0, degrees: 90.0 * sign },
                Transform::Cube { depth: 0.0, degrees: 0.0 },
            ),
            Effect::Slide => (Transform::TranslateX(100.0 * sign), Transform::TranslateX(0.0)),
        };

        Self {
            outgoing: SlideVisual {
                opacity: 0.0,
                visible: false,
                transform: leave,
                active: false,
                animation: Some(effect),
            },
            incoming: SlideVisual {
                opacity: 1.0,
                visible: true,
                transform: enter,
                active: true,
                animation: Some(effect),
            },
        }
    }
}

use crate::carousel::ContainerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Map a DOM-style key name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Prev,
    Next,
}

/// Everything the environment can tell the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Arrow { container: ContainerId, side: ArrowSide },
    Dot { container: ContainerId, index: usize },
    PointerEnter(ContainerId),
    PointerLeave(ContainerId),
    TouchStart { container: ContainerId, x: f32 },
    TouchEnd { container: ContainerId, x: f32 },
    KeyDown(Key),
    Resize(u32),
}

/// Instance-wide keyboard listener. Attached on init, detached on destroy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardRouter {
    attached: bool,
}

impl KeyboardRouter {
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

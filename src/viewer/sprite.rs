use raylib::prelude::*;

use carousel::constants::TRANSITION_DURATION;
use carousel::{SlideVisual, Transform};

const ANIMATION_DURATION: f32 = TRANSITION_DURATION as f32 / 1000.0; // seconds

/// 2D approximation of a slide's visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pose {
    opacity: f32,
    offset: f32,  // Horizontal offset, in strip widths
    scale: f32,
    squash: f32,  // Horizontal squash standing in for a rotation around Y
}

impl Pose {
    fn from_visual(visual: &SlideVisual) -> Self {
        let (offset, scale, squash) = match visual.transform {
            Transform::None => (0.0, 1.0, 1.0),
            Transform::TranslateX(percent) => (percent / 100.0, 1.0, 1.0),
            Transform::Scale(factor) => (0.0, factor, 1.0),
            Transform::RotateY(degrees) => (0.0, 1.0, degrees.to_radians().cos().abs()),
            Transform::Cube { depth, degrees } => {
                (0.0, 1.0 + depth / 1000.0, degrees.to_radians().cos().abs())
            }
        };
        Self { opacity: visual.opacity, offset, scale, squash }
    }
}

/// One slide as the viewer draws it, tweened towards the last visual it was sent.
pub struct Sprite {
    pose: Pose,
    active: bool,
    is_animating: bool,
    animation_timer: f32,

    tween_opacity: Option<ease::Tween>,
    tween_offset: Option<ease::Tween>,
    tween_scale: Option<ease::Tween>,
    tween_squash: Option<ease::Tween>,
    target: Pose,
}

impl Sprite {
    pub fn new(visual: &SlideVisual) -> Self {
        let pose = Pose::from_visual(visual);
        Self {
            pose,
            active: visual.active,
            is_animating: false,
            animation_timer: 0.0,
            tween_opacity: None,
            tween_offset: None,
            tween_scale: None,
            tween_squash: None,
            target: pose,
        }
    }

    /// Head towards `visual`, animated unless it asks to be applied instantly.
    pub fn retarget(&mut self, visual: &SlideVisual) {
        let target = Pose::from_visual(visual);
        self.active = visual.active;
        self.target = target;

        if visual.animation.is_none() {
            self.pose = target;
            self.is_animating = false;
            return;
        }

        let from = self.pose;
        self.tween_opacity = Some(ease::Tween::new(ease::cubic_out, from.opacity, target.opacity, ANIMATION_DURATION));
        self.tween_offset  = Some(ease::Tween::new(ease::cubic_out, from.offset,  target.offset,  ANIMATION_DURATION));
        self.tween_scale   = Some(ease::Tween::new(ease::cubic_out, from.scale,   target.scale,   ANIMATION_DURATION));
        self.tween_squash  = Some(ease::Tween::new(ease::cubic_out, from.squash,  target.squash,  ANIMATION_DURATION));
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    /// The slide the carousel currently shows; drawn above the others.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }

        if let Some(tween) = self.tween_opacity.as_mut() { self.pose.opacity = tween.apply(dt); }
        if let Some(tween) = self.tween_offset.as_mut()  { self.pose.offset  = tween.apply(dt); }
        if let Some(tween) = self.tween_scale.as_mut()   { self.pose.scale   = tween.apply(dt); }
        if let Some(tween) = self.tween_squash.as_mut()  { self.pose.squash  = tween.apply(dt); }

        self.animation_timer += dt;
        if self.animation_timer >= ANIMATION_DURATION {
            self.is_animating = false;
            self.pose = self.target;
        }
    }

    /// Draw `texture` inside `strip`, fitted to 90% of it.
    pub fn draw(&self, d: &mut RaylibDrawHandle, texture: &Texture2D, strip: Rectangle) {
        if self.pose.opacity <= 0.0 {
            return;
        }

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        // Scale too big images to fit the strip
        let fit = (strip.width * 0.9 / tex_width).min(strip.height * 0.9 / tex_height).min(1.0);
        let scaled_width = tex_width * fit * self.pose.scale * self.pose.squash;
        let scaled_height = tex_height * fit * self.pose.scale;

        let center = Vector2::new(
            strip.x + strip.width * (0.5 + self.pose.offset),
            strip.y + strip.height * 0.5,
        );
        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
        let alpha = (self.pose.opacity.clamp(0.0, 1.0) * 255.0) as u8;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, scaled_width, scaled_height),
            origin,
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}

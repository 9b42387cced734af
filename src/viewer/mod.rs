//! Window front-end: every image directory is a horizontal strip, stacked top to bottom.

mod sprite;
mod texture_loader;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use raylib::prelude::*;
use serde_json::Value;

use carousel::document::DirectoryDocument;
use carousel::render::{Controls, RenderSink};
use carousel::{ArrowSide, Carousel, ContainerHandle, ContainerId, Hooks, InputEvent, Key, SlideVisual};

use self::sprite::Sprite;
use self::texture_loader::load_texture_with_exif_rotation;

const FPS: u32 = 60;
const WINDOW_HEIGHT: i32 = 720;
const ARROW_SIZE: f32 = 40.0;
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 20.0;

struct ControlsView {
    controls: Controls,
    arrows_visible: bool,
    dots_visible: bool,
    active_dot: usize,
}

/// Keeps what the carousel asked for and tweens towards it every frame.
#[derive(Default)]
pub struct ViewerSink {
    sprites: HashMap<(ContainerId, usize), Sprite>,
    controls: HashMap<ContainerId, ControlsView>,
}

impl ViewerSink {
    fn update(&mut self, dt: f32) {
        for sprite in self.sprites.values_mut() {
            sprite.update(dt);
        }
    }
}

impl RenderSink for ViewerSink {
    fn set_slide(&mut self, container: ContainerId, slide: usize, visual: &SlideVisual) {
        self.sprites
            .entry((container, slide))
            .and_modify(|sprite| sprite.retarget(visual))
            .or_insert_with(|| Sprite::new(visual));
    }

    fn create_controls(&mut self, container: ContainerId, controls: Controls) {
        self.controls.insert(
            container,
            ControlsView { controls, arrows_visible: controls.arrows, dots_visible: controls.dots.is_some(), active_dot: 0 },
        );
    }

    fn set_controls_visibility(&mut self, container: ContainerId, arrows: bool, dots: bool) {
        if let Some(view) = self.controls.get_mut(&container) {
            view.arrows_visible = arrows;
            view.dots_visible = dots;
        }
    }

    fn set_active_dot(&mut self, container: ContainerId, index: usize) {
        if let Some(view) = self.controls.get_mut(&container) {
            view.active_dot = index;
        }
    }

    fn remove_controls(&mut self, container: ContainerId) {
        self.controls.remove(&container);
    }
}

// --- Layout helpers ---

fn strip_rect(index: usize, count: usize, width: f32, height: f32) -> Rectangle {
    let strip_height = height / count.max(1) as f32;
    Rectangle::new(0.0, strip_height * index as f32, width, strip_height)
}

fn arrow_rect(strip: Rectangle, side: ArrowSide) -> Rectangle {
    let y = strip.y + (strip.height - ARROW_SIZE) * 0.5;
    match side {
        ArrowSide::Prev => Rectangle::new(strip.x + 10.0, y, ARROW_SIZE, ARROW_SIZE),
        ArrowSide::Next => Rectangle::new(strip.x + strip.width - ARROW_SIZE - 10.0, y, ARROW_SIZE, ARROW_SIZE),
    }
}

fn dot_center(strip: Rectangle, index: usize, count: usize) -> Vector2 {
    let row_width = DOT_SPACING * count.saturating_sub(1) as f32;
    Vector2::new(
        strip.x + (strip.width - row_width) * 0.5 + DOT_SPACING * index as f32,
        strip.y + strip.height - 20.0,
    )
}

/// The control under `point`, if it is visible.
fn control_at(view: &ControlsView, container: ContainerId, strip: Rectangle, point: Vector2) -> Option<InputEvent> {
    if view.arrows_visible && view.controls.arrows {
        for side in [ArrowSide::Prev, ArrowSide::Next] {
            if arrow_rect(strip, side).check_collision_point_rec(point) {
                return Some(InputEvent::Arrow { container, side });
            }
        }
    }
    if view.dots_visible {
        if let Some(count) = view.controls.dots {
            for index in 0..count {
                let center = dot_center(strip, index, count);
                if (center - point).length() <= DOT_RADIUS * 1.5 {
                    return Some(InputEvent::Dot { container, index });
                }
            }
        }
    }
    None
}

pub fn run(options: Value, dirs: &[PathBuf], width: u32) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(width as i32, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let document = DirectoryDocument::scan(dirs, width);
    let textures: Vec<Vec<Option<Texture2D>>> = (0..dirs.len())
        .map(|dir| {
            document
                .images(ContainerHandle(dir as u32))
                .iter()
                .map(|path| match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        tracing::error!("{e:#}");
                        None
                    }
                })
                .collect()
        })
        .collect();

    let mut carousel = Carousel::from_options(options, document, ViewerSink::default(), Hooks::new())
        .context("Invalid carousel options")?;

    // --- Viewer State ---
    let mut screen_width = rl.get_screen_width();
    let mut hovered: Option<ContainerId> = None;
    let mut pressed: Option<ContainerId> = None;
    let mut carry = 0.0_f32;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // Keep the sub-millisecond remainder so the clock doesn't drift
        carry += dt * 1000.0;
        let elapsed = carry.floor();
        carry -= elapsed;

        let sw = rl.get_screen_width() as f32;
        let sh = rl.get_screen_height() as f32;
        let count = carousel.container_count();
        let mouse = rl.get_mouse_position();
        let under_mouse = carousel
            .container_ids()
            .find(|id| strip_rect(id.0, count, sw, sh).check_collision_point_rec(mouse));

        // 1. Forward input to the carousel
        if rl.get_screen_width() != screen_width {
            screen_width = rl.get_screen_width();
            carousel.document_mut().set_width(screen_width as u32);
            carousel.dispatch(InputEvent::Resize(screen_width as u32));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.dispatch(InputEvent::KeyDown(Key::ArrowLeft));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.dispatch(InputEvent::KeyDown(Key::ArrowRight));
        }
        if under_mouse != hovered {
            if let Some(id) = hovered {
                carousel.dispatch(InputEvent::PointerLeave(id));
            }
            if let Some(id) = under_mouse {
                carousel.dispatch(InputEvent::PointerEnter(id));
            }
            hovered = under_mouse;
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(id) = under_mouse {
                let strip = strip_rect(id.0, count, sw, sh);
                let clicked = carousel
                    .sink()
                    .controls
                    .get(&id)
                    .and_then(|view| control_at(view, id, strip, mouse));
                match clicked {
                    Some(event) => carousel.dispatch(event),
                    None => {
                        // Dragging with the mouse stands in for a swipe
                        carousel.dispatch(InputEvent::TouchStart { container: id, x: mouse.x });
                        pressed = Some(id);
                    }
                }
            }
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(id) = pressed.take() {
                carousel.dispatch(InputEvent::TouchEnd { container: id, x: mouse.x });
            }
        }

        // 2. Update timers and slide animations
        carousel.advance(elapsed as u64);
        carousel.sink_mut().update(dt);

        // 3. Draw
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        for id in carousel.container_ids() {
            let strip = strip_rect(id.0, count, sw, sh);
            let Some(handle) = carousel.container_handle(id) else { continue };
            let slide_count = carousel.slide_count(id).unwrap_or(0);
            let sink = carousel.sink();

            // Outgoing slides first, so the active one ends up on top
            let mut layers: Vec<_> = (0..slide_count)
                .filter_map(|slide| {
                    let sprite = sink.sprites.get(&(id, slide))?;
                    let texture = textures.get(handle.0 as usize)?.get(slide)?.as_ref()?;
                    Some((sprite, texture))
                })
                .collect();
            layers.sort_by_key(|(sprite, _)| sprite.is_active());
            for (sprite, texture) in layers {
                sprite.draw(&mut d, texture, strip);
            }

            if let Some(view) = sink.controls.get(&id) {
                if view.arrows_visible && view.controls.arrows {
                    let prev = arrow_rect(strip, ArrowSide::Prev);
                    let next = arrow_rect(strip, ArrowSide::Next);
                    d.draw_text("<", prev.x as i32 + 12, prev.y as i32 + 4, 32, Color::WHITE);
                    d.draw_text(">", next.x as i32 + 12, next.y as i32 + 4, 32, Color::WHITE);
                }
                if view.dots_visible {
                    if let Some(dots) = view.controls.dots {
                        for index in 0..dots {
                            let color = if index == view.active_dot { Color::WHITE } else { Color::GRAY };
                            d.draw_circle_v(dot_center(strip, index, dots), DOT_RADIUS, color);
                        }
                    }
                }
            }
        }
    }

    carousel.destroy();
    Ok(())
}

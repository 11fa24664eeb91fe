use std::path::Path;

use anyhow::{Result, anyhow};
use log::{info, warn};
use raylib::prelude::*;

use crate::constants::*;
use crate::story;

/// A font at a fixed size, with raylib's built-in font as the fallback when
/// the preferred TTF is missing or fails to load.
pub struct FontSlot {
    custom: Option<Font>,
    fallback: WeakFont,
    size: f32,
}

const FONT_SPACING: f32 = 1.0;

impl FontSlot {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path, file: &str, size: f32) -> FontSlot {
        let fallback = rl.get_font_default();
        let path = dir.join(file);
        let custom = match path.to_str() {
            Some(p) if path.is_file() => match rl.load_font_ex(thread, p, size as i32, None) {
                Ok(font) => Some(font),
                Err(e) => {
                    warn!("failed to load font {}: {}; using built-in font", path.display(), e);
                    None
                }
            },
            _ => {
                info!("font {} not found; using built-in font", path.display());
                None
            }
        };
        FontSlot { custom, fallback, size }
    }

    pub fn measure(&self, text: &str) -> Vector2 {
        match &self.custom {
            Some(font) => font.measure_text(text, self.size, FONT_SPACING),
            None => self.fallback.measure_text(text, self.size, FONT_SPACING),
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, text: &str, pos: Vector2, color: Color) {
        match &self.custom {
            Some(font) => d.draw_text_ex(font, text, pos, self.size, FONT_SPACING, color),
            None => d.draw_text_ex(&self.fallback, text, pos, self.size, FONT_SPACING, color),
        }
    }

    /// Draws the text horizontally centered on the display.
    pub fn draw_centered(&self, d: &mut RaylibDrawHandle, text: &str, y: f32, color: Color) {
        let size = self.measure(text);
        self.draw(d, text, Vector2::new((WIDTH as f32 - size.x) / 2.0, y), color);
    }
}

/// Backgrounds and fonts for the whole presentation. Missing images are
/// replaced by a generated solid-color texture; missing fonts fall back to
/// the built-in font. Neither is an error for the caller.
pub struct Assets {
    backgrounds: Vec<Texture2D>,
    pub title_font: FontSlot,
    pub heading_font: FontSlot,
    pub body_font: FontSlot,
}

impl Assets {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Assets> {
        let mut backgrounds = Vec::with_capacity(story::background_count());
        for i in 1..=story::background_count() {
            let path = dir.join(format!("background{i}.png"));
            let texture = match path.to_str() {
                Some(p) if path.is_file() => match rl.load_texture(thread, p) {
                    Ok(t) => t,
                    Err(e) => {
                        warn!("failed to load {}: {}; using placeholder", path.display(), e);
                        placeholder(rl, thread)?
                    }
                },
                _ => {
                    warn!("{} not found; using placeholder", path.display());
                    placeholder(rl, thread)?
                }
            };
            backgrounds.push(texture);
        }

        Ok(Assets {
            backgrounds,
            title_font: FontSlot::load(rl, thread, dir, DISPLAY_FONT_FILE, TITLE_FONT_SIZE),
            heading_font: FontSlot::load(rl, thread, dir, DISPLAY_FONT_FILE, HEADING_FONT_SIZE),
            body_font: FontSlot::load(rl, thread, dir, BODY_FONT_FILE, BODY_FONT_SIZE),
        })
    }

    /// Shared background used by the menu and end screens.
    pub fn menu_background(&self) -> &Texture2D {
        &self.backgrounds[0]
    }

    /// Background for a story page: page index + 1, clamped to the last
    /// available image when fewer images than pages exist.
    pub fn story_background(&self, page: usize) -> &Texture2D {
        let index = (page + 1).min(self.backgrounds.len() - 1);
        &self.backgrounds[index]
    }
}

/// Solid-color stand-in for a missing or undecodable background.
fn placeholder(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Texture2D> {
    let image = Image::gen_image_color(WIDTH, HEIGHT, PLACEHOLDER_COLOR);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create placeholder texture: {e}"))
}

/// Scales a texture of any size onto the full 800x600 display.
pub fn draw_fullscreen(d: &mut RaylibDrawHandle, texture: &Texture2D) {
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        Rectangle::new(0.0, 0.0, WIDTH as f32, HEIGHT as f32),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

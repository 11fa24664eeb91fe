use raylib::prelude::*;

pub const WIDTH: i32 = 800;                   // Display width in pixels
pub const HEIGHT: i32 = 600;                  // Display height in pixels
pub const FPS: u32 = 120;                     // Target frame rate for the main loop

// Animation timings are wall-clock based so a slow frame cannot stall
// a transition (progress advances by dt, not by a per-tick increment).
pub const PAGE_TURN_DURATION: f32 = 0.25;     // Page curl sweep (seconds)
pub const FADE_DURATION: f32 = 0.5;           // Menu -> Story masking fade (seconds)
pub const TEXT_SLIDE_SPEED: f32 = 600.0;      // Text panel rise (px/second)
pub const TEXT_FADE_SPEED: f32 = 600.0;       // Text panel opacity ramp (alpha/second)
pub const TEXT_REST_Y: f32 = (HEIGHT / 4) as f32; // Text panel resting center

pub const INTERLUDE_SECONDS_PER_IMAGE: f32 = 2.0; // Slideshow frame hold
pub const INTERLUDE_END_HOLD: f32 = 1.0;          // Pause on the last frame

// Text panel layout
pub const TEXT_MAX_WIDTH: f32 = (WIDTH - 100) as f32;
pub const PANEL_WIDTH: i32 = WIDTH - 80;
pub const PANEL_PADDING: i32 = 10;
pub const LINE_HEIGHT: i32 = 35;

// Font sizes and preferred font files (looked up in the asset directory)
pub const TITLE_FONT_SIZE: f32 = 64.0;
pub const HEADING_FONT_SIZE: f32 = 48.0;
pub const BODY_FONT_SIZE: f32 = 28.0;
pub const DISPLAY_FONT_FILE: &str = "algerian.ttf";
pub const BODY_FONT_FILE: &str = "times.ttf";

// Audio files (looked up in the asset directory, both optional)
pub const MUSIC_FILE: &str = "background_music.mp3";
pub const PAGE_TURN_SOUND_FILE: &str = "page_turn.wav";

// Palette
pub const CREAM: Color = Color::new(255, 253, 208, 255);
pub const PLACEHOLDER_COLOR: Color = Color::new(200, 220, 255, 255); // Light blue stand-in background
pub const PAGE_COLOR: Color = Color::new(200, 200, 200, 255);        // Revealed page curl columns
pub const SHADOW_COLOR: Color = Color::new(100, 100, 100, 255);      // Curl shadow band
pub const SHADOW_HEIGHT: i32 = 5;
pub const MENU_OVERLAY: Color = Color::new(255, 255, 255, 128);      // 50% white wash over menu/end
pub const PANEL_ALPHA: f32 = 200.0;                                  // Max text panel background alpha

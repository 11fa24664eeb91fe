use crate::constants::*;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    Menu,      // Title screen with start/quit buttons
    Story,     // Page display and page-turn transitions
    End,       // Closing screen with the slideshow button
    Interlude, // End-of-story image slideshow
}

/// Mutable presentation state, owned by the controller for the lifetime of
/// the process. Text animation fields are reset whenever a new page begins.
pub struct PresentationState {
    pub mode: Mode,
    pub current_page: usize,
    /// Vertical center of the text panel, easing up toward TEXT_REST_Y.
    pub text_position: f32,
    /// Text panel opacity, ramping from 0 to 255.
    pub text_alpha: f32,
}

impl PresentationState {
    pub fn new() -> PresentationState {
        PresentationState {
            mode: Mode::Menu,
            current_page: 0,
            text_position: HEIGHT as f32,
            text_alpha: 0.0,
        }
    }

    /// Puts the text panel back below the screen, fully transparent.
    pub fn reset_text(&mut self) {
        self.text_position = HEIGHT as f32;
        self.text_alpha = 0.0;
    }
}

use log::warn;
use raylib::prelude::*;

use crate::assets::{Assets, draw_fullscreen};
use crate::button::Button;
use crate::constants::*;
use crate::interlude::SequencePlayer;
use crate::state::{Mode, PresentationState};
use crate::story;
use crate::text_layout::wrap_text;
use crate::transition::{Fade, PageTurn};

/// Side effects the controller asks the outer loop to perform. Everything
/// that needs the window, the audio device, or the filesystem stays out of
/// the state machine so it remains testable.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// User clicked the quit button; leave the main loop.
    Quit,
    /// A page turn just started; play the page-turn sound.
    PageTurnStarted,
    /// The end-screen slideshow button was clicked; load its frames and
    /// hand them to `begin_interlude`.
    InterludeRequested,
}

/// The presentation state machine. Polled once per frame: `handle_click`
/// and `handle_escape` for input, `update` for time, `draw` for output.
pub struct Controller {
    pages: &'static [&'static str],
    state: PresentationState,
    page_turn: Option<PageTurn>,
    fade: Option<Fade>,
    interlude_frames: Vec<Texture2D>,
    sequence: Option<SequencePlayer>,
    start_button: Button,
    quit_button: Button,
    video_button: Button,
}

impl Controller {
    pub fn new() -> Controller {
        Controller::with_pages(story::PAGES)
    }

    fn with_pages(pages: &'static [&'static str]) -> Controller {
        Controller {
            pages,
            state: PresentationState::new(),
            page_turn: None,
            fade: None,
            interlude_frames: Vec::new(),
            sequence: None,
            start_button: Button::new(300, 350, 200, 50, "Start Story", Color::GREEN, Color::BLACK),
            quit_button: Button::new(300, 450, 200, 50, "Quit", Color::RED, Color::BLACK),
            video_button: Button::new(
                WIDTH / 2 - 100,
                HEIGHT / 2 + 50,
                200,
                50,
                "Play Slideshow",
                Color::GREEN,
                Color::BLACK,
            ),
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn is_transitioning(&self) -> bool {
        self.page_turn.is_some()
    }

    pub fn handle_click(&mut self, pos: Vector2) -> Option<Action> {
        match self.state.mode {
            Mode::Menu => {
                if self.start_button.hit_test(pos) {
                    self.state.mode = Mode::Story;
                    self.state.current_page = 0;
                    self.state.reset_text();
                    self.fade = Some(Fade::new());
                    None
                } else if self.quit_button.hit_test(pos) {
                    Some(Action::Quit)
                } else {
                    None
                }
            }
            Mode::Story => {
                if self.page_turn.is_some() {
                    // Mid-transition clicks must not double-advance.
                    None
                } else if self.state.current_page + 1 < self.pages.len() {
                    self.page_turn = Some(PageTurn::new());
                    Some(Action::PageTurnStarted)
                } else {
                    // Terminal page: straight to the end screen, no curl.
                    self.state.mode = Mode::End;
                    None
                }
            }
            Mode::End => {
                // Only the slideshow button does anything here; a stray
                // click on the end screen is not a quit.
                if self.video_button.hit_test(pos) {
                    Some(Action::InterludeRequested)
                } else {
                    None
                }
            }
            Mode::Interlude => None,
        }
    }

    /// Escape cancels the interlude; it has no effect elsewhere.
    pub fn handle_escape(&mut self) {
        if self.state.mode == Mode::Interlude {
            self.finish_interlude();
        }
    }

    /// Installs the slideshow frames and enters the interlude. An empty
    /// frame set skips playback and stays on the end screen.
    pub fn begin_interlude(&mut self, frames: Vec<Texture2D>) {
        if frames.is_empty() {
            warn!("no slideshow images found; skipping interlude");
            return;
        }
        self.sequence = Some(SequencePlayer::new(frames.len()));
        self.interlude_frames = frames;
        self.state.mode = Mode::Interlude;
    }

    fn finish_interlude(&mut self) {
        self.sequence = None;
        self.interlude_frames.clear();
        self.state.mode = Mode::End;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(fade) = &mut self.fade {
            if fade.advance(dt) {
                self.fade = None;
            }
        }

        match self.state.mode {
            Mode::Story => {
                if let Some(turn) = &mut self.page_turn {
                    if turn.advance(dt) {
                        self.page_turn = None;
                        self.state.current_page += 1;
                        self.state.reset_text();
                    }
                } else {
                    // Text panel rises to its rest position while its
                    // opacity ramps in; both clamp at the target.
                    self.state.text_position =
                        (self.state.text_position - TEXT_SLIDE_SPEED * dt).max(TEXT_REST_Y);
                    self.state.text_alpha =
                        (self.state.text_alpha + TEXT_FADE_SPEED * dt).min(255.0);
                }
            }
            Mode::Interlude => {
                if let Some(sequence) = &mut self.sequence {
                    sequence.advance(dt);
                    if sequence.is_done() {
                        self.finish_interlude();
                    }
                }
            }
            Mode::Menu | Mode::End => {}
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        match self.state.mode {
            Mode::Menu => self.draw_menu(d, assets),
            Mode::Story => self.draw_story(d, assets),
            Mode::End => self.draw_end(d, assets),
            Mode::Interlude => self.draw_interlude(d),
        }

        if let Some(fade) = &self.fade {
            fade.draw(d);
        }
    }

    fn draw_menu(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        draw_fullscreen(d, assets.menu_background());
        d.draw_rectangle(0, 0, WIDTH, HEIGHT, MENU_OVERLAY);
        assets.title_font.draw_centered(d, story::TITLE, 100.0, Color::BLACK);
        assets.heading_font.draw_centered(d, story::HEADING, 200.0, Color::BLACK);
        self.start_button.draw(d, &assets.body_font);
        self.quit_button.draw(d, &assets.body_font);
    }

    fn draw_story(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        draw_fullscreen(d, assets.story_background(self.state.current_page));

        if let Some(turn) = &self.page_turn {
            turn.draw(d);
            return;
        }

        let font = &assets.body_font;
        let text = self.pages[self.state.current_page];
        let lines = wrap_text(text, TEXT_MAX_WIDTH, |s| font.measure(s).x);

        let alpha = self.state.text_alpha as u8;
        let panel_height = lines.len() as i32 * LINE_HEIGHT + 2 * PANEL_PADDING;
        let panel_x = (WIDTH - PANEL_WIDTH) / 2;
        let panel_y = self.state.text_position as i32 - panel_height / 2;

        // Panel background opacity tracks the text fade, capped at the
        // translucent cream maximum.
        let panel_alpha = (PANEL_ALPHA * self.state.text_alpha / 255.0) as u8;
        d.draw_rectangle(
            panel_x,
            panel_y,
            PANEL_WIDTH,
            panel_height,
            Color::new(CREAM.r, CREAM.g, CREAM.b, panel_alpha),
        );

        for (i, line) in lines.iter().enumerate() {
            let pos = Vector2::new(
                (panel_x + PANEL_PADDING) as f32,
                (panel_y + PANEL_PADDING + i as i32 * LINE_HEIGHT) as f32,
            );
            font.draw(d, line, pos, Color::new(0, 0, 0, alpha));
        }
    }

    fn draw_end(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        draw_fullscreen(d, assets.menu_background());
        d.draw_rectangle(0, 0, WIDTH, HEIGHT, MENU_OVERLAY);
        let y = (HEIGHT as f32 - assets.title_font.measure("The End").y) / 2.0;
        assets.title_font.draw_centered(d, "The End", y, Color::BLACK);
        self.video_button.draw(d, &assets.body_font);
    }

    fn draw_interlude(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);
        if let Some(sequence) = &self.sequence {
            if let Some(frame) = self.interlude_frames.get(sequence.current()) {
                draw_fullscreen(d, frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / FPS as f32;

    const THREE_PAGES: &[&str] = &["A", "B", "C"];

    fn controller() -> Controller {
        Controller::with_pages(THREE_PAGES)
    }

    fn start_click() -> Vector2 {
        Vector2::new(400.0, 375.0) // Inside the start button
    }

    fn quit_click() -> Vector2 {
        Vector2::new(400.0, 475.0) // Inside the quit button
    }

    fn anywhere() -> Vector2 {
        Vector2::new(10.0, 10.0) // Outside every button
    }

    fn video_click() -> Vector2 {
        Vector2::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0 + 75.0)
    }

    fn run_until_idle(c: &mut Controller) {
        for _ in 0..1000 {
            c.update(STEP);
            if !c.is_transitioning() {
                return;
            }
        }
        panic!("transition never completed");
    }

    #[test]
    fn starts_in_menu_on_page_zero() {
        let c = controller();
        assert_eq!(c.mode(), Mode::Menu);
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn menu_start_click_enters_story_at_page_zero() {
        let mut c = controller();
        assert_eq!(c.handle_click(start_click()), None);
        assert_eq!(c.mode(), Mode::Story);
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn menu_quit_click_requests_quit() {
        let mut c = controller();
        assert_eq!(c.handle_click(quit_click()), Some(Action::Quit));
    }

    #[test]
    fn menu_click_outside_buttons_changes_nothing() {
        let mut c = controller();
        assert_eq!(c.handle_click(anywhere()), None);
        assert_eq!(c.mode(), Mode::Menu);
    }

    #[test]
    fn story_click_starts_exactly_one_transition() {
        let mut c = controller();
        c.handle_click(start_click());
        assert_eq!(c.handle_click(anywhere()), Some(Action::PageTurnStarted));
        assert!(c.is_transitioning());
        // A second click mid-transition has no effect.
        assert_eq!(c.handle_click(anywhere()), None);
        run_until_idle(&mut c);
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn three_clicks_visit_all_pages_then_end() {
        let mut c = controller();
        c.handle_click(start_click());

        let mut visited = vec![c.current_page()];
        for _ in 0..2 {
            assert_eq!(c.handle_click(anywhere()), Some(Action::PageTurnStarted));
            run_until_idle(&mut c);
            visited.push(c.current_page());
        }
        assert_eq!(visited, vec![0, 1, 2]);

        // Third click lands on the terminal page: no curl, straight to End.
        assert_eq!(c.handle_click(anywhere()), None);
        assert!(!c.is_transitioning());
        assert_eq!(c.mode(), Mode::End);
    }

    #[test]
    fn text_animation_resets_on_each_new_page() {
        let mut c = controller();
        c.handle_click(start_click());
        // Let the text settle on page 0.
        for _ in 0..500 {
            c.update(STEP);
        }
        assert_eq!(c.state.text_position, TEXT_REST_Y);
        assert_eq!(c.state.text_alpha, 255.0);

        c.handle_click(anywhere());
        run_until_idle(&mut c);
        assert_eq!(c.current_page(), 1);
        assert!(c.state.text_position > TEXT_REST_Y);
        assert!(c.state.text_alpha < 255.0);
    }

    #[test]
    fn text_animation_clamps_at_rest() {
        let mut c = controller();
        c.handle_click(start_click());
        for _ in 0..10_000 {
            c.update(STEP);
        }
        assert_eq!(c.state.text_position, TEXT_REST_Y);
        assert_eq!(c.state.text_alpha, 255.0);
    }

    #[test]
    fn end_click_outside_button_does_nothing() {
        let mut c = controller();
        c.handle_click(start_click());
        for _ in 0..2 {
            c.handle_click(anywhere());
            run_until_idle(&mut c);
        }
        c.handle_click(anywhere());
        assert_eq!(c.mode(), Mode::End);
        assert_eq!(c.handle_click(anywhere()), None);
        assert_eq!(c.mode(), Mode::End);
    }

    #[test]
    fn end_video_button_requests_interlude() {
        let mut c = controller();
        c.state.mode = Mode::End;
        assert_eq!(c.handle_click(video_click()), Some(Action::InterludeRequested));
        // Mode only changes once frames are actually provided.
        assert_eq!(c.mode(), Mode::End);
    }

    #[test]
    fn empty_interlude_frames_stay_on_end_screen() {
        let mut c = controller();
        c.state.mode = Mode::End;
        c.begin_interlude(Vec::new());
        assert_eq!(c.mode(), Mode::End);
    }

    #[test]
    fn escape_during_interlude_returns_to_end() {
        let mut c = controller();
        c.state.mode = Mode::Interlude;
        c.sequence = Some(SequencePlayer::new(1));
        c.handle_escape();
        assert_eq!(c.mode(), Mode::End);
        assert!(c.sequence.is_none());
        assert!(c.interlude_frames.is_empty());
    }

    #[test]
    fn finished_interlude_sequence_returns_to_end() {
        let mut c = controller();
        c.state.mode = Mode::Interlude;
        c.sequence = Some(SequencePlayer::new(1));

        let total = INTERLUDE_SECONDS_PER_IMAGE + INTERLUDE_END_HOLD;
        let steps = (total / STEP) as usize + 10;
        for _ in 0..steps {
            c.update(STEP);
        }
        assert_eq!(c.mode(), Mode::End);
        assert!(c.sequence.is_none());
    }

    #[test]
    fn escape_outside_interlude_is_ignored() {
        let mut c = controller();
        c.handle_escape();
        assert_eq!(c.mode(), Mode::Menu);
        c.handle_click(start_click());
        c.handle_escape();
        assert_eq!(c.mode(), Mode::Story);
    }
}

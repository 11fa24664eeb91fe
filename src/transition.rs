use raylib::prelude::*;

use crate::constants::*;

/// Ease-out cubic used for the page curl silhouette.
/// Monotonically increasing with curl_curve(0) = 0 and curl_curve(1) = 1.
pub fn curl_curve(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Height of the revealed column at horizontal position `x` for a given
/// normalized progress. Pure; the draw routine maps this over every column.
pub fn revealed_height(x: i32, progress: f32) -> f32 {
    HEIGHT as f32 * curl_curve(x as f32 / WIDTH as f32) * progress
}

/// Page-turn sweep. Progress runs 0..1 over PAGE_TURN_DURATION of wall
/// clock time; once complete it stays complete.
pub struct PageTurn {
    progress: f32,
    complete: bool,
}

impl PageTurn {
    pub fn new() -> PageTurn {
        PageTurn { progress: 0.0, complete: false }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advances the sweep. Returns true exactly once, on the tick where
    /// progress reaches 1.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.complete {
            return false;
        }
        self.progress += dt / PAGE_TURN_DURATION;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.complete = true;
            return true;
        }
        false
    }

    /// Draws the curl: per column, a revealed bar rising from the bottom
    /// edge plus a fixed-height shadow band above its top.
    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for x in 0..WIDTH {
            let bar = revealed_height(x, self.progress) as i32;
            d.draw_line(x, HEIGHT, x, HEIGHT - bar, PAGE_COLOR);
            d.draw_line(x, HEIGHT - bar, x, HEIGHT - bar - SHADOW_HEIGHT, SHADOW_COLOR);
        }
    }
}

/// Full-screen black overlay fading from opaque to clear, used to mask the
/// menu -> story switch. Bounded by FADE_DURATION regardless of frame jitter.
pub struct Fade {
    elapsed: f32,
    complete: bool,
}

impl Fade {
    pub fn new() -> Fade {
        Fade { elapsed: 0.0, complete: false }
    }

    /// Advances the fade. Returns true exactly once, on the tick where the
    /// duration runs out; same contract as `PageTurn::advance`.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.complete {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= FADE_DURATION {
            self.complete = true;
            return true;
        }
        false
    }

    /// Overlay opacity, 255 at the start and 0 once the fade has run out.
    pub fn alpha(&self) -> u8 {
        let remaining = (1.0 - self.elapsed / FADE_DURATION).clamp(0.0, 1.0);
        (remaining * 255.0) as u8
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle(0, 0, WIDTH, HEIGHT, Color::new(0, 0, 0, self.alpha()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_endpoints() {
        assert_eq!(curl_curve(0.0), 0.0);
        assert_eq!(curl_curve(1.0), 1.0);
    }

    #[test]
    fn curve_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = curl_curve(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn revealed_height_grows_with_x() {
        let mut last = 0.0;
        for x in 0..WIDTH {
            let h = revealed_height(x, 0.7);
            assert!(h >= last);
            last = h;
        }
        assert!(last <= HEIGHT as f32);
    }

    #[test]
    fn page_turn_progress_is_monotonic_and_clamped() {
        let mut turn = PageTurn::new();
        let mut last = 0.0;
        for _ in 0..200 {
            turn.advance(1.0 / FPS as f32);
            assert!(turn.progress() >= last);
            assert!(turn.progress() <= 1.0);
            last = turn.progress();
        }
        assert!(turn.is_complete());
    }

    #[test]
    fn page_turn_completes_exactly_once() {
        let mut turn = PageTurn::new();
        let mut completions = 0;
        for _ in 0..200 {
            if turn.advance(1.0 / FPS as f32) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn page_turn_survives_a_huge_frame() {
        // A single slow frame must not overshoot or double-complete.
        let mut turn = PageTurn::new();
        assert!(turn.advance(10.0));
        assert_eq!(turn.progress(), 1.0);
        assert!(!turn.advance(10.0));
    }

    #[test]
    fn fade_alpha_is_monotonically_decreasing_and_bounded() {
        let mut fade = Fade::new();
        let mut last = fade.alpha();
        let mut steps = 0;
        loop {
            let done = fade.advance(1.0 / FPS as f32);
            assert!(fade.alpha() <= last);
            last = fade.alpha();
            steps += 1;
            if done {
                break;
            }
            assert!(steps < 1000, "fade never terminated");
        }
        assert_eq!(fade.alpha(), 0);
        assert!(steps <= (FADE_DURATION * FPS as f32) as i32 + 1);
    }

    #[test]
    fn fade_completes_exactly_once() {
        let mut fade = Fade::new();
        let mut completions = 0;
        for _ in 0..200 {
            if fade.advance(1.0 / FPS as f32) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(fade.alpha(), 0);
    }
}

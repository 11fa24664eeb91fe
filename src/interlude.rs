use crate::constants::*;

/// Frame timing for the end-of-story slideshow: each frame is held for
/// INTERLUDE_SECONDS_PER_IMAGE, then the last frame lingers for
/// INTERLUDE_END_HOLD before the sequence reports done.
///
/// Pure bookkeeping; the controller pairs it with the loaded textures.
pub struct SequencePlayer {
    frame_count: usize,
    index: usize,
    timer: f32,
    done: bool,
}

impl SequencePlayer {
    /// `frame_count` must be non-zero; the controller skips the interlude
    /// entirely when no frames loaded.
    pub fn new(frame_count: usize) -> SequencePlayer {
        SequencePlayer { frame_count, index: 0, timer: 0.0, done: false }
    }

    /// Index of the frame to display. Stays on the last frame during the
    /// end hold.
    pub fn current(&self) -> usize {
        self.index.min(self.frame_count - 1)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn advance(&mut self, dt: f32) {
        if self.done {
            return;
        }
        self.timer += dt;
        if self.index < self.frame_count {
            if self.timer >= INTERLUDE_SECONDS_PER_IMAGE {
                self.timer = 0.0;
                self.index += 1;
            }
        } else if self.timer >= INTERLUDE_END_HOLD {
            self.done = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / FPS as f32;

    fn run_for(player: &mut SequencePlayer, seconds: f32) -> Vec<usize> {
        let mut seen = Vec::new();
        let steps = (seconds / STEP) as usize;
        for _ in 0..steps {
            if !seen.contains(&player.current()) {
                seen.push(player.current());
            }
            player.advance(STEP);
        }
        seen
    }

    #[test]
    fn frames_play_in_order() {
        let mut player = SequencePlayer::new(3);
        let seen = run_for(&mut player, 3.0 * INTERLUDE_SECONDS_PER_IMAGE);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn finishes_after_all_frames_plus_hold() {
        let mut player = SequencePlayer::new(2);
        run_for(&mut player, 2.0 * INTERLUDE_SECONDS_PER_IMAGE);
        assert!(!player.is_done(), "should still be in the end hold");
        run_for(&mut player, INTERLUDE_END_HOLD + 0.1);
        assert!(player.is_done());
    }

    #[test]
    fn current_never_exceeds_last_frame() {
        let mut player = SequencePlayer::new(2);
        for _ in 0..10_000 {
            player.advance(STEP);
            assert!(player.current() < 2);
        }
    }

    #[test]
    fn single_frame_sequence() {
        let mut player = SequencePlayer::new(1);
        run_for(&mut player, INTERLUDE_SECONDS_PER_IMAGE + INTERLUDE_END_HOLD + 0.1);
        assert!(player.is_done());
        assert_eq!(player.current(), 0);
    }
}

use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;

use crate::constants::*;

/// Background music plus the page-turn effect. Audio is optional: if the
/// device fails to initialize or a file is missing, every playback call
/// becomes a no-op for the rest of the session.
pub struct Soundtrack<'aud> {
    music: Option<Music<'aud>>,
    page_turn: Option<Sound<'aud>>,
}

impl<'aud> Soundtrack<'aud> {
    pub fn load(audio: Option<&'aud RaylibAudio>, dir: &Path) -> Soundtrack<'aud> {
        let Some(audio) = audio else {
            return Soundtrack { music: None, page_turn: None };
        };

        let music_path = dir.join(MUSIC_FILE);
        let music = music_path
            .to_str()
            .and_then(|p| match audio.new_music(p) {
                Ok(m) => Some(m),
                Err(e) => {
                    warn!("no background music ({}): {}", music_path.display(), e);
                    None
                }
            });

        let sound_path = dir.join(PAGE_TURN_SOUND_FILE);
        let page_turn = sound_path
            .to_str()
            .and_then(|p| match audio.new_sound(p) {
                Ok(s) => Some(s),
                Err(e) => {
                    warn!("no page turn sound ({}): {}", sound_path.display(), e);
                    None
                }
            });

        if music.is_none() && page_turn.is_none() {
            info!("continuing without sound");
        }

        Soundtrack { music, page_turn }
    }

    pub fn start_music(&mut self) {
        // Music streams loop by default, so one play call covers the session.
        if let Some(music) = &mut self.music {
            music.play_stream();
        }
    }

    /// Pumps the music stream buffer; call once per frame.
    pub fn tick(&mut self) {
        if let Some(music) = &mut self.music {
            music.update_stream();
        }
    }

    pub fn play_page_turn(&mut self) {
        if let Some(sound) = &mut self.page_turn {
            sound.play();
        }
    }
}

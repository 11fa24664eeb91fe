use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;

mod assets;
mod audio;
mod button;
mod constants;
mod controller;
mod interlude;
mod state;
mod story;
mod text_layout;
mod texture_loader;
mod transition;

use crate::assets::Assets;
use crate::audio::Soundtrack;
use crate::constants::*;
use crate::controller::{Action, Controller};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Click-through animated storybook viewer.
#[derive(Parser)]
struct Cli {
    /// Directory holding backgrounds, fonts and audio clips
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Directory of images for the end-of-story slideshow
    #[arg(long, default_value = "assets/slideshow")]
    slideshow: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (mut rl, thread) = raylib::init()
        .size(WIDTH, HEIGHT)
        .title("Animated Storybook")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape is handled by the controller (it cancels the interlude), so it
    // must not close the window.
    rl.set_exit_key(None);

    let assets = Assets::load(&mut rl, &thread, &cli.assets)?;

    // A dead audio device only costs us sound, never the presentation.
    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("audio device unavailable: {e}; continuing without sound");
            None
        }
    };
    let mut soundtrack = Soundtrack::load(audio.as_ref(), &cli.assets);
    soundtrack.start_music();

    let mut controller = Controller::new();

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        soundtrack.tick();

        let mut action = None;
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            action = controller.handle_click(rl.get_mouse_position());
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            controller.handle_escape();
        }

        match action {
            Some(Action::Quit) => break,
            Some(Action::PageTurnStarted) => soundtrack.play_page_turn(),
            Some(Action::InterludeRequested) => {
                let frames = load_interlude_frames(&mut rl, &thread, &cli.slideshow);
                controller.begin_interlude(frames);
            }
            None => {}
        }

        controller.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);
        controller.draw(&mut d, &assets);
    }

    Ok(())
}

/// Loads the slideshow images in lexical filename order. Unreadable files
/// or directories are logged and skipped; the caller treats an empty result
/// as "no interlude".
fn load_interlude_frames(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Vec<Texture2D> {
    let paths = match load_sorted_image_paths(dir) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("slideshow directory unusable: {e:#}");
            return Vec::new();
        }
    };

    let mut frames = Vec::new();
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => frames.push(texture),
            Err(e) => warn!("skipping slideshow image: {e:#}"),
        }
    }
    info!("loaded {} slideshow images from {}", frames.len(), dir.display());
    frames
}

// What you SEE:
// • Start screen: click anywhere to begin.
// • Playing: the razor follows your mouse; sweep it over hairs to shave them
//   before the countdown runs out. The razor shrinks every 15 seconds.
// • Run out of time with hairs left and you lose a life; lose all 3 and
//   it's game over. Click to go back to the start screen.
// • ESC or closing the window quits.

mod audio;
mod config;
mod draw;
mod entity;
mod error;
mod game;
mod render;
mod sprite;
mod timer;
mod types;

use audio::Audio;
use config::{FPS, HEIGHT, SHRINK_PERIOD, SKIN, TICK_PERIOD, WIDTH, WINDOW_TITLE};
use draw::Drawer;
use error::Error;
use game::{GameState, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sprite::Sprite;
use std::time::{Duration, Instant};
use timer::EventClock;
use tracing::{debug, info};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    /* --- Assets ---
       Anything missing here is fatal: we stop before a window appears. */
    let assets = config::asset_dir();
    info!(dir = %assets.display(), "loading assets");
    let razor = Sprite::load(&assets.join("razor.png"))?;
    let hair = Sprite::load(&assets.join("hair.png"))?;
    let audio = Audio::new(&assets.join("music.wav"), &assets.join("shave.wav"))?;

    /* --- Window + screen buffer ---
       Visual: an 800x600 window, redrawn at most FPS times per second. */
    let mut drawer = Drawer::new(WINDOW_TITLE, WIDTH, HEIGHT, FPS)?;
    let mut screen = FrameBuffer::new(WIDTH, HEIGHT, SKIN);

    let mut session = Session::new(razor, hair, StdRng::from_entropy());
    let mut clock = EventClock::new(SHRINK_PERIOD, TICK_PERIOD, Instant::now());
    let mut last_state = session.state;

    /* --- FPS (debug log only) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    info!("window open, waiting for click");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Events: click, then shrink, then countdown ticks. */
        let clicked = drawer.clicked();
        for event in clock.collect(clicked, now) {
            session.apply(event);
        }

        /* 2) Razor follows the mouse, shave whatever it touches. */
        let shaved = session.update(drawer.mouse_pos());
        audio.play_shaves(shaved)?;

        /* 3) Pointer is hidden only while the razor replaces it. */
        if session.state != last_state {
            drawer.set_cursor_visible(session.state != GameState::Playing);
            last_state = session.state;
        }

        /* 4) Draw and present. */
        render::render(&mut screen, &session);
        drawer.present(&screen)?;

        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!(fps = frames_this_second as f32 / secs, "frame rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!(points = session.points, "bye");
    Ok(())
}

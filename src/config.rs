// Tunables for the whole game, in one place.
// Visual: changing these changes window size, pace and difficulty.

use crate::types::rgb;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_TITLE: &str = "screenshaver";
pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;
pub const FPS: usize = 60;

/// Seconds on the countdown at the start of every round.
pub const TIME_ALLOTTED: u32 = 45;
pub const STARTING_LIVES: u32 = 3;
/// Hairs per spawned batch.
pub const HAIR_BATCH: usize = 200;

pub const SHRINK_PERIOD: Duration = Duration::from_secs(15);
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// Razor shrinks by 1/1.1 each time, i.e. d * 10 / 11 in integer math.
pub const SHRINK_NUM: u32 = 10;
pub const SHRINK_DEN: u32 = 11;

/// The razor's hit box is only the blade: a third of the sprite width, 20 px tall.
pub const RAZOR_RECT_HEIGHT: i32 = 20;
pub const RAZOR_RECT_WIDTH_DIVISOR: i32 = 3;

pub const BLACK: u32 = rgb(0, 0, 0);
pub const WHITE: u32 = rgb(255, 255, 255);
pub const SKIN: u32 = rgb(255, 229, 204); // playfield background

/// Each 5x7 glyph pixel becomes a FONT_SCALE x FONT_SCALE block.
pub const FONT_SCALE: i32 = 2;

/// Most shave sounds started in one frame; a wide sweep plays this many.
pub const MAX_SHAVE_VOICES: usize = 8;

pub const ASSETS_ENV: &str = "SCREENSHAVER_ASSETS";

/// Directory holding razor.png, hair.png, music.wav and shave.wav.
/// `SCREENSHAVER_ASSETS` wins; otherwise the `assets/` folder of this crate.
pub fn asset_dir() -> PathBuf {
    match std::env::var_os(ASSETS_ENV) {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            if !dir.is_dir() {
                tracing::warn!(dir = %dir.display(), "{ASSETS_ENV} is not a directory");
            }
            dir
        }
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
    }
}

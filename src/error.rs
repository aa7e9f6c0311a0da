// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    AssetLoad { path: PathBuf, reason: String }, // A sprite/sound file was missing or unreadable
    AudioInit(String),    // Opening the audio output device failed
    AudioDecode(String),  // A sound file couldn't be decoded or played
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::AssetLoad { path, reason } => {
                write!(f, "Asset load error ({}): {reason}", path.display())
            }
            Error::AudioInit(s) => write!(f, "Audio init error: {s}"),
            Error::AudioDecode(s) => write!(f, "Audio decode error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

// Sound: looping background music plus the shave effect.
// Audible: music starts as soon as the window opens and never stops;
// every shaved hair plays a "bzzt", up to MAX_SHAVE_VOICES per frame.

use crate::config::MAX_SHAVE_VOICES;
use crate::error::Error;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

pub struct Audio {
    _stream: OutputStream, // must outlive every sink, or playback stops
    handle: OutputStreamHandle,
    _music: Sink,
    shave: Arc<[u8]>, // encoded bytes; decoded fresh for each playback
}

fn read_asset(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|e| Error::AssetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl Audio {
    /// Open the default output device, start `music` on repeat, and keep
    /// `shave` ready to play.
    pub fn new(music_path: &Path, shave_path: &Path) -> Result<Self, Error> {
        let music = read_asset(music_path)?;
        let shave: Arc<[u8]> = read_asset(shave_path)?.into();

        let (stream, handle) =
            OutputStream::try_default().map_err(|e| Error::AudioInit(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| Error::AudioInit(e.to_string()))?;
        sink.set_volume(1.0);
        let track = Decoder::new(Cursor::new(music))
            .map_err(|e| Error::AudioDecode(format!("{}: {e}", music_path.display())))?;
        sink.append(track.repeat_infinite());

        // Decode once up front so a broken effect fails at startup, not mid-game.
        Decoder::new(Cursor::new(Arc::clone(&shave)))
            .map_err(|e| Error::AudioDecode(format!("{}: {e}", shave_path.display())))?;

        Ok(Self { _stream: stream, handle, _music: sink, shave })
    }

    /// One shave sound per hair shaved this frame, capped so a big sweep
    /// doesn't pile up dozens of identical sounds.
    pub fn play_shaves(&self, shaved: usize) -> Result<(), Error> {
        for _ in 0..shave_voices(shaved) {
            self.play_shave()?;
        }
        Ok(())
    }

    /// Fire-and-forget shave sound; overlapping plays mix together.
    fn play_shave(&self) -> Result<(), Error> {
        let source = Decoder::new(Cursor::new(Arc::clone(&self.shave)))
            .map_err(|e| Error::AudioDecode(e.to_string()))?;
        self.handle
            .play_raw(source.convert_samples())
            .map_err(|e| Error::AudioDecode(e.to_string()))
    }
}

fn shave_voices(shaved: usize) -> usize {
    shaved.min(MAX_SHAVE_VOICES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_voice_per_hair_up_to_cap() {
        assert_eq!(shave_voices(0), 0);
        assert_eq!(shave_voices(1), 1);
        assert_eq!(shave_voices(5), 5);
        assert_eq!(shave_voices(MAX_SHAVE_VOICES), MAX_SHAVE_VOICES);
        assert_eq!(shave_voices(40), MAX_SHAVE_VOICES);
    }
}

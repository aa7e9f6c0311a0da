// Sprites: RGBA images decoded once at startup with the `image` crate.
// Visual: these are the razor and hair pictures you see on the playfield.

use crate::error::Error;
use image::{RgbaImage, imageops::FilterType};
use std::path::Path;
use std::rc::Rc;

// Cloning is cheap: every hair shares the one decoded image.
#[derive(Clone)]
pub struct Sprite {
    pub image: Rc<RgbaImage>, // straight (non-premultiplied) alpha
}

impl Sprite {
    pub fn new(image: RgbaImage) -> Self {
        Self { image: Rc::new(image) }
    }

    /// Decode a PNG (or any format `image` knows) from disk.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let img = image::open(path).map_err(|e| Error::AssetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(img.to_rgba8()))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Nearest-neighbour rescale to exactly `width` x `height`.
    /// Visual: keeps the pixel-art look; a zero size makes the sprite vanish.
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::new(RgbaImage::new(width, height));
        }
        Self::new(image::imageops::resize(&*self.image, width, height, FilterType::Nearest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_scaled_dimensions() {
        let sprite = Sprite::new(RgbaImage::from_pixel(90, 40, Rgba([10, 20, 30, 255])));
        let small = sprite.scaled(81, 36);
        assert_eq!((small.width(), small.height()), (81, 36));
        assert_eq!(small.image.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_scaled_to_zero_is_empty() {
        let sprite = Sprite::new(RgbaImage::new(3, 3));
        let gone = sprite.scaled(0, 2);
        assert_eq!(gone.width(), 0);
        assert!(gone.image.as_raw().is_empty());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Sprite::load(Path::new("definitely/not/here.png")).err();
        match err {
            Some(Error::AssetLoad { path, .. }) => assert!(path.ends_with("here.png")),
            _ => panic!("expected AssetLoad error"),
        }
    }
}

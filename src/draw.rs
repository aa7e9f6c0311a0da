// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the playfield.
// 2) Sprites (razor, hairs) pasted on top with their transparency.
// 3) A tiny 5x7 bitmap font, scaled up, for the HUD and title screens.

use crate::error::Error;
use crate::sprite::Sprite;
use crate::types::{FrameBuffer, rgb};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,   // the on-screen window you see
    was_down: bool,   // left button state last frame, for click detection
}

impl Drawer {
    /// Create a fixed-size window capped at `fps` updates per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, was_down: false })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new frame.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    /// Visual: the razor's top-left corner is placed here while playing.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.max(0.0) as i32, y.max(0.0) as i32))
    }

    /// True only on the frame the left button goes down; holding it doesn't repeat.
    pub fn clicked(&mut self) -> bool {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let clicked = press_edge(self.was_down, down);
        self.was_down = down;
        clicked
    }

    /// Visual: hides the OS pointer while the razor stands in for it.
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visibility(visible);
    }
}

#[inline]
fn press_edge(was_down: bool, down: bool) -> bool {
    down && !was_down
}

/* ---------- Software drawing: pixels, sprites, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Paint the whole frame one color.
pub fn fill(fb: &mut FrameBuffer, color: u32) {
    fb.pixels.fill(color);
}

fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            put_pixel(fb, xx, yy, color);
        }
    }
}

/// Mix `src` over `dst` with alpha `a` (0..=255), per channel.
#[inline]
fn blend(dst: u32, r: u8, g: u8, b: u8, a: u8) -> u32 {
    let a = a as u32;
    let inv = 255 - a;
    let mix = |d: u32, s: u8| (s as u32 * a + d * inv + 127) / 255;
    let dr = mix((dst >> 16) & 0xFF, r);
    let dg = mix((dst >> 8) & 0xFF, g);
    let db = mix(dst & 0xFF, b);
    (dr << 16) | (dg << 8) | db
}

/// Draw `sprite` with its top-left corner at (x,y), clipped to the frame.
/// Visual: transparent parts of the PNG let the skin show through.
pub fn blit_sprite(fb: &mut FrameBuffer, sprite: &Sprite, x: i32, y: i32) {
    for (sx, sy, px) in sprite.image.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        let (dx, dy) = (x + sx as i32, y + sy as i32);
        if dx < 0 || dy < 0 || dx as usize >= fb.width || dy as usize >= fb.height {
            continue;
        }
        let idx = dy as usize * fb.width + dx as usize;
        fb.pixels[idx] = if a == 255 { rgb(r, g, b) } else { blend(fb.pixels[idx], r, g, b, a) };
    }
}

/* ---------- 5x7 bitmap font ---------- */

/// Return a 5x7 glyph bitmap. Lowercase letters share the uppercase shapes.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00110,0b00100,0b01000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),

        _ => None,
    }
}

/// Draw one character at (x,y); every glyph pixel becomes a `scale`x`scale` block.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fill_rect(fb, x + rx * scale, y + ry as i32 * scale, scale, scale, color);
                }
            }
        }
    }
}

/// Size in pixels of `text` drawn on one line at `scale`.
pub fn text_size(text: &str, scale: i32) -> (i32, i32) {
    let n = text.chars().count() as i32;
    let w = if n == 0 { 0 } else { (n * 6 - 1) * scale };
    (w, 7 * scale)
}

/// Draw a text string using 5x7 glyphs with 1 column of spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += 6 * scale; // 5 pixels glyph width + 1 pixel spacing
    }
}

/// Draw each line of `text` centred horizontally, the block centred vertically.
/// Visual: the start and game-over messages sit in the middle of the window.
pub fn draw_text_centered(fb: &mut FrameBuffer, text: &str, scale: i32, color: u32) {
    let line_h = 10 * scale; // 7 rows + 3 rows of leading
    let lines: Vec<&str> = text.lines().collect();
    let block_h = lines.len() as i32 * line_h - 3 * scale;
    let mut y = (fb.height as i32 - block_h) / 2;
    for line in lines {
        let (w, _) = text_size(line, scale);
        draw_text_5x7(fb, (fb.width as i32 - w) / 2, y, line, scale, color);
        y += line_h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_click_is_press_edge_only() {
        assert!(press_edge(false, true));
        assert!(!press_edge(true, true));
        assert!(!press_edge(true, false));
        assert!(!press_edge(false, false));
    }

    #[test]
    fn test_blit_respects_alpha_and_clips() {
        let mut fb = FrameBuffer::new(4, 4, 0x00_00_00_FF);
        let mut img = RgbaImage::new(3, 3);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 0]));
        img.put_pixel(2, 2, Rgba([255, 255, 255, 255]));
        blit_sprite(&mut fb, &Sprite::new(img), 2, 2);

        assert_eq!(fb.pixels[2 * 4 + 2], 0x00_FF_00_00); // opaque red
        assert_eq!(fb.pixels[2 * 4 + 3], 0x00_00_00_FF); // transparent, untouched
        // (2,2) of the sprite lands at (4,4): off-screen, nothing panics.
    }

    #[test]
    fn test_half_alpha_blends() {
        let out = blend(0x00_00_00_00, 255, 255, 255, 128);
        assert_eq!(out, 0x00_80_80_80);
    }

    #[test]
    fn test_every_game_message_has_glyphs() {
        let msgs = [
            "screenshaver (inspired by simone giertz)",
            "click anywhere to start",
            "game over, you shaved 1234567890 hairs.",
            "click anywhere to return to start",
            "points: 0 lives: 3 time remaining: 45",
        ];
        for msg in msgs {
            for ch in msg.chars() {
                assert!(glyph5x7(ch).is_some(), "missing glyph {ch:?}");
            }
        }
    }

    #[test]
    fn test_text_size() {
        assert_eq!(text_size("", 2), (0, 14));
        assert_eq!(text_size("ab", 1), (11, 7));
        assert_eq!(text_size("ab", 2), (22, 14));
    }

    #[test]
    fn test_text_draws_inside_its_box() {
        let mut fb = FrameBuffer::new(40, 20, 0);
        draw_text_5x7(&mut fb, 1, 1, "HI", 2, 0x00_FF_FF_FF);
        let (w, h) = text_size("HI", 2);
        for y in 0..fb.height as i32 {
            for x in 0..fb.width as i32 {
                let lit = fb.pixels[(y * 40 + x) as usize] != 0;
                if lit {
                    assert!(x >= 1 && x < 1 + w && y >= 1 && y < 1 + h);
                }
            }
        }
        assert!(fb.pixels.iter().any(|p| *p != 0));
    }
}

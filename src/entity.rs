// Everything drawn on the playfield is an Entity: a sprite at a position,
// plus the hit box used for collisions.
// Visual: the razor following your mouse and every hair on the skin.

use crate::config::{RAZOR_RECT_HEIGHT, RAZOR_RECT_WIDTH_DIVISOR, SHRINK_DEN, SHRINK_NUM};
use crate::sprite::Sprite;
use crate::types::Rect;

#[derive(Clone)]
pub struct Entity {
    pub pos: (i32, i32), // top-left corner of both sprite and hit box
    pub sprite: Sprite,
    pub rect_w: i32,     // hit box size; may differ from the sprite size
    pub rect_h: i32,
}

impl Entity {
    /// Hit box at the current position and current size.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.0, self.pos.1, self.rect_w, self.rect_h)
    }
}

/// The player's razor. Only the blade collides, so the hit box is narrower
/// and shorter than the picture.
pub fn razor(sprite: Sprite) -> Entity {
    let rect_w = sprite.width() as i32 / RAZOR_RECT_WIDTH_DIVISOR;
    Entity { pos: (0, 0), sprite, rect_w, rect_h: RAZOR_RECT_HEIGHT }
}

/// A hair at `pos`; its hit box is the whole sprite.
pub fn hair(sprite: Sprite, pos: (i32, i32)) -> Entity {
    let (rect_w, rect_h) = (sprite.width() as i32, sprite.height() as i32);
    Entity { pos, sprite, rect_w, rect_h }
}

#[inline]
fn shrink(d: u32) -> u32 {
    d * SHRINK_NUM / SHRINK_DEN
}

/// Scale sprite and hit box by 1/1.1 (floored). Sizes only ever go down.
/// Visual: the razor gets visibly smaller every shrink tick.
pub fn shrink_razor(razor: &mut Entity) {
    let (w, h) = (shrink(razor.sprite.width()), shrink(razor.sprite.height()));
    razor.sprite = razor.sprite.scaled(w, h);
    razor.rect_w = shrink(razor.rect_w.max(0) as u32) as i32;
    razor.rect_h = shrink(razor.rect_h.max(0) as u32) as i32;
}

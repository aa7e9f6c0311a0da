// Builds one frame from the session: which screen, and what's on it.

use crate::config::{BLACK, FONT_SCALE, SKIN, WHITE};
use crate::draw::{blit_sprite, draw_text_5x7, draw_text_centered, fill, text_size};
use crate::game::{GameState, Session};
use crate::types::FrameBuffer;

const TITLE: &str = "screenshaver (inspired by simone giertz).\nclick anywhere to start";

pub fn render(fb: &mut FrameBuffer, session: &Session) {
    match session.state {
        GameState::Start => {
            fill(fb, BLACK);
            draw_text_centered(fb, TITLE, FONT_SCALE, WHITE);
        }
        GameState::Playing => draw_playfield(fb, session),
        GameState::GameOver => {
            fill(fb, BLACK);
            let msg = format!(
                "game over, you shaved {} hairs.\nclick anywhere to return to start",
                session.points
            );
            draw_text_centered(fb, &msg, FONT_SCALE, WHITE);
        }
    }
}

/// Skin, hairs, razor on top, then the HUD: timer top-left, points
/// top-right, lives bottom-centre.
fn draw_playfield(fb: &mut FrameBuffer, session: &Session) {
    fill(fb, SKIN);
    for hair in &session.hairs {
        blit_sprite(fb, &hair.sprite, hair.pos.0, hair.pos.1);
    }
    let razor = &session.razor;
    blit_sprite(fb, &razor.sprite, razor.pos.0, razor.pos.1);

    let (w, h) = (fb.width as i32, fb.height as i32);
    let timer = format!("time remaining: {}", session.timer);
    draw_text_5x7(fb, 0, 0, &timer, FONT_SCALE, BLACK);

    let points = format!("points: {}", session.points);
    let (pw, _) = text_size(&points, FONT_SCALE);
    draw_text_5x7(fb, w - pw, 0, &points, FONT_SCALE, BLACK);

    let lives = format!("lives: {}", session.lives);
    let (lw, lh) = text_size(&lives, FONT_SCALE);
    draw_text_5x7(fb, (w - lw) / 2, h - lh, &lives, FONT_SCALE, BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HEIGHT, WIDTH};
    use crate::sprite::Sprite;
    use crate::timer::GameEvent;
    use image::{Rgba, RgbaImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn session() -> Session {
        let razor = Sprite::new(RgbaImage::from_pixel(30, 30, Rgba([0, 0, 255, 255])));
        let hair = Sprite::new(RgbaImage::from_pixel(4, 4, RED));
        Session::new(razor, hair, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_start_screen_is_black_with_text() {
        let mut fb = FrameBuffer::new(WIDTH, HEIGHT, SKIN);
        render(&mut fb, &session());
        assert_eq!(fb.pixels[0], BLACK);
        assert!(fb.pixels.contains(&WHITE));
    }

    #[test]
    fn test_playfield_shows_hairs_and_razor() {
        let mut s = session();
        s.apply(GameEvent::Click);
        s.razor.pos = (400, 300);
        let mut fb = FrameBuffer::new(WIDTH, HEIGHT, 0);
        render(&mut fb, &s);
        assert_eq!(fb.pixels[300 * WIDTH + 400], 0x00_00_00_FF);
        assert!(fb.pixels.contains(&0x00_FF_00_00));
        assert!(fb.pixels.contains(&SKIN));
        assert!(fb.pixels.contains(&BLACK), "HUD text is black");
    }

    #[test]
    fn test_title_keeps_its_full_stop() {
        let lines: Vec<&str> = TITLE.lines().collect();
        assert_eq!(lines, ["screenshaver (inspired by simone giertz).", "click anywhere to start"]);
    }

    #[test]
    fn test_game_over_screen() {
        let mut s = session();
        s.state = GameState::GameOver;
        let mut fb = FrameBuffer::new(WIDTH, HEIGHT, SKIN);
        render(&mut fb, &s);
        assert!(!fb.pixels.contains(&SKIN));
        assert!(fb.pixels.contains(&WHITE));
    }
}

// Game session: state machine, score/lives/countdown, and the hair batch.
// Visual: decides which screen is shown and which hairs are still on the skin.

use crate::config::{HAIR_BATCH, HEIGHT, STARTING_LIVES, TIME_ALLOTTED, WIDTH};
use crate::entity::{self, Entity};
use crate::sprite::Sprite;
use crate::timer::GameEvent;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Start,    // title screen, waiting for a click
    Playing,  // razor follows the mouse, countdown is running
    GameOver, // final score, waiting for a click
}

pub struct Session {
    pub state: GameState,
    pub lives: u32,
    pub points: u32,
    pub timer: u32, // seconds left in this round
    pub razor: Entity,
    pub hairs: Vec<Entity>,
    width: usize,  // playfield size
    height: usize,
    razor_sprite: Sprite, // full-size originals, used on every reset/spawn
    hair_sprite: Sprite,
    rng: StdRng,
}

impl Session {
    /// Fresh session on the start screen, playfield sized to the window.
    pub fn new(razor_sprite: Sprite, hair_sprite: Sprite, rng: StdRng) -> Self {
        Self::with_playfield(razor_sprite, hair_sprite, rng, WIDTH, HEIGHT)
    }

    pub fn with_playfield(
        razor_sprite: Sprite,
        hair_sprite: Sprite,
        rng: StdRng,
        width: usize,
        height: usize,
    ) -> Self {
        let mut session = Self {
            state: GameState::Start,
            lives: STARTING_LIVES,
            points: 0,
            timer: TIME_ALLOTTED,
            razor: entity::razor(razor_sprite.clone()),
            hairs: Vec::with_capacity(HAIR_BATCH),
            width,
            height,
            razor_sprite,
            hair_sprite,
            rng,
        };
        session.reset();
        session
    }

    /// Back to the start screen with full lives, zero points, a full-size
    /// razor and a new batch of hairs.
    pub fn reset(&mut self) {
        self.lives = STARTING_LIVES;
        self.points = 0;
        self.timer = TIME_ALLOTTED;
        self.razor = entity::razor(self.razor_sprite.clone());
        self.spawn_hairs();
        self.state = GameState::Start;
    }

    /// Replace the current hairs with a new batch.
    pub fn spawn_hairs(&mut self) {
        self.hairs.clear();
        self.add_hairs();
    }

    /// Add a batch on top of whatever is left, every hair fully on screen.
    /// Unshaved hairs carry over, so a missed round gets more crowded.
    fn add_hairs(&mut self) {
        let max_x = self.width as i32 - self.hair_sprite.width() as i32;
        let max_y = self.height as i32 - self.hair_sprite.height() as i32;
        self.hairs.reserve(HAIR_BATCH);
        for _ in 0..HAIR_BATCH {
            let x = if max_x > 0 { self.rng.gen_range(0..max_x) } else { 0 };
            let y = if max_y > 0 { self.rng.gen_range(0..max_y) } else { 0 };
            self.hairs.push(entity::hair(self.hair_sprite.clone(), (x, y)));
        }
        debug!(count = self.hairs.len(), "spawned hair batch");
    }

    /// Apply one queued event. Clicks drive the state machine, Shrink always
    /// applies, Tick only counts down while playing.
    pub fn apply(&mut self, event: GameEvent) {
        match (event, self.state) {
            (GameEvent::Click, GameState::Start) => {
                info!("round started");
                self.state = GameState::Playing;
            }
            (GameEvent::Click, GameState::GameOver) => {
                info!("back to start screen");
                self.reset();
            }
            (GameEvent::Shrink, _) => {
                entity::shrink_razor(&mut self.razor);
                debug!(w = self.razor.rect_w, h = self.razor.rect_h, "razor shrunk");
            }
            (GameEvent::Tick, GameState::Playing) => self.tick(),
            _ => {}
        }
    }

    fn tick(&mut self) {
        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 && !self.hairs.is_empty() {
            self.lives = self.lives.saturating_sub(1);
            info!(lives = self.lives, left = self.hairs.len(), "time ran out");
            self.timer = TIME_ALLOTTED;
            self.add_hairs();
            if self.lives == 0 {
                info!(points = self.points, "game over");
                self.state = GameState::GameOver;
            }
        }
        if self.hairs.is_empty() {
            self.new_round();
        }
    }

    fn new_round(&mut self) {
        self.timer = TIME_ALLOTTED;
        self.spawn_hairs();
    }

    /// Per-frame update while playing: move the razor to the pointer, shave
    /// every hair under it, and start a new round once the skin is clear.
    /// Returns how many hairs were shaved this frame.
    pub fn update(&mut self, mouse: Option<(i32, i32)>) -> usize {
        if self.state != GameState::Playing {
            return 0;
        }
        if let Some(pos) = mouse {
            self.razor.pos = pos;
        }
        let shaved = self.sweep();
        self.points += shaved as u32;
        if self.hairs.is_empty() {
            debug!(points = self.points, "batch cleared");
            self.new_round();
        }
        shaved
    }

    /// Drop all hairs overlapping the razor's hit box.
    fn sweep(&mut self) -> usize {
        let blade = self.razor.rect();
        let before = self.hairs.len();
        self.hairs.retain(|hair| !blade.overlaps(&hair.rect()));
        before - self.hairs.len()
    }
}

//! Flappy bird squeezed onto the LED grid.
//!
//! SPACE flaps, R restarts after a crash, ESC leaves.

use arrayvec::ArrayVec;

use crate::registry::{logo_px, LogoPixel};
use crate::screen::{emit, substeps, EffectQueue, Screen, SoundEffect};
use crate::types::{HeldKeys, Key, Rgb, GRID_SIZE};
use crate::{GridBuffer, SimpleRng};

const GRAVITY: f32 = 18.0;
const FLAP_VELOCITY: f32 = -7.0;
const PIPE_SPEED: f32 = 7.0;
const GAP_SIZE: i32 = 6;
const BIRD_X: i32 = 5;
const MAX_PIPES: usize = 4;

const STEP: f32 = 1.0 / 60.0;
const MAX_STEPS: u32 = 15;

const SIZE: i32 = GRID_SIZE as i32;

const BIRD: Rgb = Rgb::new(255, 230, 60);
const BIRD_WING: Rgb = Rgb::new(255, 180, 0);
const PIPE: Rgb = Rgb::new(0, 200, 80);
const PIPE_EDGE: Rgb = Rgb::new(0, 150, 60);

pub const NAME: &str = "FLAP";
pub const HINT: &str = "Flappy: SPACE Flap | R Restart | ESC Menu";
#[rustfmt::skip]
pub const LOGO: &[LogoPixel] = &[
    logo_px(8, 0, PIPE), logo_px(9, 0, PIPE_EDGE),
    logo_px(8, 1, PIPE), logo_px(9, 1, PIPE_EDGE),
    logo_px(8, 2, PIPE), logo_px(9, 2, PIPE_EDGE),
    logo_px(8, 5, PIPE), logo_px(9, 5, PIPE_EDGE),
    logo_px(8, 6, PIPE), logo_px(9, 6, PIPE_EDGE),
    logo_px(8, 7, PIPE), logo_px(9, 7, PIPE_EDGE),
    logo_px(3, 3, BIRD), logo_px(3, 4, BIRD),
    logo_px(4, 3, BIRD_WING), logo_px(4, 4, BIRD_WING),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    /// Row at the center of the opening.
    pub gap: i32,
    passed: bool,
}

impl Pipe {
    fn column(&self) -> i32 {
        self.x.round() as i32
    }

    fn is_open(&self, row: i32) -> bool {
        let half = GAP_SIZE / 2;
        (self.gap - half..=self.gap + half).contains(&row)
    }
}

#[derive(Debug, Clone)]
pub struct Flappy {
    bird_y: f32,
    bird_vy: f32,
    pipes: ArrayVec<Pipe, MAX_PIPES>,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
    effects: EffectQueue,
    running: bool,
}

impl Flappy {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            bird_y: 0.0,
            bird_vy: 0.0,
            pipes: ArrayVec::new(),
            score: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
            effects: EffectQueue::new(),
            running: true,
        };
        game.reset();
        game
    }

    fn reset(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.bird_y = (SIZE / 2) as f32;
        self.bird_vy = 0.0;
        self.pipes.clear();
        self.spawn_pipe((SIZE + 2) as f32);
        self.spawn_pipe((SIZE + 10) as f32);
    }

    fn spawn_pipe(&mut self, x: f32) {
        let gap = self.rng.range_i32(5, SIZE - 6);
        let _ = self.pipes.try_push(Pipe { x, gap, passed: false });
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn bird(&self) -> (i32, f32, f32) {
        (BIRD_X, self.bird_y, self.bird_vy)
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    fn die(&mut self) {
        self.game_over = true;
        emit(&mut self.effects, SoundEffect::Die);
    }

    fn step(&mut self, dt: f32) {
        self.bird_vy += GRAVITY * dt;
        self.bird_y += self.bird_vy * dt;

        for p in self.pipes.iter_mut() {
            p.x -= PIPE_SPEED * dt;
        }
        while self.pipes.first().is_some_and(|p| p.x < -2.0) {
            self.pipes.remove(0);
            self.spawn_pipe((SIZE + 2) as f32);
        }

        if self.bird_y < 0.0 || self.bird_y > (SIZE - 1) as f32 {
            self.die();
            return;
        }

        let row = self.bird_y.round() as i32;
        let mut scored = 0;
        for p in self.pipes.iter_mut() {
            if p.column() == BIRD_X && !p.is_open(row) {
                self.game_over = true;
                break;
            }
            if p.x < BIRD_X as f32 && !p.passed {
                p.passed = true;
                scored += 1;
            }
        }
        if self.game_over {
            emit(&mut self.effects, SoundEffect::Die);
            return;
        }
        for _ in 0..scored {
            self.score += 1;
            emit(&mut self.effects, SoundEffect::Score);
        }
    }
}

impl Screen for Flappy {
    fn update(&mut self, dt: f32) {
        let (steps, step_dt) = substeps(dt, STEP, MAX_STEPS);
        for _ in 0..steps {
            if self.game_over {
                break;
            }
            self.step(step_dt);
        }
    }

    fn render(&self, grid: &mut GridBuffer) {
        grid.clear(Rgb::new(0, 0, 25));

        for p in &self.pipes {
            let px = p.column();
            for y in 0..SIZE {
                if !p.is_open(y) {
                    grid.set_pixel(px, y, PIPE);
                    grid.set_pixel(px + 1, y, PIPE_EDGE);
                }
            }
        }

        let by = self.bird_y.round() as i32;
        grid.fill_rect(BIRD_X, by, 1, 2, BIRD);
        grid.fill_rect(BIRD_X + 1, by, 1, 2, BIRD_WING);

        grid.render_text("F", 0, 0, Rgb::new(120, 200, 255), 1);
        grid.render_number(self.score as i64, 4, 0, Rgb::WHITE, 1);

        if self.game_over {
            grid.render_text("OVER", 2, 7, Rgb::new(255, 255, 0), 1);
            grid.render_text("R", 8, 13, Rgb::new(150, 150, 150), 1);
        }
    }

    fn handle_input(&mut self, _held: &HeldKeys, events: &[Key]) {
        for &key in events {
            if key == Key::Escape {
                self.running = false;
                return;
            }
            if self.game_over {
                if key == Key::Char('r') {
                    self.reset();
                }
                continue;
            }
            if key == Key::Space {
                self.bird_vy = FLAP_VELOCITY;
                emit(&mut self.effects, SoundEffect::Flap);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn take_effects(&mut self) -> EffectQueue {
        std::mem::take(&mut self.effects)
    }
}

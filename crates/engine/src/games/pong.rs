//! Pong against the computer or a second player.
//!
//! Controls: W/S move the left paddle, UP/DOWN the right paddle in 2P mode.
//! LEFT/RIGHT pick the mode, SPACE serves and restarts, ESC leaves.

use arrayvec::ArrayVec;

use crate::registry::{logo_px, LogoPixel};
use crate::screen::{emit, substeps, EffectQueue, Screen, SoundEffect};
use crate::types::{HeldKeys, Key, Rgb, GRID_SIZE};
use crate::{GridBuffer, SimpleRng};

const SIZE: f32 = GRID_SIZE as f32;
const PADDLE_HEIGHT: f32 = 4.0;
const PADDLE_SPEED: f32 = 12.0;
const BALL_SPEED: f32 = 8.0;
const AI_SPEED: f32 = 0.8;
const AI_JITTER: f32 = 0.3;
const AI_DEADZONE: f32 = 0.25;
const WINNING_SCORE: u32 = 5;
const SCORE_FLASH_SECS: f32 = 1.5;
const TRAIL_LEN: usize = 5;

const STEP: f32 = 1.0 / 120.0;
const MAX_STEPS: u32 = 30;

const LEFT_COLOR: Rgb = Rgb::new(0, 255, 255);
const RIGHT_COLOR: Rgb = Rgb::new(255, 0, 255);

const WHITE: Rgb = Rgb::WHITE;
const YELLOW: Rgb = Rgb::new(255, 255, 0);

pub const NAME: &str = "PONG";
pub const HINT: &str = "Pong: W/S | (2P: UP/DOWN) | SPACE Start | ESC Menu";
#[rustfmt::skip]
pub const LOGO: &[LogoPixel] = &[
    logo_px(0, 1, WHITE), logo_px(1, 1, WHITE),
    logo_px(0, 2, WHITE), logo_px(1, 2, WHITE),
    logo_px(0, 3, WHITE), logo_px(1, 3, WHITE),
    logo_px(0, 4, WHITE), logo_px(1, 4, WHITE),
    logo_px(0, 5, WHITE), logo_px(1, 5, WHITE),
    logo_px(9, 1, WHITE), logo_px(10, 1, WHITE),
    logo_px(9, 2, WHITE), logo_px(10, 2, WHITE),
    logo_px(9, 3, WHITE), logo_px(10, 3, WHITE),
    logo_px(9, 4, WHITE), logo_px(10, 4, WHITE),
    logo_px(9, 5, WHITE), logo_px(10, 5, WHITE),
    logo_px(5, 3, YELLOW), logo_px(5, 4, YELLOW),
    logo_px(6, 3, YELLOW), logo_px(6, 4, YELLOW),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PongPhase {
    /// Choosing 1P (vs computer) or 2P.
    ModeSelect,
    /// Ball centered, waiting for a serve.
    Ready,
    Playing,
    /// Flash after a point; the ball re-serves when the timer runs out.
    Scored { by: Side, timer: f32 },
    GameOver { winner: Side },
}

#[derive(Debug, Clone)]
pub struct Pong {
    phase: PongPhase,
    two_player: bool,
    mode_index: u8,
    left_y: f32,
    right_y: f32,
    left_dir: f32,
    right_dir: f32,
    ball_x: f32,
    ball_y: f32,
    ball_vx: f32,
    ball_vy: f32,
    trail: ArrayVec<(i32, i32), TRAIL_LEN>,
    left_score: u32,
    right_score: u32,
    winner: Option<Side>,
    elapsed: f32,
    rng: SimpleRng,
    effects: EffectQueue,
    running: bool,
}

impl Pong {
    pub fn new(seed: u32) -> Self {
        let mid = (SIZE - PADDLE_HEIGHT) / 2.0;
        Self {
            phase: PongPhase::ModeSelect,
            two_player: false,
            mode_index: 0,
            left_y: mid.floor(),
            right_y: mid.floor(),
            left_dir: 0.0,
            right_dir: 0.0,
            ball_x: SIZE / 2.0,
            ball_y: SIZE / 2.0,
            ball_vx: 0.0,
            ball_vy: 0.0,
            trail: ArrayVec::new(),
            left_score: 0,
            right_score: 0,
            winner: None,
            elapsed: 0.0,
            rng: SimpleRng::new(seed),
            effects: EffectQueue::new(),
            running: true,
        }
    }

    pub fn phase(&self) -> PongPhase {
        self.phase
    }

    pub fn is_two_player(&self) -> bool {
        self.two_player
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.left_score, self.right_score)
    }

    pub fn paddles(&self) -> (f32, f32) {
        (self.left_y, self.right_y)
    }

    pub fn ball(&self) -> (f32, f32) {
        (self.ball_x, self.ball_y)
    }

    fn reset_ball(&mut self) {
        self.ball_x = SIZE / 2.0;
        self.ball_y = SIZE / 2.0;
        let angle = self
            .rng
            .range_f32(-std::f32::consts::FRAC_PI_4, std::f32::consts::FRAC_PI_4);
        let direction = if self.rng.coin() { 1.0 } else { -1.0 };
        self.ball_vx = angle.cos() * BALL_SPEED * direction;
        self.ball_vy = angle.sin() * BALL_SPEED;
        self.trail.clear();
    }

    fn restart(&mut self) {
        self.left_score = 0;
        self.right_score = 0;
        self.winner = None;
        let mid = ((SIZE - PADDLE_HEIGHT) / 2.0).floor();
        self.left_y = mid;
        self.right_y = mid;
        self.reset_ball();
        self.phase = PongPhase::Ready;
    }

    fn paddles_movable(&self) -> bool {
        !matches!(self.phase, PongPhase::ModeSelect | PongPhase::GameOver { .. })
    }

    fn move_paddle(y: f32, dir: f32, speed: f32, dt: f32) -> f32 {
        (y + dir * speed * dt).clamp(0.0, SIZE - PADDLE_HEIGHT)
    }

    /// Bend the ball's vertical velocity by where it struck the paddle.
    fn add_spin(&mut self, ball_row: i32, paddle_y: f32) {
        let hit = (ball_row as f32 - paddle_y) / PADDLE_HEIGHT - 0.5;
        let max_vy = BALL_SPEED * 0.8;
        self.ball_vy = (self.ball_vy + hit * BALL_SPEED * 0.5).clamp(-max_vy, max_vy);
    }

    fn paddle_covers(paddle_y: f32, row: i32) -> bool {
        let top = paddle_y;
        let row = row as f32;
        top <= row && row < top + PADDLE_HEIGHT
    }

    fn award_point(&mut self, by: Side) {
        let score = match by {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *score += 1;
        let won = *score >= WINNING_SCORE;
        emit(&mut self.effects, SoundEffect::Score);
        if won {
            self.winner = Some(by);
            emit(&mut self.effects, SoundEffect::Win);
        }
        self.phase = PongPhase::Scored { by, timer: SCORE_FLASH_SECS };
    }

    fn step_ball(&mut self, dt: f32) {
        self.ball_x += self.ball_vx * dt;
        self.ball_y += self.ball_vy * dt;

        let cell = (self.ball_x as i32, self.ball_y as i32);
        if self.trail.last() != Some(&cell) {
            if self.trail.is_full() {
                self.trail.remove(0);
            }
            self.trail.push(cell);
        }

        if self.ball_y <= 0.0 || self.ball_y >= SIZE - 1.0 {
            self.ball_vy = -self.ball_vy;
            self.ball_y = self.ball_y.clamp(0.0, SIZE - 1.0);
            emit(&mut self.effects, SoundEffect::Wall);
        }

        let col = self.ball_x as i32;
        let row = self.ball_y as i32;

        if col <= 1 && Self::paddle_covers(self.left_y, row) {
            self.ball_vx = self.ball_vx.abs();
            self.ball_x = 2.0;
            self.add_spin(row, self.left_y);
            emit(&mut self.effects, SoundEffect::PaddleHit);
        }
        if col >= GRID_SIZE as i32 - 2 && Self::paddle_covers(self.right_y, row) {
            self.ball_vx = -self.ball_vx.abs();
            self.ball_x = SIZE - 3.0;
            self.add_spin(row, self.right_y);
            emit(&mut self.effects, SoundEffect::PaddleHit);
        }

        if self.ball_x < 0.0 {
            self.award_point(Side::Right);
        } else if self.ball_x >= SIZE {
            self.award_point(Side::Left);
        }
    }

    fn step_ai(&mut self, dt: f32) {
        let target = self.ball_y - PADDLE_HEIGHT / 2.0 + self.rng.range_f32(-AI_JITTER, AI_JITTER);
        let diff = target - self.right_y;
        if diff.abs() > AI_DEADZONE {
            let dir = diff.signum();
            self.right_y = Self::move_paddle(self.right_y, dir, PADDLE_SPEED * AI_SPEED, dt);
        }
    }

    fn step(&mut self, dt: f32) {
        if self.paddles_movable() {
            self.left_y = Self::move_paddle(self.left_y, self.left_dir, PADDLE_SPEED, dt);
            if self.two_player {
                self.right_y = Self::move_paddle(self.right_y, self.right_dir, PADDLE_SPEED, dt);
            }
        }

        match self.phase {
            PongPhase::ModeSelect | PongPhase::Ready | PongPhase::GameOver { .. } => {}
            PongPhase::Scored { by, timer } => {
                let timer = timer - dt;
                if timer > 0.0 {
                    self.phase = PongPhase::Scored { by, timer };
                } else if let Some(winner) = self.winner {
                    self.phase = PongPhase::GameOver { winner };
                } else {
                    self.reset_ball();
                    self.phase = PongPhase::Playing;
                }
            }
            PongPhase::Playing => {
                self.step_ball(dt);
                if self.phase == PongPhase::Playing && !self.two_player {
                    self.step_ai(dt);
                }
            }
        }
    }

    fn render_mode_select(&self, grid: &mut GridBuffer) {
        let pick = |i: u8| {
            if self.mode_index == i {
                Rgb::new(0, 255, 0)
            } else {
                Rgb::new(100, 100, 100)
            }
        };
        grid.render_text("MODE", 2, 2, Rgb::new(255, 255, 0), 1);
        grid.render_text("1P", 2, 8, pick(0), 1);
        grid.render_text("2P", 11, 8, pick(1), 1);
        grid.render_text("LR", 5, 14, Rgb::new(150, 150, 150), 1);
    }

    fn render_scored(&self, grid: &mut GridBuffer, by: Side, timer: f32) {
        let flash = (timer * 10.0) as i32 % 2 == 1;
        let half = GRID_SIZE / 2;
        let (bright, dim, cols) = match by {
            Side::Left => (LEFT_COLOR, Rgb::new(0, 150, 150), 0..half),
            Side::Right => (RIGHT_COLOR, Rgb::new(150, 0, 150), half..GRID_SIZE),
        };
        let base = if flash { bright } else { dim };
        for x in cols {
            let k = match by {
                Side::Left => (half - x) as u32,
                Side::Right => (x - half) as u32,
            };
            grid.fill_rect(x as i32, 0, 1, GRID_SIZE as i32, base.scale(k, half as u32));
        }
        grid.render_number(self.left_score as i64, 1, 8, WHITE, 2);
        grid.render_number(self.right_score as i64, 11, 8, WHITE, 2);
    }

    fn render_game_over(&self, grid: &mut GridBuffer, winner: Side) {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let hue = (x * 10 + y * 10) as f32 + self.elapsed * 100.0;
                grid.set_pixel(x as i32, y as i32, Rgb::from_hsv(hue, 0.5, 0.3));
            }
        }
        match winner {
            Side::Left => grid.render_text("P1", 2, 2, LEFT_COLOR, 2),
            Side::Right => grid.render_text("P2", 2, 2, RIGHT_COLOR, 2),
        }
        grid.render_text("WINS", 2, 13, YELLOW, 1);
    }

    fn render_court(&self, grid: &mut GridBuffer) {
        for y in (0..GRID_SIZE as i32).step_by(2) {
            grid.set_pixel(GRID_SIZE as i32 / 2, y, Rgb::new(50, 50, 50));
        }
        grid.render_number(self.left_score as i64, 3, 1, LEFT_COLOR, 1);
        grid.render_number(self.right_score as i64, 13, 1, RIGHT_COLOR, 1);

        let h = PADDLE_HEIGHT as i32;
        grid.fill_rect(0, self.left_y as i32, 1, h, LEFT_COLOR);
        grid.fill_rect(GRID_SIZE as i32 - 1, self.right_y as i32, 1, h, RIGHT_COLOR);

        let n = self.trail.len();
        for (i, &(tx, ty)) in self.trail.iter().enumerate() {
            let intensity = (i + 1) as f32 / n as f32;
            let hue = self.elapsed * 100.0 + i as f32 * 30.0;
            grid.set_pixel(tx, ty, Rgb::from_hsv(hue, 1.0, intensity * 0.6));
        }
        grid.set_pixel(self.ball_x as i32, self.ball_y as i32, WHITE);
    }
}

impl Screen for Pong {
    fn update(&mut self, dt: f32) {
        let (steps, step_dt) = substeps(dt, STEP, MAX_STEPS);
        for _ in 0..steps {
            self.step(step_dt);
        }
        self.elapsed += step_dt * steps as f32;
    }

    fn render(&self, grid: &mut GridBuffer) {
        grid.clear_black();
        match self.phase {
            PongPhase::ModeSelect => self.render_mode_select(grid),
            PongPhase::Scored { by, timer } => self.render_scored(grid, by, timer),
            PongPhase::GameOver { winner } => self.render_game_over(grid, winner),
            PongPhase::Ready | PongPhase::Playing => self.render_court(grid),
        }
    }

    fn handle_input(&mut self, held: &HeldKeys, events: &[Key]) {
        for &key in events {
            if key == Key::Escape {
                self.running = false;
                return;
            }
            match self.phase {
                PongPhase::ModeSelect => match key {
                    Key::Left => self.mode_index = 0,
                    Key::Right => self.mode_index = 1,
                    k if k.is_confirm() => {
                        self.two_player = self.mode_index == 1;
                        self.reset_ball();
                        self.phase = PongPhase::Ready;
                    }
                    _ => {}
                },
                PongPhase::Ready if key.is_confirm() => self.phase = PongPhase::Playing,
                PongPhase::GameOver { .. } if key.is_confirm() => self.restart(),
                _ => {}
            }
        }

        let axis = |up: Key, down: Key| {
            (held.contains(down) as i8 - held.contains(up) as i8) as f32
        };
        self.left_dir = axis(Key::Char('w'), Key::Char('s'));
        self.right_dir = if self.two_player {
            axis(Key::Up, Key::Down)
        } else {
            0.0
        };
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn take_effects(&mut self) -> EffectQueue {
        std::mem::take(&mut self.effects)
    }
}

//! Two-on-two basketball: you and a computer teammate (red) against two
//! computer players (white).
//!
//! WASD moves your player, SPACE shoots and P passes while you hold the
//! ball. Baskets are worth 2; the first team to 11 wins. SPACE starts and
//! restarts, ESC leaves.

use crate::registry::{logo_px, LogoPixel};
use crate::screen::{emit, substeps, EffectQueue, Screen, SoundEffect};
use crate::types::{HeldKeys, Key, Rgb, GRID_SIZE};
use crate::{GridBuffer, SimpleRng};

const SIZE: f32 = GRID_SIZE as f32;
/// Players stay off the outer ring of LEDs.
const MIN_POS: f32 = 1.0;
const MAX_POS: f32 = SIZE - 2.0;

const PLAYER_SPEED: f32 = 9.0;

const AI_INTERVAL: f32 = 0.06;
const AI_STEP: f32 = 0.55;
const AI_OFFENSE_STEP: f32 = 0.45;
const AI_DEFEND_STEP: f32 = 0.5;
/// Closer than this to its target, an AI player stands still.
const AI_ARRIVED: f32 = 0.5;

const SHOOT_RANGE: f32 = 6.0;
const CROWD_RANGE: f32 = 3.0;
const PICKUP_RANGE: f32 = 1.5;
const STEAL_RANGE: f32 = 1.5;
const STEAL_CHANCE: f32 = 0.08;
const SHOT_CHANCE: f32 = 0.7;

const SHOT_SECS: f32 = 0.7;
const PASS_SECS: f32 = 0.45;

const POINTS_PER_BASKET: u32 = 2;
const WINNING_SCORE: u32 = 11;
const SCORE_FLASH_SECS: f32 = 1.0;

const STEP: f32 = 1.0 / 60.0;
const MAX_STEPS: u32 = 15;

/// The player the keyboard drives.
pub const USER: usize = 0;

const COURT: Rgb = Rgb::new(20, 50, 20);
const LINE: Rgb = Rgb::WHITE;
const HOOP: Rgb = Rgb::new(255, 100, 0);
const BALL: Rgb = Rgb::new(255, 140, 0);
const BALL_IN_AIR: Rgb = Rgb::new(255, 200, 100);
const RED: Rgb = Rgb::new(200, 30, 45);
const MAROON: Rgb = Rgb::new(150, 20, 35);
const WHITE_TEAM: Rgb = Rgb::new(200, 200, 200);
const WHITE_TEAM_DIM: Rgb = Rgb::new(180, 180, 180);
const RIM: Rgb = HOOP;

const LEFT_HOOP: (f32, f32) = (1.0, (GRID_SIZE / 2) as f32);
const RIGHT_HOOP: (f32, f32) = (SIZE - 2.0, (GRID_SIZE / 2) as f32);

pub const NAME: &str = "BBALL";
pub const HINT: &str = "Basketball: WASD Move | SPACE Shoot | P Pass | ESC Menu";
#[rustfmt::skip]
pub const LOGO: &[LogoPixel] = &[
    logo_px(2, 0, RIM), logo_px(3, 0, RIM), logo_px(4, 0, RIM), logo_px(5, 0, RIM), logo_px(6, 0, RIM), logo_px(7, 0, RIM),
    logo_px(1, 1, RIM), logo_px(4, 1, MAROON), logo_px(5, 1, MAROON), logo_px(8, 1, RIM),
    logo_px(0, 2, RIM), logo_px(3, 2, MAROON), logo_px(4, 2, RED), logo_px(5, 2, RED), logo_px(6, 2, MAROON), logo_px(9, 2, RIM),
    logo_px(2, 3, MAROON), logo_px(3, 3, RED), logo_px(4, 3, RED), logo_px(5, 3, RED), logo_px(6, 3, RED), logo_px(7, 3, MAROON),
    logo_px(1, 4, MAROON), logo_px(2, 4, RED), logo_px(3, 4, RED), logo_px(4, 4, RED), logo_px(5, 4, RED), logo_px(6, 4, RED), logo_px(7, 4, RED), logo_px(8, 4, MAROON),
    logo_px(1, 5, MAROON), logo_px(2, 5, RED), logo_px(3, 5, RED), logo_px(4, 5, RED), logo_px(5, 5, RED), logo_px(6, 5, RED), logo_px(7, 5, RED), logo_px(8, 5, MAROON),
    logo_px(2, 6, MAROON), logo_px(3, 6, RED), logo_px(4, 6, RED), logo_px(5, 6, RED), logo_px(6, 6, RED), logo_px(7, 6, MAROON),
    logo_px(3, 7, MAROON), logo_px(4, 7, RED), logo_px(5, 7, RED), logo_px(6, 7, MAROON),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    /// Attacks the right hoop.
    Red,
    /// Attacks the left hoop.
    White,
}

impl Team {
    fn other(self) -> Self {
        match self {
            Team::Red => Team::White,
            Team::White => Team::Red,
        }
    }

    fn hoop(self) -> (f32, f32) {
        match self {
            Team::Red => RIGHT_HOOP,
            Team::White => LEFT_HOOP,
        }
    }

    /// First player of the team, who takes possession after a reset.
    fn lead(self) -> usize {
        match self {
            Team::Red => 0,
            Team::White => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub team: Team,
    color: Rgb,
}

impl Player {
    const fn new(x: f32, y: f32, team: Team, color: Rgb) -> Self {
        Self { x, y, team, color }
    }

    fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Players 0 and 1 are red, 2 and 3 white; teammates differ in the low bit.
const START: [Player; 4] = [
    Player::new(3.0, 6.0, Team::Red, RED),
    Player::new(3.0, 12.0, Team::Red, MAROON),
    Player::new(15.0, 6.0, Team::White, WHITE_TEAM),
    Player::new(15.0, 12.0, Team::White, WHITE_TEAM_DIM),
];

fn teammate(idx: usize) -> usize {
    idx ^ 1
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throw {
    Shot { shooter: usize },
    Pass { target: usize },
}

impl Throw {
    fn duration(self) -> f32 {
        match self {
            Throw::Shot { .. } => SHOT_SECS,
            Throw::Pass { .. } => PASS_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ball {
    Held(usize),
    Loose { x: f32, y: f32 },
    /// Travelling in a straight line; lands when `progress` reaches 1.
    InAir {
        throw: Throw,
        from: (f32, f32),
        to: (f32, f32),
        progress: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasketballPhase {
    /// Tip-off position, waiting for SPACE.
    Ready,
    Playing,
    /// Flash after a basket; play resets when the timer runs out.
    Scored { by: Team, timer: f32 },
    GameOver { winner: Team },
}

#[derive(Debug, Clone)]
pub struct Basketball {
    phase: BasketballPhase,
    players: [Player; 4],
    ball: Ball,
    red_score: u32,
    white_score: u32,
    move_x: f32,
    move_y: f32,
    ai_timer: f32,
    rng: SimpleRng,
    effects: EffectQueue,
    running: bool,
}

impl Basketball {
    pub fn new(seed: u32) -> Self {
        Self {
            phase: BasketballPhase::Ready,
            players: START,
            ball: Ball::Held(USER),
            red_score: 0,
            white_score: 0,
            move_x: 0.0,
            move_y: 0.0,
            ai_timer: 0.0,
            rng: SimpleRng::new(seed),
            effects: EffectQueue::new(),
            running: true,
        }
    }

    pub fn phase(&self) -> BasketballPhase {
        self.phase
    }

    /// (red, white)
    pub fn scores(&self) -> (u32, u32) {
        (self.red_score, self.white_score)
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn ball_position(&self) -> (f32, f32) {
        match self.ball {
            Ball::Held(idx) => self.players[idx].pos(),
            Ball::Loose { x, y } => (x, y),
            Ball::InAir {
                from, to, progress, ..
            } => (
                from.0 + (to.0 - from.0) * progress,
                from.1 + (to.1 - from.1) * progress,
            ),
        }
    }

    fn winner(&self) -> Option<Team> {
        if self.red_score >= WINNING_SCORE {
            Some(Team::Red)
        } else if self.white_score >= WINNING_SCORE {
            Some(Team::White)
        } else {
            None
        }
    }

    fn reset_positions(&mut self, possession: Team) {
        self.players = START;
        self.ball = Ball::Held(possession.lead());
        self.ai_timer = 0.0;
    }

    fn restart(&mut self) {
        self.red_score = 0;
        self.white_score = 0;
        self.reset_positions(Team::Red);
        self.phase = BasketballPhase::Ready;
    }

    fn throw(&mut self, throw: Throw, from: usize, to: (f32, f32)) {
        self.ball = Ball::InAir {
            throw,
            from: self.players[from].pos(),
            to,
            progress: 0.0,
        };
    }

    fn shoot(&mut self, idx: usize) {
        let hoop = self.players[idx].team.hoop();
        self.throw(Throw::Shot { shooter: idx }, idx, hoop);
        emit(&mut self.effects, SoundEffect::Shoot);
    }

    fn pass(&mut self, idx: usize) {
        let target = teammate(idx);
        let to = self.players[target].pos();
        self.throw(Throw::Pass { target }, idx, to);
        emit(&mut self.effects, SoundEffect::Pass);
    }

    fn land(&mut self, throw: Throw, at: (f32, f32)) {
        match throw {
            Throw::Pass { target } => self.ball = Ball::Held(target),
            Throw::Shot { shooter } => {
                let made = self.rng.next_f32() < SHOT_CHANCE;
                self.finish_shot(shooter, made, at);
            }
        }
    }

    fn finish_shot(&mut self, shooter: usize, made: bool, at: (f32, f32)) {
        if !made {
            self.ball = Ball::Loose { x: at.0, y: at.1 };
            return;
        }
        let team = self.players[shooter].team;
        match team {
            Team::Red => self.red_score += POINTS_PER_BASKET,
            Team::White => self.white_score += POINTS_PER_BASKET,
        }
        emit(&mut self.effects, SoundEffect::Score);
        if self.winner().is_some() {
            emit(&mut self.effects, SoundEffect::Win);
        }
        self.ball = Ball::Loose { x: at.0, y: at.1 };
        self.phase = BasketballPhase::Scored {
            by: team,
            timer: SCORE_FLASH_SECS,
        };
    }

    fn move_towards(&mut self, idx: usize, target: (f32, f32), step: f32) {
        let player = &mut self.players[idx];
        let (dx, dy) = (target.0 - player.x, target.1 - player.y);
        let dist = dx.hypot(dy);
        if dist > AI_ARRIVED {
            player.x = (player.x + dx / dist * step).clamp(MIN_POS, MAX_POS);
            player.y = (player.y + dy / dist * step).clamp(MIN_POS, MAX_POS);
        }
    }

    fn ai_with_ball(&mut self, idx: usize) {
        let me = self.players[idx];
        let hoop = me.team.hoop();
        let crowded = self
            .players
            .iter()
            .any(|p| p.team != me.team && distance(p.pos(), me.pos()) < CROWD_RANGE);
        if crowded {
            self.pass(idx);
        } else if distance(me.pos(), hoop) < SHOOT_RANGE {
            self.shoot(idx);
        } else {
            self.move_towards(idx, hoop, AI_STEP);
        }
    }

    fn ai_offense(&mut self, idx: usize) {
        let target_x = match self.players[idx].team {
            Team::Red => 12.0,
            Team::White => 6.0,
        };
        let target_y = if idx % 2 == 0 { 9.0 } else { 14.0 };
        self.move_towards(idx, (target_x, target_y), AI_OFFENSE_STEP);
    }

    fn ai_defend(&mut self, idx: usize, carrier: usize) {
        let target = self.players[carrier].pos();
        self.move_towards(idx, target, AI_DEFEND_STEP);
        if distance(self.players[idx].pos(), target) < STEAL_RANGE
            && self.rng.next_f32() < STEAL_CHANCE
        {
            self.ball = Ball::Held(idx);
            emit(&mut self.effects, SoundEffect::Steal);
        }
    }

    fn step_ai(&mut self) {
        for idx in 0..self.players.len() {
            if idx == USER {
                continue;
            }
            let ball = self.ball;
            match ball {
                Ball::Held(holder) if holder == idx => self.ai_with_ball(idx),
                Ball::Held(holder) if self.players[holder].team == self.players[idx].team => {
                    self.ai_offense(idx)
                }
                Ball::Held(holder) => self.ai_defend(idx, holder),
                Ball::Loose { .. } | Ball::InAir { .. } => {
                    let target = self.ball_position();
                    self.move_towards(idx, target, AI_STEP);
                }
            }
        }
    }

    fn step_play(&mut self, dt: f32) {
        let user = &mut self.players[USER];
        user.x = (user.x + self.move_x * PLAYER_SPEED * dt).clamp(MIN_POS, MAX_POS);
        user.y = (user.y + self.move_y * PLAYER_SPEED * dt).clamp(MIN_POS, MAX_POS);

        if let Ball::InAir {
            throw,
            from,
            to,
            progress,
        } = self.ball
        {
            let progress = progress + dt / throw.duration();
            if progress >= 1.0 {
                self.land(throw, to);
                if self.phase != BasketballPhase::Playing {
                    return;
                }
            } else {
                self.ball = Ball::InAir {
                    throw,
                    from,
                    to,
                    progress,
                };
            }
        }

        if let Ball::Loose { x, y } = self.ball {
            if let Some(idx) = self
                .players
                .iter()
                .position(|p| distance(p.pos(), (x, y)) < PICKUP_RANGE)
            {
                self.ball = Ball::Held(idx);
            }
        }

        self.ai_timer += dt;
        if self.ai_timer >= AI_INTERVAL {
            self.ai_timer = 0.0;
            self.step_ai();
        }
    }

    fn step(&mut self, dt: f32) {
        match self.phase {
            BasketballPhase::Ready | BasketballPhase::GameOver { .. } => {}
            BasketballPhase::Scored { by, timer } => {
                let timer = timer - dt;
                if timer > 0.0 {
                    self.phase = BasketballPhase::Scored { by, timer };
                } else if let Some(winner) = self.winner() {
                    self.phase = BasketballPhase::GameOver { winner };
                } else {
                    self.reset_positions(by.other());
                    self.phase = BasketballPhase::Playing;
                }
            }
            BasketballPhase::Playing => self.step_play(dt),
        }
    }

    fn render_court(&self, grid: &mut GridBuffer) {
        let n = GRID_SIZE as i32;
        grid.fill_rect(n / 2, 0, 1, n, LINE);
        for (hx, hy) in [LEFT_HOOP, RIGHT_HOOP] {
            grid.fill_rect(hx as i32, hy as i32 - 1, 1, 3, HOOP);
        }

        for (idx, p) in self.players.iter().enumerate() {
            let color = if idx == USER {
                p.color.saturating_add(50)
            } else {
                p.color
            };
            grid.set_pixel(p.x as i32, p.y as i32, color);
        }

        let (bx, by) = self.ball_position();
        let color = match self.ball {
            Ball::InAir { .. } => BALL_IN_AIR,
            _ => BALL,
        };
        grid.set_pixel(bx as i32, by as i32, color);

        grid.render_number(self.red_score as i64, 2, 1, Rgb::WHITE, 1);
        grid.render_number(self.white_score as i64, 14, 1, Rgb::WHITE, 1);
    }

    fn render_scored(&self, grid: &mut GridBuffer, by: Team, timer: f32) {
        let flash = (timer * 8.0) as i32 % 2 == 1;
        let color = match (by, flash) {
            (Team::Red, true) => RED,
            (Team::Red, false) => Rgb::new(100, 15, 22),
            (Team::White, true) => WHITE_TEAM,
            (Team::White, false) => Rgb::new(100, 100, 100),
        };
        grid.clear(color);
        grid.render_number(self.red_score as i64, 1, 8, Rgb::WHITE, 2);
        grid.render_number(self.white_score as i64, 11, 8, Rgb::WHITE, 2);
    }

    fn render_game_over(&self, grid: &mut GridBuffer, winner: Team) {
        let (bg, text) = match winner {
            Team::Red => (RED, "RED"),
            Team::White => (WHITE_TEAM, "WHT"),
        };
        grid.clear(bg);
        grid.render_text(text, 4, 4, Rgb::new(255, 255, 0), 1);
        grid.render_text("WINS", 2, 11, Rgb::WHITE, 1);
    }
}

impl Screen for Basketball {
    fn update(&mut self, dt: f32) {
        let (steps, step_dt) = substeps(dt, STEP, MAX_STEPS);
        for _ in 0..steps {
            self.step(step_dt);
        }
    }

    fn render(&self, grid: &mut GridBuffer) {
        grid.clear(COURT);
        match self.phase {
            BasketballPhase::Scored { by, timer } => self.render_scored(grid, by, timer),
            BasketballPhase::GameOver { winner } => self.render_game_over(grid, winner),
            BasketballPhase::Ready | BasketballPhase::Playing => self.render_court(grid),
        }
    }

    fn handle_input(&mut self, held: &HeldKeys, events: &[Key]) {
        for &key in events {
            if key == Key::Escape {
                self.running = false;
                return;
            }
            match self.phase {
                BasketballPhase::Ready if key.is_confirm() => {
                    self.phase = BasketballPhase::Playing;
                }
                BasketballPhase::GameOver { .. } if key.is_confirm() => self.restart(),
                BasketballPhase::Playing if self.ball == Ball::Held(USER) => match key {
                    Key::Space => self.shoot(USER),
                    Key::Char('p') => self.pass(USER),
                    _ => {}
                },
                _ => {}
            }
        }

        let axis = |neg: Key, pos: Key| (held.contains(pos) as i8 - held.contains(neg) as i8) as f32;
        if self.phase == BasketballPhase::Playing {
            self.move_x = axis(Key::Char('a'), Key::Char('d'));
            self.move_y = axis(Key::Char('w'), Key::Char('s'));
        } else {
            self.move_x = 0.0;
            self.move_y = 0.0;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn take_effects(&mut self) -> EffectQueue {
        std::mem::take(&mut self.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(game: &mut Basketball, keys: &[Key]) {
        game.handle_input(&HeldKeys::new(), keys);
    }

    fn started(seed: u32) -> Basketball {
        let mut game = Basketball::new(seed);
        press(&mut game, &[Key::Space]);
        assert_eq!(game.phase(), BasketballPhase::Playing);
        game
    }

    fn run_out_flash(game: &mut Basketball) {
        for _ in 0..100 {
            if !matches!(game.phase(), BasketballPhase::Scored { .. }) {
                return;
            }
            game.update(0.05);
        }
        panic!("score flash never ended");
    }

    #[test]
    fn ready_waits_for_confirm() {
        let mut game = Basketball::new(1);
        game.update(1.0);
        assert_eq!(game.phase(), BasketballPhase::Ready);
        assert_eq!(game.players(), &START);
        press(&mut game, &[Key::Enter]);
        assert_eq!(game.phase(), BasketballPhase::Playing);
        // Starting does not also shoot.
        assert_eq!(game.ball(), Ball::Held(USER));
    }

    #[test]
    fn escape_exits_from_every_phase() {
        let phases = [
            BasketballPhase::Ready,
            BasketballPhase::Playing,
            BasketballPhase::Scored { by: Team::White, timer: 0.5 },
            BasketballPhase::GameOver { winner: Team::Red },
        ];
        for phase in phases {
            let mut game = Basketball::new(2);
            game.phase = phase;
            press(&mut game, &[Key::Escape]);
            assert!(!game.is_running(), "{phase:?}");
        }
    }

    #[test]
    fn held_d_runs_to_the_sideline_and_stops() {
        let mut game = started(3);
        let held = HeldKeys::from_keys(&[Key::Char('d')]);
        for _ in 0..20 {
            game.handle_input(&held, &[]);
            game.update(0.2);
        }
        assert_eq!(game.players()[USER].x, MAX_POS);
        assert_eq!(game.players()[USER].y, START[USER].y);
    }

    #[test]
    fn space_shoots_only_with_the_ball() {
        let mut game = started(4);
        game.ball = Ball::Held(2);
        press(&mut game, &[Key::Space, Key::Char('p')]);
        assert_eq!(game.ball(), Ball::Held(2));

        game.ball = Ball::Held(USER);
        press(&mut game, &[Key::Space]);
        match game.ball() {
            Ball::InAir { throw, to, .. } => {
                assert_eq!(throw, Throw::Shot { shooter: USER });
                assert_eq!(to, RIGHT_HOOP);
            }
            other => panic!("expected a shot in the air, got {other:?}"),
        }
        assert!(game.take_effects().contains(&SoundEffect::Shoot));
    }

    #[test]
    fn pass_lands_with_teammate() {
        let mut game = started(5);
        press(&mut game, &[Key::Char('p')]);
        assert!(matches!(game.ball(), Ball::InAir { throw: Throw::Pass { target: 1 }, .. }));
        game.update(0.25);
        game.update(0.25);
        assert_eq!(game.ball(), Ball::Held(1));
    }

    #[test]
    fn basket_scores_two_and_hands_ball_to_other_team() {
        let mut game = started(6);
        game.finish_shot(USER, true, RIGHT_HOOP);
        assert_eq!(game.scores(), (2, 0));
        assert!(matches!(game.phase(), BasketballPhase::Scored { by: Team::Red, .. }));
        assert!(game.take_effects().contains(&SoundEffect::Score));

        run_out_flash(&mut game);
        assert_eq!(game.phase(), BasketballPhase::Playing);
        assert_eq!(game.ball(), Ball::Held(2));
    }

    #[test]
    fn missed_shot_leaves_ball_loose_at_hoop() {
        let mut game = started(7);
        game.finish_shot(2, false, LEFT_HOOP);
        assert_eq!(game.scores(), (0, 0));
        assert_eq!(game.ball(), Ball::Loose { x: LEFT_HOOP.0, y: LEFT_HOOP.1 });
        assert_eq!(game.phase(), BasketballPhase::Playing);
    }

    #[test]
    fn loose_ball_is_picked_up_nearby() {
        let mut game = started(8);
        game.ball = Ball::Loose { x: 3.4, y: 6.0 };
        game.update(STEP);
        assert_eq!(game.ball(), Ball::Held(USER));
    }

    #[test]
    fn defenders_close_in_on_the_carrier() {
        let mut game = started(9);
        let before = distance(game.players()[2].pos(), game.players()[USER].pos());
        game.update(0.2);
        game.update(0.1);
        let after = distance(game.players()[2].pos(), game.players()[USER].pos());
        assert!(after < before);
    }

    #[test]
    fn eleven_points_win_and_space_restarts() {
        let mut game = started(10);
        game.red_score = 10;
        game.finish_shot(USER, true, RIGHT_HOOP);
        assert!(game.take_effects().contains(&SoundEffect::Win));
        run_out_flash(&mut game);
        assert_eq!(game.phase(), BasketballPhase::GameOver { winner: Team::Red });

        game.update(1.0);
        press(&mut game, &[Key::Space]);
        assert_eq!(game.phase(), BasketballPhase::Ready);
        assert_eq!(game.scores(), (0, 0));
        assert_eq!(game.ball(), Ball::Held(USER));
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = started(11);
        let mut b = started(11);
        for _ in 0..300 {
            a.update(1.0 / 60.0);
            b.update(1.0 / 60.0);
        }
        assert_eq!(a.players(), b.players());
        assert_eq!(a.ball(), b.ball());
        assert_eq!(a.scores(), b.scores());
    }

    #[test]
    fn long_stall_keeps_everyone_on_court() {
        let mut game = started(12);
        for _ in 0..20 {
            game.update(10.0);
        }
        for p in game.players() {
            assert!((MIN_POS..=MAX_POS).contains(&p.x));
            assert!((MIN_POS..=MAX_POS).contains(&p.y));
        }
    }

    #[test]
    fn render_covers_every_phase() {
        let mut game = started(13);
        let mut grid = GridBuffer::new();
        game.render(&mut grid);
        assert_eq!(grid.pixel(1, 9), HOOP);
        assert_eq!(grid.pixel(17, 8), HOOP);
        assert_eq!(grid.pixel(9, 18), LINE);
        // The held ball sits on top of its carrier.
        assert_eq!(grid.pixel(3, 6), BALL);
        assert_eq!(grid.pixel(3, 12), MAROON);

        game.phase = BasketballPhase::Scored { by: Team::White, timer: 0.3 };
        game.render(&mut grid);
        assert!(!grid.pixel(0, 18).is_off());
        game.phase = BasketballPhase::GameOver { winner: Team::White };
        game.render(&mut grid);
        assert_eq!(grid.lit_count(), 361);
    }
}

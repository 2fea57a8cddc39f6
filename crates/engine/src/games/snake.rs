//! Snake on a wrapping 19×19 board.
//!
//! Arrows steer, SPACE restarts after a crash, ESC leaves. Eating grows the
//! snake by one; running into its own body ends the game.

use std::collections::VecDeque;

use crate::registry::{logo_px, LogoPixel};
use crate::screen::{emit, EffectQueue, Screen, SoundEffect};
use crate::types::{HeldKeys, Key, Rgb, CELL_COUNT, GRID_SIZE};
use crate::{GridBuffer, SimpleRng};

const MOVES_PER_SEC: f32 = 8.0;
/// Moves applied per update at most; time beyond that is dropped.
const MAX_MOVES_PER_UPDATE: u32 = 4;

const GREEN: Rgb = Rgb::new(0, 255, 0);
const LIME: Rgb = Rgb::new(150, 255, 0);

pub const NAME: &str = "SNAKE";
pub const HINT: &str = "Snake: ARROWS Move | SPACE Restart | ESC Menu";
#[rustfmt::skip]
pub const LOGO: &[LogoPixel] = &[
    logo_px(5, 1, GREEN), logo_px(6, 1, LIME), logo_px(7, 1, GREEN),
    logo_px(4, 2, LIME), logo_px(5, 2, GREEN),
    logo_px(4, 3, LIME), logo_px(5, 3, GREEN), logo_px(6, 3, LIME),
    logo_px(6, 4, GREEN), logo_px(7, 4, LIME),
    logo_px(5, 5, GREEN), logo_px(6, 5, LIME), logo_px(7, 5, GREEN),
];

pub type Pos = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> Pos {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Tail at the front, head at the back.
    body: VecDeque<Pos>,
    direction: Direction,
    next_direction: Direction,
    food: Pos,
    score: u32,
    game_over: bool,
    accum: f32,
    rng: SimpleRng,
    effects: EffectQueue,
    running: bool,
}

impl Snake {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            body: VecDeque::with_capacity(CELL_COUNT),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: (0, 0),
            score: 0,
            game_over: false,
            accum: 0.0,
            rng: SimpleRng::new(seed),
            effects: EffectQueue::new(),
            running: true,
        };
        game.reset();
        game
    }

    fn reset(&mut self) {
        let c = (GRID_SIZE / 2) as i32;
        self.body.clear();
        self.body.extend([(c - 1, c), (c, c), (c + 1, c)]);
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.game_over = false;
        self.accum = 0.0;
        self.spawn_food();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn head(&self) -> Pos {
        self.body.back().copied().unwrap_or((0, 0))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn food(&self) -> Pos {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Pick a uniformly random free cell without building a list of them.
    fn spawn_food(&mut self) {
        let free = CELL_COUNT - self.body.len();
        if free == 0 {
            self.food = (0, 0);
            return;
        }
        let mut nth = self.rng.next_range(free as u32) as usize;
        for y in 0..GRID_SIZE as i32 {
            for x in 0..GRID_SIZE as i32 {
                if self.body.contains(&(x, y)) {
                    continue;
                }
                if nth == 0 {
                    self.food = (x, y);
                    return;
                }
                nth -= 1;
            }
        }
    }

    fn set_next_direction(&mut self, dir: Direction) {
        if dir == self.direction.opposite() {
            return;
        }
        self.next_direction = dir;
        emit(&mut self.effects, SoundEffect::Turn);
    }

    fn step(&mut self) {
        self.direction = self.next_direction;
        let (hx, hy) = self.head();
        let (dx, dy) = self.direction.delta();
        let n = GRID_SIZE as i32;
        let next = ((hx + dx).rem_euclid(n), (hy + dy).rem_euclid(n));

        let grows = next == self.food;
        let tail = self.body.front().copied();
        let hits_body = self.body.contains(&next);
        // The tail cell is vacated this step unless the snake grows.
        if hits_body && !(Some(next) == tail && !grows) {
            self.game_over = true;
            emit(&mut self.effects, SoundEffect::Die);
            return;
        }

        self.body.push_back(next);
        if grows {
            self.score += 1;
            emit(&mut self.effects, SoundEffect::Eat);
            self.spawn_food();
        } else {
            self.body.pop_front();
        }
    }
}

impl Screen for Snake {
    fn update(&mut self, dt: f32) {
        if self.game_over || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let interval = 1.0 / MOVES_PER_SEC;
        self.accum += dt;
        let mut moves = 0;
        while self.accum >= interval && !self.game_over {
            if moves == MAX_MOVES_PER_UPDATE {
                self.accum = 0.0;
                break;
            }
            self.accum -= interval;
            self.step();
            moves += 1;
        }
    }

    fn render(&self, grid: &mut GridBuffer) {
        grid.clear_black();
        grid.set_pixel(self.food.0, self.food.1, Rgb::new(255, 60, 60));

        let head = self.body.len().saturating_sub(1);
        for (i, &(x, y)) in self.body.iter().enumerate() {
            let color = if i == head {
                GREEN
            } else {
                Rgb::new(0, 150, 0)
            };
            grid.set_pixel(x, y, color);
        }

        grid.render_text("S", 0, 0, Rgb::new(120, 255, 120), 1);
        grid.render_number(self.score as i64, 4, 0, Rgb::WHITE, 1);

        if self.game_over {
            grid.render_text("OVER", 2, 7, Rgb::new(255, 255, 0), 1);
            grid.render_text("SP", 6, 13, Rgb::new(150, 150, 150), 1);
        }
    }

    fn handle_input(&mut self, _held: &HeldKeys, events: &[Key]) {
        for &key in events {
            if key == Key::Escape {
                self.running = false;
                return;
            }
            if self.game_over {
                if key == Key::Space {
                    self.reset();
                }
                continue;
            }
            if let Some(dir) = Direction::from_key(key) {
                self.set_next_direction(dir);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn place(game: &mut Snake, cells: &[Pos], dir: Direction) {
        game.body.clear();
        game.body.extend(cells.iter().copied());
        game.direction = dir;
        game.next_direction = dir;
    }

    #[test]
    fn reverse_turn_is_ignored() {
        let mut game = Snake::new(1);
        game.handle_input(&HeldKeys::new(), &[Key::Left]);
        assert_eq!(game.next_direction, Direction::Right);
        game.handle_input(&HeldKeys::new(), &[Key::Up]);
        assert_eq!(game.next_direction, Direction::Up);
    }

    #[test]
    fn step_moves_head_without_growing() {
        let mut game = Snake::new(2);
        game.food = (0, 0);
        let len = game.len();
        let (hx, hy) = game.head();
        game.step();
        assert_eq!(game.len(), len);
        assert_eq!(game.head(), (hx + 1, hy));
        assert!(!game.is_game_over());
    }

    #[test]
    fn food_never_lands_on_snake() {
        let mut game = Snake::new(3);
        for _ in 0..200 {
            game.spawn_food();
            assert!(!game.body.contains(&game.food()));
        }
    }

    #[test]
    fn edges_wrap_around() {
        let mut game = Snake::new(4);
        place(&mut game, &[(17, 10), (18, 10)], Direction::Right);
        game.food = (5, 5);
        game.step();
        assert!(!game.is_game_over());
        assert_eq!(game.head(), (0, 10));

        place(&mut game, &[(3, 1), (3, 0)], Direction::Up);
        game.step();
        assert_eq!(game.head(), (3, 18));
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut game = Snake::new(5);
        let (hx, hy) = game.head();
        game.food = (hx + 1, hy);
        game.step();
        assert_eq!(game.len(), 4);
        assert_eq!(game.score(), 1);
        assert!(game.take_effects().contains(&SoundEffect::Eat));
    }

    #[test]
    fn biting_body_ends_game_and_space_restarts() {
        let mut game = Snake::new(6);
        // A hook: the head at (5,5) turning down runs into (5,6).
        place(
            &mut game,
            &[(4, 7), (5, 7), (5, 6), (4, 6), (4, 5), (5, 5)],
            Direction::Down,
        );
        game.food = (0, 0);
        game.step();
        assert!(game.is_game_over());

        game.handle_input(&HeldKeys::new(), &[Key::Space]);
        assert!(!game.is_game_over());
        assert_eq!(game.len(), 3);
    }

    #[test]
    fn chasing_the_tail_is_allowed() {
        let mut game = Snake::new(7);
        place(&mut game, &[(5, 6), (6, 6), (6, 5), (5, 5)], Direction::Down);
        game.food = (0, 0);
        game.step();
        assert!(!game.is_game_over());
        assert_eq!(game.head(), (5, 6));
    }

    #[test]
    fn long_stall_moves_a_bounded_number_of_cells() {
        let mut game = Snake::new(8);
        game.food = (0, 0);
        let (hx, _) = game.head();
        game.update(10.0);
        let (nx, _) = game.head();
        assert_eq!((nx - hx).rem_euclid(GRID_SIZE as i32), MAX_MOVES_PER_UPDATE as i32);
    }

    #[test]
    fn escape_leaves_even_after_game_over() {
        let mut game = Snake::new(9);
        game.game_over = true;
        game.handle_input(&HeldKeys::new(), &[Key::Escape]);
        assert!(!game.is_running());
    }
}

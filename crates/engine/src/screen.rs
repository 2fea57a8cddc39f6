//! The contract every screen (boot, menu, game) implements.

use arrayvec::ArrayVec;

use crate::boot::BootScreen;
use crate::games::{Basketball, Flappy, Pong, Snake};
use crate::menu::MenuScreen;
use crate::types::{HeldKeys, Key};
use crate::GridBuffer;

/// Sound cues a screen can request. Playback is fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    PaddleHit,
    Wall,
    Score,
    Win,
    Eat,
    Die,
    Flap,
    Turn,
    Shoot,
    Pass,
    Steal,
    MenuMove,
    MenuSelect,
    Toggle,
}

impl SoundEffect {
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "paddle_hit",
            SoundEffect::Wall => "wall",
            SoundEffect::Score => "score",
            SoundEffect::Win => "win",
            SoundEffect::Eat => "eat",
            SoundEffect::Die => "die",
            SoundEffect::Flap => "flap",
            SoundEffect::Turn => "turn",
            SoundEffect::Shoot => "shoot",
            SoundEffect::Pass => "pass",
            SoundEffect::Steal => "steal",
            SoundEffect::MenuMove => "menu_move",
            SoundEffect::MenuSelect => "menu_select",
            SoundEffect::Toggle => "toggle",
        }
    }
}

pub const MAX_EFFECTS_PER_FRAME: usize = 16;

pub type EffectQueue = ArrayVec<SoundEffect, MAX_EFFECTS_PER_FRAME>;

/// Queue an effect, dropping it if the frame's queue is already full.
#[inline]
pub(crate) fn emit(queue: &mut EffectQueue, effect: SoundEffect) {
    let _ = queue.try_push(effect);
}

/// One unit of interactive content driven by the console.
///
/// Per frame the console calls, in order: [`handle_input`](Screen::handle_input),
/// [`update`](Screen::update), [`is_running`](Screen::is_running) and finally
/// [`render`](Screen::render) on whichever screen is current after transitions.
pub trait Screen {
    /// Advance the simulation by `dt` seconds. Must tolerate large `dt`.
    fn update(&mut self, dt: f32);

    /// Repaint the whole grid. Never mutates screen state.
    fn render(&self, grid: &mut GridBuffer);

    /// `held` is the set of keys currently down (continuous movement),
    /// `events` are this frame's key-down transitions (one-shot actions).
    fn handle_input(&mut self, held: &HeldKeys, events: &[Key]);

    /// `false` once the screen wants the console to take over.
    fn is_running(&self) -> bool;

    /// Drain sound cues raised since the last call.
    fn take_effects(&mut self) -> EffectQueue {
        EffectQueue::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Boot,
    Menu,
    Pong,
    Snake,
    Flappy,
    Basketball,
}

/// The closed set of screens the console can host.
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    Boot(BootScreen),
    Menu(MenuScreen),
    Pong(Pong),
    Snake(Snake),
    Flappy(Flappy),
    Basketball(Basketball),
}

impl ActiveScreen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            ActiveScreen::Boot(_) => ScreenKind::Boot,
            ActiveScreen::Menu(_) => ScreenKind::Menu,
            ActiveScreen::Pong(_) => ScreenKind::Pong,
            ActiveScreen::Snake(_) => ScreenKind::Snake,
            ActiveScreen::Flappy(_) => ScreenKind::Flappy,
            ActiveScreen::Basketball(_) => ScreenKind::Basketball,
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Boot(s) => s,
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Pong(s) => s,
            ActiveScreen::Snake(s) => s,
            ActiveScreen::Flappy(s) => s,
            ActiveScreen::Basketball(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Boot(s) => s,
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Pong(s) => s,
            ActiveScreen::Snake(s) => s,
            ActiveScreen::Flappy(s) => s,
            ActiveScreen::Basketball(s) => s,
        }
    }
}

impl Screen for ActiveScreen {
    fn update(&mut self, dt: f32) {
        self.as_screen_mut().update(dt);
    }

    fn render(&self, grid: &mut GridBuffer) {
        self.as_screen().render(grid);
    }

    fn handle_input(&mut self, held: &HeldKeys, events: &[Key]) {
        self.as_screen_mut().handle_input(held, events);
    }

    fn is_running(&self) -> bool {
        self.as_screen().is_running()
    }

    fn take_effects(&mut self) -> EffectQueue {
        self.as_screen_mut().take_effects()
    }
}

/// Split a frame delta into at most `max_steps` equal sub-steps no longer than
/// `max_step` seconds. Returns `(steps, step_dt)`; a zero delta yields one
/// zero-length step so per-step checks still run.
pub(crate) fn substeps(dt: f32, max_step: f32, max_steps: u32) -> (u32, f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let wanted = (dt / max_step).ceil() as u32;
    let steps = wanted.clamp(1, max_steps);
    let step_dt = (dt / steps as f32).min(max_step);
    (steps, step_dt)
}

//! Console state manager - owns the current screen and the visual style
//!
//! The console walks BOOT → MENU → PLAYING → MENU. Each [`Console::tick`]:
//!
//! 1. consumes global controls (style, sound, quit) from the frame's events,
//! 2. forwards the remaining events and the held keys to the current screen,
//! 3. advances the screen and drains its sound cues,
//! 4. swaps screens when the current one stops running,
//! 5. renders whatever screen is current into the LED grid.
//!
//! Global controls apply in every state and are never seen by screens, so a
//! game cannot shadow them.

use log::{debug, error, info};

use crate::boot::BootScreen;
use crate::font::FontOverrides;
use crate::menu::MenuScreen;
use crate::registry::Registry;
use crate::screen::{ActiveScreen, Screen, ScreenKind};
use crate::sound::SoundBoard;
use crate::types::{HeldKeys, Key, KeyEvents};
use crate::{GridBuffer, SimpleRng, Surface, VisualStyle};

/// LED size change per `+`/`-` press.
const SIZE_STEP: i32 = 2;

const BOOT_HINT: &str = "SPACE Skip";
const MENU_HINT: &str = "Menu: LEFT/RIGHT Select | SPACE Start | M Smooth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleState {
    Boot,
    Menu,
    Playing,
}

impl ConsoleState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsoleState::Boot => "BOOT",
            ConsoleState::Menu => "MENU",
            ConsoleState::Playing => "PLAYING",
        }
    }
}

/// What the host shows next to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsoleStatus {
    pub state: ConsoleState,
    pub screen: ScreenKind,
    /// Name of the running game while PLAYING.
    pub game: Option<&'static str>,
    /// Controls of the current screen.
    pub hint: &'static str,
    pub style: VisualStyle,
    pub sound: bool,
}

#[derive(Debug)]
pub struct Console {
    state: ConsoleState,
    screen: ActiveScreen,
    registry: Registry,
    style: VisualStyle,
    grid: GridBuffer,
    sound: SoundBoard,
    rng: SimpleRng,
    selected_game_index: usize,
    quit: bool,
}

impl Console {
    pub fn new(registry: Registry, style: VisualStyle, sound: SoundBoard, seed: u32) -> Self {
        Self {
            state: ConsoleState::Boot,
            screen: ActiveScreen::Boot(BootScreen::new()),
            registry,
            style,
            grid: GridBuffer::new(),
            sound,
            rng: SimpleRng::new(seed),
            selected_game_index: 0,
            quit: false,
        }
    }

    /// (Re)start from the boot animation.
    pub fn start(&mut self) {
        self.state = ConsoleState::Boot;
        self.screen = ActiveScreen::Boot(BootScreen::new());
        self.selected_game_index = 0;
        self.quit = false;
        self.screen.render(&mut self.grid);
        info!("console started with {} games", self.registry.len());
    }

    /// Advance one frame. `dt` is in seconds; `held` are the keys currently
    /// down and `events` the key-down transitions since the previous tick.
    pub fn tick(&mut self, dt: f32, held: &HeldKeys, events: &[Key]) {
        let mut forwarded = KeyEvents::new();
        for &key in events {
            if !self.apply_global(key) {
                let _ = forwarded.try_push(key);
            }
        }

        self.screen.handle_input(held, &forwarded);
        self.screen.update(dt);
        if let ActiveScreen::Menu(menu) = &self.screen {
            self.selected_game_index = menu.selected_index();
        }
        for effect in self.screen.take_effects() {
            self.sound.trigger(effect);
        }

        if !self.screen.is_running() {
            self.transition();
        }

        self.screen.render(&mut self.grid);
    }

    /// Draw the grid onto `surface` using the current style.
    pub fn present(&self, surface: &mut Surface) {
        led_console_core::present(&self.grid, surface, &self.style);
    }

    /// Apply a global control. Returns `true` when `key` was consumed.
    fn apply_global(&mut self, key: Key) -> bool {
        match key {
            Key::Plus => self.style.adjust_size(SIZE_STEP),
            Key::Minus => self.style.adjust_size(-SIZE_STEP),
            Key::LeftBracket => self.style.adjust_spacing(-1),
            Key::RightBracket => self.style.adjust_spacing(1),
            Key::Comma => self.style.adjust_gap(-1),
            Key::Period => self.style.adjust_gap(1),
            Key::Char('t') => self.style.toggle_shape(),
            Key::Char('l') => self.style.toggle_layout(),
            Key::Char('o') => {
                let on = self.sound.toggle();
                debug!("sound {}", if on { "on" } else { "off" });
                return true;
            }
            Key::Char('q') => {
                info!("quit requested");
                self.quit = true;
                return true;
            }
            _ => return false,
        }
        debug!(
            "style: size={} spacing={} gap={} shape={} layout={}",
            self.style.led_size(),
            self.style.led_spacing(),
            self.style.led_gap(),
            self.style.shape.as_str(),
            self.style.layout.as_str()
        );
        true
    }

    fn transition(&mut self) {
        match self.state {
            ConsoleState::Boot => self.enter_menu(),
            ConsoleState::Menu => {
                let confirmed = match &self.screen {
                    ActiveScreen::Menu(menu) => menu.confirmed_index(),
                    _ => None,
                };
                match confirmed {
                    Some(index) => self.enter_game(index),
                    None => self.enter_menu(),
                }
            }
            ConsoleState::Playing => self.enter_menu(),
        }
    }

    fn enter_menu(&mut self) {
        info!("{} -> MENU", self.state.as_str());
        self.state = ConsoleState::Menu;
        self.screen = ActiveScreen::Menu(MenuScreen::new(&self.registry, self.selected_game_index));
    }

    fn enter_game(&mut self, index: usize) {
        let Some(entry) = self.registry.get(index) else {
            error!("selected game {index} is not registered; staying in the menu");
            self.enter_menu();
            return;
        };
        let seed = self.rng.fork_seed();
        info!("MENU -> PLAYING {} (seed {seed})", entry.name);
        self.screen = (entry.factory)(seed);
        self.selected_game_index = index;
        self.state = ConsoleState::Playing;
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    /// The menu cursor while in MENU, otherwise the game last launched.
    pub fn selected_game_index(&self) -> usize {
        self.selected_game_index
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn grid(&self) -> &GridBuffer {
        &self.grid
    }

    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: VisualStyle) {
        self.style = style;
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound.enabled()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn set_font_overrides(&mut self, overrides: FontOverrides) {
        self.grid.set_font_overrides(overrides);
        self.screen.render(&mut self.grid);
    }

    pub fn status(&self) -> ConsoleStatus {
        let game = match self.state {
            ConsoleState::Playing => self.registry.get(self.selected_game_index),
            _ => None,
        };
        let hint = match self.state {
            ConsoleState::Boot => BOOT_HINT,
            ConsoleState::Menu => MENU_HINT,
            ConsoleState::Playing => game.map_or("", |g| g.hint),
        };
        ConsoleStatus {
            state: self.state,
            screen: self.screen.kind(),
            game: game.map(|g| g.name),
            hint,
            style: self.style,
            sound: self.sound.enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::pong::PongPhase;
    use crate::sound::SoundSink;
    use crate::types::BOOT_DURATION_SECS;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DT: f32 = 1.0 / 60.0;

    fn console() -> Console {
        let mut c = Console::new(
            Registry::builtin().unwrap(),
            VisualStyle::default(),
            SoundBoard::silent(),
            42,
        );
        c.start();
        c
    }

    fn tick(c: &mut Console, events: &[Key]) {
        c.tick(DT, &HeldKeys::new(), events);
    }

    fn to_menu(c: &mut Console) {
        tick(c, &[Key::Space]);
        assert_eq!(c.state(), ConsoleState::Menu);
    }

    #[test]
    fn boot_runs_into_menu_at_first_game() {
        let mut c = console();
        assert_eq!(c.state(), ConsoleState::Boot);
        let frames = (BOOT_DURATION_SECS / DT).round() as usize;
        for _ in 0..frames {
            tick(&mut c, &[]);
        }
        assert_eq!(c.state(), ConsoleState::Menu);
        assert_eq!(c.screen_kind(), ScreenKind::Menu);
        assert_eq!(c.selected_game_index(), 0);
    }

    #[test]
    fn right_and_space_in_one_tick_start_second_game() {
        let mut c = console();
        to_menu(&mut c);
        tick(&mut c, &[Key::Right, Key::Space]);
        assert_eq!(c.state(), ConsoleState::Playing);
        assert_eq!(c.screen_kind(), ScreenKind::Snake);
        assert_eq!(c.selected_game_index(), 1);
        assert_eq!(c.status().game, Some("SNAKE"));
    }

    #[test]
    fn selected_index_follows_menu_cursor() {
        let mut c = console();
        to_menu(&mut c);
        tick(&mut c, &[Key::Right]);
        assert_eq!(c.state(), ConsoleState::Menu);
        assert_eq!(c.selected_game_index(), 1);
        tick(&mut c, &[Key::Right, Key::Left, Key::Left]);
        assert_eq!(c.selected_game_index(), 0);
    }

    #[test]
    fn escape_returns_to_menu_on_the_game_played() {
        let mut c = console();
        to_menu(&mut c);
        tick(&mut c, &[Key::Right, Key::Right, Key::Enter]);
        assert_eq!(c.screen_kind(), ScreenKind::Flappy);
        tick(&mut c, &[Key::Escape]);
        assert_eq!(c.state(), ConsoleState::Menu);
        match c.screen() {
            ActiveScreen::Menu(m) => assert_eq!(m.selected_index(), 2),
            other => panic!("expected menu, got {:?}", other.kind()),
        }
    }

    #[test]
    fn escape_from_every_pong_phase() {
        let setups: [&[Key]; 3] = [&[], &[Key::Space], &[Key::Space, Key::Space]];
        for setup in setups {
            let mut c = console();
            to_menu(&mut c);
            tick(&mut c, &[Key::Space]);
            assert_eq!(c.screen_kind(), ScreenKind::Pong);
            tick(&mut c, setup);
            tick(&mut c, &[Key::Escape]);
            assert_eq!(c.state(), ConsoleState::Menu, "after {setup:?}");
        }
    }

    #[test]
    fn global_keys_are_not_forwarded() {
        let mut c = console();
        to_menu(&mut c);
        tick(&mut c, &[Key::Space]);
        // Pong is in mode select; '+' must not reach it.
        tick(&mut c, &[Key::Plus]);
        assert_eq!(c.style().led_size(), 8);
        match c.screen() {
            ActiveScreen::Pong(p) => assert_eq!(p.phase(), PongPhase::ModeSelect),
            other => panic!("expected pong, got {:?}", other.kind()),
        }
    }

    #[test]
    fn global_controls_adjust_style() {
        let mut c = console();
        tick(
            &mut c,
            &[Key::RightBracket, Key::Period, Key::Char('t'), Key::Char('l')],
        );
        let style = c.style();
        assert_eq!(style.led_spacing(), 3);
        assert_eq!(style.led_gap(), 2);
        assert_eq!(style.shape, crate::style::LedShape::Square);
        assert_eq!(style.layout, crate::style::Layout::Landscape);
        // Still booting: style keys are not confirm keys.
        assert_eq!(c.state(), ConsoleState::Boot);

        for _ in 0..20 {
            tick(&mut c, &[Key::Minus]);
        }
        assert_eq!(c.style().led_size(), crate::style::MIN_LED_SIZE);
    }

    #[test]
    fn quit_and_sound_toggle() {
        let mut c = console();
        assert!(!c.sound_enabled());
        tick(&mut c, &[Key::Char('o')]);
        assert!(c.sound_enabled());
        assert!(!c.quit_requested());
        tick(&mut c, &[Key::Char('q')]);
        assert!(c.quit_requested());
    }

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl SoundSink for Recorder {
        fn play_effect(&mut self, name: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().push(name.to_string());
            Ok(())
        }
    }

    #[test]
    fn screen_effects_reach_the_sound_board() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let sound = SoundBoard::new(Box::new(Recorder(played.clone())), true);
        let mut c = Console::new(Registry::builtin().unwrap(), VisualStyle::default(), sound, 1);
        c.start();
        to_menu(&mut c);
        tick(&mut c, &[Key::Right]);
        assert_eq!(played.borrow().as_slice(), ["menu_move"]);
    }

    #[test]
    fn same_seed_and_inputs_give_same_frames() {
        let run = || {
            let mut c = console();
            to_menu(&mut c);
            tick(&mut c, &[Key::Space]);
            tick(&mut c, &[Key::Space]);
            let held = HeldKeys::from_keys(&[Key::Char('w')]);
            for i in 0..240 {
                let events: &[Key] = if i == 10 { &[Key::Space] } else { &[] };
                c.tick(DT, &held, events);
            }
            c.grid().fingerprint()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn status_follows_state() {
        let mut c = console();
        assert_eq!(c.status().hint, BOOT_HINT);
        to_menu(&mut c);
        let status = c.status();
        assert_eq!(status.hint, MENU_HINT);
        assert_eq!(status.game, None);
        tick(&mut c, &[Key::Space]);
        assert_eq!(c.status().hint, crate::games::pong::HINT);
    }

    #[test]
    fn present_sizes_surface_from_style() {
        let mut c = console();
        tick(&mut c, &[]);
        let mut surface = Surface::default();
        c.present(&mut surface);
        assert_eq!(surface.size(), c.style().surface_size());
    }
}

//! Carousel menu: one card per registered game, slid horizontally.
//!
//! LEFT/RIGHT move the selection, SPACE/ENTER confirm, M switches between a
//! smooth slide and an instant snap. ESC does nothing here; there is no
//! screen above the menu to go back to.

use arrayvec::ArrayVec;

use crate::layout::TextZone;
use crate::registry::{LogoPixel, Registry, MAX_GAMES};
use crate::screen::{emit, EffectQueue, Screen, SoundEffect};
use crate::types::{HeldKeys, Key, Rgb, GRID_SIZE};
use crate::GridBuffer;

const SCROLL_SPEED: f32 = 8.0;
const SNAP_EPSILON: f32 = 0.01;
/// Cards further than this from the view center are not drawn.
const VISIBLE_RANGE: f32 = 1.25;

const CARD_WIDTH: f32 = GRID_SIZE as f32;
const CARD_TOP: i32 = 4;
const CARD_BOTTOM: i32 = GRID_SIZE as i32 - 1;
const LOGO_X: i32 = 4;
const LOGO_Y: i32 = 6;
const NAME_Y: i32 = 15;
const HINT: &str = "LR SEL";

const BACKGROUND: Rgb = Rgb::new(0, 0, 8);
const BORDER: Rgb = Rgb::new(30, 30, 40);
const NUMBER: Rgb = Rgb::new(255, 255, 0);
const NAME: Rgb = Rgb::new(0, 255, 255);
const ARROW: Rgb = Rgb::new(130, 130, 130);
const PREVIEW: Rgb = Rgb::new(80, 80, 80);
const HINT_COLOR: Rgb = Rgb::new(120, 120, 120);

#[derive(Debug, Clone, Copy)]
struct Card {
    name: &'static str,
    logo: &'static [LogoPixel],
}

#[derive(Debug, Clone)]
pub struct MenuScreen {
    cards: ArrayVec<Card, MAX_GAMES>,
    selected: usize,
    offset: f32,
    smooth: bool,
    pulse: f32,
    confirmed: bool,
    effects: EffectQueue,
}

impl MenuScreen {
    /// Menu over `registry` with `selected` (clamped) highlighted.
    pub fn new(registry: &Registry, selected: usize) -> Self {
        let cards: ArrayVec<Card, MAX_GAMES> = registry
            .entries()
            .iter()
            .map(|e| Card { name: e.name, logo: e.logo })
            .collect();
        let selected = selected.min(cards.len().saturating_sub(1));
        Self {
            cards,
            selected,
            offset: selected as f32,
            smooth: true,
            pulse: 0.0,
            confirmed: false,
            effects: EffectQueue::new(),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Index the player confirmed, once they have.
    pub fn confirmed_index(&self) -> Option<usize> {
        self.confirmed.then_some(self.selected)
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    fn move_selection(&mut self, delta: isize) {
        let last = self.cards.len().saturating_sub(1) as isize;
        let next = (self.selected as isize + delta).clamp(0, last) as usize;
        self.selected = next;
        if !self.smooth {
            self.offset = next as f32;
        }
        emit(&mut self.effects, SoundEffect::MenuMove);
    }

    fn render_card(&self, grid: &mut GridBuffer, index: usize, view: f32) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let shift = ((index as f32 - view) * CARD_WIDTH) as i32;
        let n = GRID_SIZE as i32;

        grid.fill_rect(shift, CARD_TOP, n, 1, BORDER);
        grid.fill_rect(shift, CARD_BOTTOM, n, 1, BORDER);
        grid.fill_rect(shift, CARD_TOP, 1, CARD_BOTTOM - CARD_TOP + 1, BORDER);
        grid.fill_rect(shift + n - 1, CARD_TOP, 1, CARD_BOTTOM - CARD_TOP + 1, BORDER);

        grid.render_number(index as i64 + 1, shift + 8, 2, NUMBER, 1);

        for px in card.logo {
            grid.set_pixel(
                shift + LOGO_X + px.dx as i32,
                LOGO_Y + px.dy as i32,
                px.color,
            );
        }

        let width = card.name.chars().count() as i32 * 4;
        let x = shift + (n - width).div_euclid(2);
        grid.render_text(card.name, x, NAME_Y, NAME, 1);
    }

    fn render_preview(&self, grid: &mut GridBuffer, index: usize, x: i32) {
        if index < self.cards.len() {
            grid.render_number(index as i64 + 1, x, GRID_SIZE as i32 / 2 - 2, PREVIEW, 1);
        }
    }

    fn render_arrows(&self, grid: &mut GridBuffer) {
        const LEFT: [(i32, i32); 5] = [(0, 0), (1, -1), (1, 1), (2, -2), (2, 2)];
        if self.selected > 0 {
            for (dx, dy) in LEFT {
                grid.set_pixel(1 + dx, 9 + dy, ARROW);
            }
        }
        if self.selected + 1 < self.cards.len() {
            for (dx, dy) in LEFT {
                grid.set_pixel(17 - dx, 9 + dy, ARROW);
            }
        }
    }
}

impl Screen for MenuScreen {
    fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.pulse += dt;
        if self.smooth {
            let target = self.selected as f32;
            let diff = target - self.offset;
            if diff.abs() > SNAP_EPSILON {
                // Capped at 1 so a long frame lands on the target instead of past it.
                self.offset += diff * (SCROLL_SPEED * dt).min(1.0);
            } else {
                self.offset = target;
            }
        }
    }

    fn render(&self, grid: &mut GridBuffer) {
        grid.clear(BACKGROUND);

        let pulse = ((self.pulse * 2.0).sin() + 1.0) / 2.0;
        let title = Rgb::new((60.0 + 80.0 * pulse) as u8, (180.0 + 40.0 * pulse) as u8, 255);
        let zone = TextZone::TITLE;
        grid.render_text("GAMES", zone.centered_x(5, 1, 1), zone.y, title, 1);

        // Behind the cards so the game name stays readable.
        let zone = TextZone::HINT;
        grid.render_text(HINT, zone.centered_x(HINT.len(), 1, 1), zone.y, HINT_COLOR, 1);

        if self.smooth {
            for i in 0..self.cards.len() {
                if (i as f32 - self.offset).abs() <= VISIBLE_RANGE {
                    self.render_card(grid, i, self.offset);
                }
            }
        } else {
            self.render_card(grid, self.selected, self.selected as f32);
            if self.selected > 0 {
                self.render_preview(grid, self.selected - 1, 1);
            }
            self.render_preview(grid, self.selected + 1, 15);
        }

        self.render_arrows(grid);
    }

    fn handle_input(&mut self, _held: &HeldKeys, events: &[Key]) {
        for &key in events {
            if self.confirmed {
                break;
            }
            match key {
                Key::Left => self.move_selection(-1),
                Key::Right => self.move_selection(1),
                Key::Char('m') => {
                    self.smooth = !self.smooth;
                    self.offset = self.selected as f32;
                    emit(&mut self.effects, SoundEffect::Toggle);
                }
                k if k.is_confirm() => {
                    self.confirmed = true;
                    emit(&mut self.effects, SoundEffect::MenuSelect);
                }
                _ => {}
            }
        }
    }

    fn is_running(&self) -> bool {
        !self.confirmed
    }

    fn take_effects(&mut self) -> EffectQueue {
        std::mem::take(&mut self.effects)
    }
}

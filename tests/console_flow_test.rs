use led_console::core::Surface;
use led_console::engine::games::basketball::BasketballPhase;
use led_console::engine::games::pong::PongPhase;
use led_console::engine::{
    ActiveScreen, Console, ConsoleState, Registry, ScreenKind, SoundBoard, VisualStyle,
};
use led_console::types::{HeldKeys, Key};

const DT: f32 = 1.0 / 60.0;

fn booted(seed: u32) -> Console {
    let mut console = Console::new(
        Registry::builtin().unwrap(),
        VisualStyle::default(),
        SoundBoard::silent(),
        seed,
    );
    console.start();
    console
}

fn tick(console: &mut Console, events: &[Key]) {
    console.tick(DT, &HeldKeys::new(), events);
}

fn in_menu(seed: u32) -> Console {
    let mut console = booted(seed);
    tick(&mut console, &[Key::Enter]);
    assert_eq!(console.state(), ConsoleState::Menu);
    console
}

#[test]
fn boot_hands_over_to_menu_after_three_seconds() {
    let mut console = booted(1);
    // 180 frames at 60 Hz are exactly 3 s.
    for _ in 0..179 {
        tick(&mut console, &[]);
        assert_eq!(console.state(), ConsoleState::Boot);
    }
    tick(&mut console, &[]);
    assert_eq!(console.state(), ConsoleState::Menu);
    assert_eq!(console.selected_game_index(), 0);
    assert!(console.grid().lit_count() > 0);
}

#[test]
fn one_huge_frame_also_finishes_boot() {
    let mut console = booted(1);
    console.tick(10.0, &HeldKeys::new(), &[]);
    assert_eq!(console.state(), ConsoleState::Menu);
}

#[test]
fn menu_starts_the_game_at_each_index() {
    let expected = [
        ScreenKind::Pong,
        ScreenKind::Snake,
        ScreenKind::Flappy,
        ScreenKind::Basketball,
    ];
    for (index, kind) in expected.into_iter().enumerate() {
        let mut console = in_menu(3);
        let mut events = vec![Key::Right; index];
        events.push(Key::Space);
        tick(&mut console, &events);
        assert_eq!(console.state(), ConsoleState::Playing);
        assert_eq!(console.screen_kind(), kind);
        assert_eq!(console.selected_game_index(), index);
    }
}

#[test]
fn right_and_space_in_one_tick_start_the_second_game() {
    let mut console = in_menu(4);
    tick(&mut console, &[Key::Right, Key::Space]);
    assert_eq!(console.state(), ConsoleState::Playing);
    assert_eq!(console.selected_game_index(), 1);
    assert_eq!(console.screen_kind(), ScreenKind::Snake);
}

#[test]
fn escape_leaves_pong_from_each_phase_in_one_tick() {
    let phases: [(&[Key], PongPhase); 3] = [
        (&[], PongPhase::ModeSelect),
        (&[Key::Space], PongPhase::Ready),
        (&[Key::Space, Key::Space], PongPhase::Playing),
    ];
    for (setup, phase) in phases {
        let mut console = in_menu(5);
        tick(&mut console, &[Key::Space]);
        tick(&mut console, setup);
        match console.screen() {
            ActiveScreen::Pong(p) => assert_eq!(p.phase(), phase),
            other => panic!("expected pong, got {:?}", other.kind()),
        }
        tick(&mut console, &[Key::Escape]);
        assert_eq!(console.state(), ConsoleState::Menu);
    }
}

#[test]
fn escape_leaves_a_crashed_flappy_in_one_tick() {
    let mut console = in_menu(6);
    tick(&mut console, &[Key::Right, Key::Right, Key::Space]);
    for _ in 0..120 {
        tick(&mut console, &[]);
    }
    match console.screen() {
        ActiveScreen::Flappy(f) => assert!(f.is_game_over()),
        other => panic!("expected flappy, got {:?}", other.kind()),
    }
    tick(&mut console, &[Key::Escape]);
    assert_eq!(console.state(), ConsoleState::Menu);
    assert_eq!(console.screen_kind(), ScreenKind::Menu);
}

#[test]
fn escape_leaves_basketball_from_ready_and_mid_game() {
    for play_frames in [0, 90] {
        let mut console = in_menu(9);
        tick(&mut console, &[Key::Right, Key::Right, Key::Right, Key::Space]);
        if play_frames > 0 {
            tick(&mut console, &[Key::Space]);
            for _ in 0..play_frames {
                tick(&mut console, &[]);
            }
        }
        match console.screen() {
            ActiveScreen::Basketball(b) if play_frames == 0 => {
                assert_eq!(b.phase(), BasketballPhase::Ready)
            }
            ActiveScreen::Basketball(b) => assert_ne!(b.phase(), BasketballPhase::Ready),
            other => panic!("expected basketball, got {:?}", other.kind()),
        }
        tick(&mut console, &[Key::Escape]);
        assert_eq!(console.state(), ConsoleState::Menu);
        assert_eq!(console.selected_game_index(), 3);
    }
}

#[test]
fn escape_leaves_snake_and_menu_remembers_it() {
    let mut console = in_menu(7);
    tick(&mut console, &[Key::Right, Key::Space]);
    for _ in 0..30 {
        tick(&mut console, &[]);
    }
    tick(&mut console, &[Key::Escape]);
    assert_eq!(console.state(), ConsoleState::Menu);
    match console.screen() {
        ActiveScreen::Menu(m) => assert_eq!(m.selected_index(), 1),
        other => panic!("expected menu, got {:?}", other.kind()),
    }
}

#[test]
fn escape_in_menu_does_nothing() {
    let mut console = in_menu(8);
    tick(&mut console, &[Key::Escape]);
    assert_eq!(console.state(), ConsoleState::Menu);
}

#[test]
fn global_keys_win_while_game_keys_are_held() {
    let mut console = in_menu(9);
    tick(&mut console, &[Key::Space]);
    tick(&mut console, &[Key::Space, Key::Space]);
    match console.screen() {
        ActiveScreen::Pong(p) => assert_eq!(p.phase(), PongPhase::Playing),
        other => panic!("expected pong, got {:?}", other.kind()),
    }

    let held = HeldKeys::from_keys(&[Key::Char('w'), Key::Char('s'), Key::Up]);
    let before = *console.style();
    console.tick(DT, &held, &[Key::Plus, Key::Char('t'), Key::RightBracket]);
    let after = console.style();
    assert_eq!(after.led_size(), before.led_size() + 2);
    assert_ne!(after.shape, before.shape);
    assert_eq!(after.led_spacing(), before.led_spacing() + 1);
    assert_eq!(console.state(), ConsoleState::Playing);
}

#[test]
fn global_keys_mixed_with_menu_keys() {
    let mut console = in_menu(10);
    tick(&mut console, &[Key::Minus, Key::Right, Key::Comma, Key::Space]);
    assert_eq!(console.style().led_size(), 4);
    assert_eq!(console.style().led_gap(), 0);
    assert_eq!(console.screen_kind(), ScreenKind::Snake);
}

#[test]
fn quit_is_requested_from_any_state() {
    let mut console = booted(11);
    tick(&mut console, &[Key::Char('q')]);
    assert!(console.quit_requested());

    let mut console = in_menu(11);
    tick(&mut console, &[Key::Space]);
    tick(&mut console, &[Key::Char('q')]);
    assert!(console.quit_requested());
    assert_eq!(console.state(), ConsoleState::Playing);
}

fn scripted_run(seed: u32) -> (u64, u64) {
    let mut console = in_menu(seed);
    tick(&mut console, &[Key::Space]);
    tick(&mut console, &[Key::Space]);
    tick(&mut console, &[Key::Space]);
    let held = HeldKeys::from_keys(&[Key::Char('s')]);
    for i in 0..600 {
        let events: &[Key] = match i % 97 {
            0 => &[Key::Space],
            50 => &[Key::Period],
            _ => &[],
        };
        console.tick(DT, &held, events);
    }
    let mut surface = Surface::default();
    console.present(&mut surface);
    (console.grid().fingerprint(), surface.fingerprint())
}

#[test]
fn same_seed_and_script_give_identical_frames() {
    assert_eq!(scripted_run(1234), scripted_run(1234));
}

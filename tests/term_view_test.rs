use led_console::core::Surface;
use led_console::engine::{Console, Registry, SoundBoard, VisualStyle};
use led_console::term::{ConsoleView, FrameBuffer, Viewport, STATUS_ROWS};
use led_console::types::{HeldKeys, Key};

fn menu_console() -> Console {
    let mut console = Console::new(
        Registry::builtin().unwrap(),
        VisualStyle::default(),
        SoundBoard::silent(),
        1,
    );
    console.start();
    console.tick(0.016, &HeldKeys::new(), &[Key::Space]);
    console
}

fn text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).map_or(' ', |c| c.ch));
        }
        all.push('\n');
    }
    all
}

#[test]
fn large_terminal_shows_surface_at_full_resolution() {
    let console = menu_console();
    let mut surface = Surface::default();
    console.present(&mut surface);

    let mut fb = FrameBuffer::default();
    let (w, h) = surface.size();
    let vp = Viewport::new(w as u16 + 10, (h as u16).div_ceil(2) + STATUS_ROWS);
    let placed = ConsoleView::default().render_into(&surface, &console.status(), vp, &mut fb);
    assert_eq!(placed.factor, 1);
    assert_eq!(placed.cols as u32, w);
    assert_eq!(placed.x, 5);
}

#[test]
fn small_terminal_downsamples() {
    let console = menu_console();
    let mut surface = Surface::default();
    console.present(&mut surface);

    let mut fb = FrameBuffer::default();
    let placed = ConsoleView::default().render_into(&surface, &console.status(), Viewport::new(80, 24), &mut fb);
    assert!(placed.factor > 1);
    assert!(placed.cols <= 80);
    assert!(placed.rows <= 24 - STATUS_ROWS);
    assert!(text(&fb).contains('▀'));
}

#[test]
fn status_bar_reports_state_and_style() {
    let mut console = menu_console();
    console.tick(0.016, &HeldKeys::new(), &[Key::Plus, Key::Char('l')]);
    let mut surface = Surface::default();
    console.present(&mut surface);

    let mut fb = FrameBuffer::default();
    ConsoleView::default().render_into(&surface, &console.status(), Viewport::new(120, 30), &mut fb);
    let all = text(&fb);
    assert!(all.contains("MENU | Menu:"));
    assert!(all.contains("LED 8 SP 2 GAP 1 circle landscape"));
    assert!(all.contains("Q Quit"));
}

#[test]
fn playing_status_names_the_game() {
    let mut console = menu_console();
    console.tick(0.016, &HeldKeys::new(), &[Key::Right, Key::Space]);
    let mut surface = Surface::default();
    console.present(&mut surface);

    let mut fb = FrameBuffer::default();
    ConsoleView::default().render_into(&surface, &console.status(), Viewport::new(120, 30), &mut fb);
    assert!(text(&fb).contains("SNAKE | Snake: ARROWS Move"));
}

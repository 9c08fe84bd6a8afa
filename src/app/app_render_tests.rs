use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::config::Config;
use crate::error::ScrubError;
use crate::test_utils::test_helpers::{FakeAnimation, fake_frame_color, loader_for, test_app};
use crate::widgets::frame_view::fit_size;

fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal
}

fn wait_until_settled(app: &mut App) {
    for _ in 0..200 {
        app.poll_loader();
        if !app.scrubber.is_loading() {
            return;
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
    panic!("app did not finish loading");
}

#[test]
fn test_render_paints_first_frame() {
    let mut app = test_app(10);

    let terminal = render_app(&mut app, 40, 12);

    assert_eq!(app.scrubber.current_frame(), Some(0));
    assert!(!app.scrubber.has_pending_render());
    let output = terminal.backend().to_string();
    assert!(output.contains("▀"));
    assert!(output.contains("frame 1/10"));
}

#[test]
fn test_render_sets_viewport_from_pane() {
    let mut app = test_app(50);

    render_app(&mut app, 40, 12);

    // 12 rows - 1 status line - 2 borders
    assert_eq!(app.scrubber.scroll().viewport_height, 9);
    assert_eq!(app.scrubber.scroll().max_offset, 1000 - 9);
}

#[test]
fn test_render_after_scroll_shows_new_frame() {
    let mut app = test_app(50);
    render_app(&mut app, 40, 12);

    app.scrubber.jump_to_bottom();
    let terminal = render_app(&mut app, 40, 12);

    assert_eq!(app.scrubber.current_frame(), Some(49));
    assert!(terminal.backend().to_string().contains("frame 50/50"));
}

#[test]
fn test_frame_pixels_reach_the_terminal() {
    let mut app = test_app(5);
    app.scrubber.jump_to_bottom();

    let terminal = render_app(&mut app, 20, 8);
    let buffer = terminal.backend().buffer();

    // Pane inner area is 18x5 at (1,1); FakeAnimation is 4x2 pixels
    let (width, _) = fit_size(4, 2, 18, 10).unwrap();
    let x = 1 + (18 - width as u16) / 2;
    let expected = fake_frame_color(4);
    let [r, g, b, _] = expected.0;
    assert_eq!(buffer[(x, 1)].fg, ratatui::style::Color::Rgb(r, g, b));
}

#[test]
fn test_render_unloaded_message() {
    let mut app = App::new(&Config::default());
    let terminal = render_app(&mut app, 40, 10);
    assert!(terminal.backend().to_string().contains("No animation loaded"));
}

#[test]
fn test_render_loading_message() {
    let (tx, rx) = std::sync::mpsc::channel::<()>();
    let mut app = App::new(&Config::default());
    app.source = Some("spin.gif".into());
    app.scrubber
        .begin_load(crate::animation::AnimationLoader::spawn_with(move || {
            let _ = rx.recv();
            Err(ScrubError::NoFrames)
        }));

    let terminal = render_app(&mut app, 50, 10);
    let output = terminal.backend().to_string();
    assert!(output.contains("Decoding spin.gif..."));
    assert!(output.contains(" spin.gif "));
    drop(tx);
}

#[test]
fn test_render_failure_message() {
    let mut app = App::new(&Config::default());
    app.scrubber.begin_load(loader_for(FakeAnimation::new(0)));
    wait_until_settled(&mut app);

    let terminal = render_app(&mut app, 80, 12);
    let output = terminal.backend().to_string();
    assert!(output.contains("Animation contains no frames"));
    assert!(output.contains("Dismiss"));
    assert!(!output.contains("▀"));
}

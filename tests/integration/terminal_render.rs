//! Integration tests for the terminal front-end
//!
//! Draws the app into a TestBackend and checks what a user would see.

use bubbletrace::ui::Action;
use bubbletrace::{App, Config, StepKind, BUBBLE_SORT_LISTING};

use super::common::fixtures::SCENARIO_ARRAY;
use super::common::terminal::{buffer_contains, create_test_terminal_sized, find_row};

fn scenario_app() -> App {
    App::new(&Config::default().with_array(SCENARIO_ARRAY.to_vec()))
}

fn render(app: &App) -> ratatui::buffer::Buffer {
    let mut terminal = create_test_terminal_sized(100, 30);
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

#[tokio::test]
async fn test_initial_screen() {
    let app = scenario_app();
    let buffer = render(&app);

    assert!(buffer_contains(&buffer, "BUBBLE SORT"));
    assert!(buffer_contains(&buffer, "Paused"));
    assert!(buffer_contains(&buffer, "0 / 15"));
    assert!(buffer_contains(&buffer, "Let's start sorting"));
    assert!(buffer_contains(&buffer, BUBBLE_SORT_LISTING[0]));
    assert!(buffer_contains(&buffer, "play/pause"));
    for value in SCENARIO_ARRAY {
        assert!(buffer_contains(&buffer, &value.to_string()));
    }
}

#[tokio::test]
async fn test_step_forward_shows_compare() {
    let mut app = scenario_app();
    assert!(app.sync().await); // initial frame from the driver

    app.dispatch(Action::StepForward);
    assert!(app.sync().await);
    assert_eq!(app.step().kind, StepKind::Compare);

    let buffer = render(&app);
    assert!(buffer_contains(&buffer, "Compare index 0 (5) with index 1 (3)."));
    assert!(buffer_contains(&buffer, "1 / 15"));
    assert!(buffer_contains(&buffer, "COMPARE"));

    // The highlighted listing line is the comparison.
    let row = find_row(&buffer, "if arr[j]").unwrap();
    let marked = find_row(&buffer, "▌").unwrap();
    assert_eq!(row, marked);
}

#[tokio::test]
async fn test_speed_keys_move_dial() {
    let mut app = scenario_app();
    assert!(app.sync().await);

    // Presses sent before any reply still count one notch each.
    for _ in 0..3 {
        app.dispatch(Action::Faster);
    }
    for _ in 0..3 {
        assert!(app.sync().await);
    }
    assert_eq!(app.frame().status.speed.value(), 560);

    app.dispatch(Action::Slower);
    app.dispatch(Action::Slower);
    assert!(app.sync().await);
    assert!(app.sync().await);
    assert_eq!(app.frame().status.speed.value(), 520);

    let buffer = render(&app);
    assert!(buffer_contains(&buffer, "53% (480 ms)"));
}

#[tokio::test]
async fn test_quit_action() {
    let mut app = scenario_app();
    assert!(!app.should_quit());
    app.dispatch(Action::Quit);
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let app = scenario_app();
    let mut terminal = create_test_terminal_sized(12, 6);
    terminal.draw(|f| app.draw(f)).unwrap();
}

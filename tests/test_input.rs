use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};
use platformer::entities::InputState;
use platformer::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

fn input_after(code: KeyCode) -> InputState {
    let mut keys = KeyTracker::new();
    keys.record(&press(code), 1);
    keys.snapshot(1)
}

// ── Key mapping ───────────────────────────────────────────────────────────────

#[test]
fn nothing_pressed_is_idle() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.snapshot(1), InputState::default());
}

#[test]
fn arrows_and_letters_move() {
    for code in [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')] {
        let input = input_after(code);
        assert!(input.left && !input.right, "{code:?}");
    }
    for code in [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')] {
        let input = input_after(code);
        assert!(input.right && !input.left, "{code:?}");
    }
}

#[test]
fn space_and_up_jump() {
    assert!(input_after(KeyCode::Char(' ')).jump);
    assert!(input_after(KeyCode::Up).jump);
    assert!(!input_after(KeyCode::Down).jump);
}

#[test]
fn f_and_left_control_throw() {
    assert!(input_after(KeyCode::Char('f')).throw);
    assert!(input_after(KeyCode::Char('F')).throw);
    assert!(input_after(KeyCode::Modifier(ModifierKeyCode::LeftControl)).throw);
    assert!(!input_after(KeyCode::Char('g')).throw);
}

// ── Hold window ───────────────────────────────────────────────────────────────

#[test]
fn key_stays_held_for_the_hold_window() {
    let mut keys = KeyTracker::new();
    keys.record(&press(KeyCode::Right), 1);
    assert!(keys.snapshot(1 + HOLD_WINDOW).right);
    assert!(!keys.snapshot(2 + HOLD_WINDOW).right);
}

#[test]
fn repeat_refreshes_the_hold() {
    let mut keys = KeyTracker::new();
    keys.record(&press(KeyCode::Right), 1);
    let repeat =
        KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Repeat);
    keys.record(&repeat, 8);
    assert!(keys.snapshot(8 + HOLD_WINDOW).right);
}

#[test]
fn release_drops_the_key_at_once() {
    let mut keys = KeyTracker::new();
    keys.record(&press(KeyCode::Left), 1);
    keys.record(&release(KeyCode::Left), 2);
    assert!(!keys.snapshot(2).left);
}

// ── Quit ──────────────────────────────────────────────────────────────────────

#[test]
fn quit_keys() {
    assert!(is_quit_key(&KeyCode::Esc, KeyModifiers::NONE));
    assert!(is_quit_key(&KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(is_quit_key(&KeyCode::Char('Q'), KeyModifiers::SHIFT));
    assert!(is_quit_key(&KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!is_quit_key(&KeyCode::Char('c'), KeyModifiers::NONE));
}

#[test]
fn quit_is_reported_once() {
    let mut keys = KeyTracker::new();
    keys.record(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 1);
    assert!(keys.snapshot(1).quit);
    assert!(!keys.snapshot(2).quit);
}

#[test]
fn releasing_a_quit_key_does_not_quit() {
    let mut keys = KeyTracker::new();
    keys.record(&release(KeyCode::Esc), 1);
    assert!(!keys.snapshot(1).quit);
}

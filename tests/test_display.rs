use platformer::compute::*;
use platformer::display::*;
use platformer::entities::*;
use platformer::tuning::{WORLD_HEIGHT, WORLD_WIDTH};

fn render_to_string(state: &GameState) -> String {
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, state).expect("render into memory");
    String::from_utf8(buf).expect("utf-8 output")
}

#[test]
fn screen_fits_a_standard_terminal() {
    assert_eq!(VIEW_COLS as f32 * CELL_W, WORLD_WIDTH);
    assert_eq!(VIEW_ROWS as f32 * CELL_H, WORLD_HEIGHT);
    assert!(SCREEN_COLS <= 80);
    assert!(SCREEN_ROWS <= 24);
}

#[test]
fn cell_span_covers_partial_cells() {
    let span = cell_span(&Rect::new(15.0, 30.0, 10.0, 10.0)).expect("visible");
    assert_eq!(
        span,
        CellSpan {
            col0: 1,
            col1: 3,
            row0: 1,
            row1: 2,
        }
    );
}

#[test]
fn cell_span_clips_to_view() {
    let span = cell_span(&Rect::new(-25.0, 450.0, 60.0, 400.0)).expect("visible");
    assert_eq!(span.col0, 0);
    assert_eq!(span.col1, 4);
    assert_eq!(span.row0, 18);
    assert_eq!(span.row1, VIEW_ROWS);
}

#[test]
fn cell_span_offscreen_is_none() {
    assert_eq!(cell_span(&Rect::new(-100.0, 0.0, 50.0, 50.0)), None);
    assert_eq!(cell_span(&Rect::new(700.0, 0.0, 50.0, 50.0)), None);
    assert_eq!(cell_span(&Rect::new(0.0, 500.0, 50.0, 50.0)), None);
}

#[test]
fn render_draws_every_visible_kind() {
    let s = init_state().with(Projectile::new(100.0, 200.0));
    let out = render_to_string(&s);
    assert!(out.contains('█'), "player or tube missing");
    assert!(out.contains('▓'), "enemy missing");
    assert!(out.contains('●'), "projectile missing");
    assert!(out.contains("Q : Quit"));
}

#[test]
fn burning_enemy_looks_different() {
    let mut enemy = Enemy::new(200.0);
    enemy.ignite();
    let s = GameState::new(Player::default()).with(enemy);
    let out = render_to_string(&s);
    assert!(out.contains('▒'));
    assert!(!out.contains('▓'));
}

#[test]
fn hud_reports_counts() {
    let s = init_state();
    let out = render_to_string(&s);
    assert!(out.contains("enemies: 3"));
    assert!(out.contains("fireballs:  0"));
}

#[test]
fn render_leaves_state_untouched() {
    let s = init_state();
    let before = s.clone();
    let _ = render_to_string(&s);
    assert_eq!(s, before);
}

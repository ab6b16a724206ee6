/// Rendering layer — all terminal drawing lives here.
///
/// `render` receives a writer and an immutable view of the game state.
/// No game logic is performed; this module only translates world pixels
/// into terminal cells and queues crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::compute::GameState;
use crate::entities::{Entity, Rect};
use crate::tuning::{ANIMATION_FRAMES, FLOOR_Y};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// World pixels covered by one terminal cell.
pub const CELL_W: f32 = 10.0;
pub const CELL_H: f32 = 25.0;

/// `WORLD_WIDTH / CELL_W` by `WORLD_HEIGHT / CELL_H`.
pub const VIEW_COLS: u16 = 70;
pub const VIEW_ROWS: u16 = 20;

/// HUD on the first row, play field below it, controls hint on the last.
pub const SCREEN_COLS: u16 = VIEW_COLS;
pub const SCREEN_ROWS: u16 = VIEW_ROWS + 2;

const VIEW_TOP: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 4, g: 156, b: 216 };
const C_GROUND: Color = Color::Rgb { r: 67, g: 176, b: 71 };
const C_PLAYER: Color = Color::Rgb { r: 228, g: 0, b: 24 };
const C_TUBE: Color = Color::Rgb { r: 0, g: 120, b: 0 };
const C_ENEMY: Color = Color::Rgb { r: 140, g: 80, b: 30 };
const C_ENEMY_BURNING: Color = Color::Rgb { r: 255, g: 90, b: 0 };
const C_PROJECTILE: Color = Color::Rgb { r: 255, g: 200, b: 0 };
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// One glyph per animation frame.
const PLAYER_GLYPHS: [char; ANIMATION_FRAMES] = ['█', '▛', '▜', '▟', '▙'];

/// Cells covered by a screen rectangle, clipped to the play field.
/// Columns and rows are half-open ranges relative to the field's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub col0: u16,
    pub col1: u16,
    pub row0: u16,
    pub row1: u16,
}

/// Map a screen rectangle in world pixels onto play-field cells.
/// Returns `None` when nothing of it is visible.
pub fn cell_span(rect: &Rect) -> Option<CellSpan> {
    let clip = |lo: f32, hi: f32, cell: f32, max: u16| -> Option<(u16, u16)> {
        let a = (lo / cell).floor().max(0.0);
        let b = (hi / cell).ceil().min(max as f32);
        if a >= b {
            None
        } else {
            Some((a as u16, b as u16))
        }
    };
    let (col0, col1) = clip(rect.x, rect.right(), CELL_W, VIEW_COLS)?;
    let (row0, row1) = clip(rect.y, rect.bottom(), CELL_H, VIEW_ROWS)?;
    Some(CellSpan {
        col0,
        col1,
        row0,
        row1,
    })
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  Entities are drawn in collection order, so
/// later ones cover earlier ones.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state)?;
    draw_background(out)?;

    let offset = state.player().x;
    for entity in state.entities() {
        draw_entity(out, entity, offset)?;
    }

    draw_controls_hint(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, SCREEN_ROWS - 1))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W) -> std::io::Result<()> {
    let blank = " ".repeat(VIEW_COLS as usize);
    for row in 0..VIEW_ROWS {
        out.queue(cursor::MoveTo(0, VIEW_TOP + row))?;
        out.queue(style::SetBackgroundColor(row_background(row)))?;
        out.queue(Print(&blank))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Rows whose top edge is at or below the floor belong to the ground strip.
fn row_background(row: u16) -> Color {
    if row as f32 * CELL_H >= FLOOR_Y {
        C_GROUND
    } else {
        C_SKY
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(out: &mut W, entity: &Entity, offset: f32) -> std::io::Result<()> {
    let Some(span) = cell_span(&entity.draw_rect(offset)) else {
        return Ok(());
    };

    let (glyph, colour) = match entity {
        Entity::Player(p) => (PLAYER_GLYPHS[p.frame % ANIMATION_FRAMES], C_PLAYER),
        Entity::Obstacle(_) => ('█', C_TUBE),
        Entity::Enemy(e) if e.is_on_fire() => ('▒', C_ENEMY_BURNING),
        Entity::Enemy(_) => ('▓', C_ENEMY),
        Entity::Projectile(_) => ('●', C_PROJECTILE),
    };

    let run: String = std::iter::repeat(glyph)
        .take((span.col1 - span.col0) as usize)
        .collect();
    out.queue(style::SetForegroundColor(colour))?;
    for row in span.row0..span.row1 {
        out.queue(style::SetBackgroundColor(row_background(row)))?;
        out.queue(cursor::MoveTo(span.col0, VIEW_TOP + row))?;
        out.queue(Print(&run))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let burning = state.enemies().filter(|e| e.is_on_fire()).count();
    let line = format!(
        "x:{:>6.0}  enemies:{:>2} ({} burning)  fireballs:{:>3}  tick:{:>7}",
        state.player().x,
        state.enemies().count(),
        burning,
        state.projectiles().count(),
        state.frame,
    );
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(line))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, SCREEN_ROWS - 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Jump   F : Throw   Q : Quit"))?;
    Ok(())
}

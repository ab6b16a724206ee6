use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use tracing::{info, warn};

use platformer::compute::{init_state, tick};
use platformer::controller::Controller;
use platformer::display::{self, SCREEN_COLS, SCREEN_ROWS};
use platformer::error::{GameError, GameResult};
use platformer::input::KeyTracker;
use platformer::term::{chain_panic_hook, restore_terminal};
use platformer::tuning::FRAME_MILLIS;

const FRAME: Duration = Duration::from_millis(FRAME_MILLIS); // ≈60 FPS

// ── Logging ───────────────────────────────────────────────────────────────────

/// stdout belongs to the game screen, so logs only go to the file named by
/// `PLATFORMER_LOG`.  Without it no subscriber is installed.
fn init_tracing() -> GameResult<()> {
    let Some(path) = std::env::var_os("PLATFORMER_LOG").map(PathBuf::from) else {
        return Ok(());
    };
    let file = File::create(&path).map_err(|source| GameError::LogFile {
        path: path.clone(),
        source,
    })?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .compact()
            .init();
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        previous(info);
    }));
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits; returns the number of ticks simulated.
///
/// Each iteration drains input, applies it, advances the world one tick,
/// renders, then sleeps out the rest of the frame.  A quit request still
/// lets the current tick finish.
///
/// Key events go through a `KeyTracker`, which keeps a key held while its
/// last press or repeat is fresh (see `HOLD_WINDOW`).  Terminals with
/// keyboard enhancement also send releases, which drop the key immediately.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> GameResult<u64> {
    let mut state = init_state();
    let mut controller = Controller::new();

    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    info!("game loop started");
    while controller.keep_going() {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                keys.record(&key, frame);
            }
        }
        let input = keys.snapshot(frame);

        state = controller.apply_input(&state, &input);
        state = tick(&state);
        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    info!(ticks = state.frame, "game loop finished");
    Ok(state.frame)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    init_tracing()?;

    // The play field is a fixed grid; refuse to start on a smaller terminal.
    let (cols, rows) = terminal::size()?;
    if cols < SCREEN_COLS || rows < SCREEN_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            need_cols: SCREEN_COLS,
            need_rows: SCREEN_ROWS,
        });
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal lacks key-release events, falling back to key repeat");
    }
    chain_panic_hook(move || restore_terminal(keyboard_enhanced));

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    let _ = out.flush();
    restore_terminal(keyboard_enhanced);

    result?;
    println!("Tschüss!");
    Ok(())
}

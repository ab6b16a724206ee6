//! Terminal teardown shared by the normal exit path and the panic hook.

use std::io::{stdout, Write};
use std::panic;

use crossterm::{cursor, event::PopKeyboardEnhancementFlags, terminal, ExecutableCommand};

/// Leave the alternate screen and raw mode.  Errors are ignored: this runs
/// on the way out, possibly while unwinding.
pub fn restore_terminal(keyboard_enhanced: bool) {
    let mut out = stdout();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}

/// Install a panic hook that runs `first` and then whatever hook was
/// installed before.
pub fn chain_panic_hook<F>(first: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        first();
        previous(info);
    }));
}

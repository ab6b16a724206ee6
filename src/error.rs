use std::io;
use std::path::PathBuf;

pub type GameResult<T> = Result<T, GameError>;

/// Everything that can stop the game.  The simulation itself never fails;
/// these all come from the terminal or the log file.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("terminal is {cols}x{rows}, the game needs at least {need_cols}x{need_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        need_cols: u16,
        need_rows: u16,
    },

    #[error("cannot open log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("You need at least 2 players to play!")]
    NotEnoughPlayers { given: i64 },

    #[error("input closed before the contest finished")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl SessionError {
    /// Process exit status for a session that ends with this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

// error.rs - Error type shared by every selector

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectError {
    /// A raw key read was attempted while stdin is redirected.
    #[error("interactive input required: stdin is not a terminal")]
    InteractiveInputRequired,

    #[error("cannot select from an empty item list")]
    EmptyItemList,

    /// stdin reached EOF while a numbered selection was still pending.
    #[error("input closed before a selection was made")]
    InputClosed,

    /// Ctrl-C pressed during a raw key read (raw mode swallows SIGINT).
    #[error("selection interrupted")]
    Interrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SelectError>;

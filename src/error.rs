use thiserror::Error;

/// Fatal machine conditions, surfaced to the caller instead of killing the
/// host process. The driver decides whether to halt, log, or restart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("rom is too large ({size} bytes), max is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("memory access out of bounds at {addr:#06X}")]
    AddressOutOfBounds { addr: u16 },

    #[error("unsupported opcode {opcode:#06X}")]
    UnsupportedOpcode { opcode: u16 },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return with empty call stack")]
    StackUnderflow,
}

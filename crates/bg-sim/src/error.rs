use bg_core::BgError;
use bg_grid::GridError;
use bg_program::ProgramError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] BgError),

    #[error("board error: {0}")]
    Grid(#[from] GridError),

    #[error("program error: {0}")]
    Program(#[from] ProgramError),

    #[error("control signal not delivered: the simulation has been dropped")]
    Disconnected,
}

pub type SimResult<T> = Result<T, SimError>;

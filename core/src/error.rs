use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Ran out of daily random seeds")]
    OutOfDailySeeds,

    #[error("Invalid gaussian bounds: min {min} > max {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Insufficient currency: {cost}")]
    InsufficientCurrency { cost: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GameResult<T> = Result<T, GameError>;

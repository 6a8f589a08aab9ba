use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error, PartialEq)]
pub enum DemoError {
    #[error("switch interval must be a positive finite number of seconds, got {0}")]
    InvalidInterval(f32),

    #[error("scalar range [{min}, {max}] is empty")]
    InvalidScalarRange { min: i32, max: i32 },

    #[error("time step must be a positive finite number of seconds, got {0}")]
    InvalidTimeStep(f32),

    #[error("cannot take the angle of a zero-length vector")]
    ZeroMagnitude,

    #[error("cosine {0} is outside [-1, 1], no angle exists")]
    CosineOutOfRange(f32),

    #[error("sdl: {0}")]
    Sdl(String),
}


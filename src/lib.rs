pub mod args;
pub mod error;
pub mod model;
pub mod run;

pub use error::ScoreError;
pub use model::{EVEN_MARKER, INVALID_MARKER, ScoreReport, SpeedgolfScore};

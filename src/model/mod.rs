pub mod arithmetic;
pub mod duration;
pub mod parse;
pub mod report;
pub mod score;

pub use report::*;
pub use score::*;

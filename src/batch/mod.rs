//! Running many games and tallying where each hand finished.

mod driver;
mod scoreboard;

pub use driver::{Batch, BatchConfig};
pub use scoreboard::Scoreboard;

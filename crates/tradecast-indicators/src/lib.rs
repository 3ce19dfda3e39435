//! Technical indicators for the signal pipeline.
//!
//! Every indicator returns one output per input row, `None` until the
//! indicator's warm-up length is reached, so columns line up 1:1 with the
//! bars they were computed from.

mod momentum;
mod moving_average;

pub use momentum::{Macd, MacdLines, Rsi};
pub use moving_average::{Ema, Sma};

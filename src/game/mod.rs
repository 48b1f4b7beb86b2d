//! The President round: hands, strategies, the heap and the turn loop.
//!
//! A round deals the whole deck, then hands take turns beating the top of
//! the heap until all but one have emptied their hands. The order in which
//! hands empty is the result: first out wins, last left loses.

mod hand;
mod heap;
mod observer;
mod round;
mod strategy;

pub use hand::{Hand, HandCards};
pub use heap::{Heap, HeapEntry};
pub use observer::{EventLog, NoopObserver, RoundEvent, RoundObserver, TracingObserver};
pub use round::{play_round, Round, RoundOutcome, RoundStatus, Termination};
pub use strategy::Strategy;

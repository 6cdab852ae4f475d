//! The mining engine.

pub use miner::{Miner, MiningOptions};

mod miner;

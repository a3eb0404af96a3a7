//! Benchmark problem implementations.
//!
//! | Problem | Objectives | Constraints | Reference |
//! |---------|------------|-------------|-----------|
//! | [`Lircmop1`] | 2 | 2 | Fan et al., Soft Computing (2019) |
//! | [`Lircmop2`] | 2 | 2 | Fan et al., Soft Computing (2019) |

pub mod lircmop;

pub use lircmop::{Lircmop1, Lircmop2};

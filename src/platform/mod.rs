//! Platform abstraction layer
//!
//! Host-side helpers that sit between a frame scheduler (browser animation
//! frames, a terminal loop, a test harness) and `Session::tick`. The
//! simulation itself never depends on anything here.

pub mod ticker;

pub use ticker::Ticker;

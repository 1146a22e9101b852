//! It is highly recommended to familiarize yourself with the following crates:
//! * [Tokio](https://docs.rs/tokio/latest/tokio)
//! * [embedded_hal](https://docs.rs/embedded-hal/0.2/embedded_hal)
//!
//! Alert-Monitor runs the proximity and fall alert firmware on top of a [Tokio](https://tokio.rs) runtime.
//!
//! Two periodic timers stand in for the hardware timer interrupts. On expiry they give a
//! [trigger::WakeSignal] to their workers and do nothing else. A wake signal holds a single
//! permit, so a worker that is busy while several timer ticks go by wakes up only once.
//!
//! The workers (see [operators]) are:
//! * the distance sampler, publishing every ranging result in a [shared::SharedDistance],
//! * the alarm evaluator, driving the indicators and the alarm line from that distance,
//! * the status broadcaster, reporting the distance and alarm state over the wireless link,
//! * the fall detector, echoing the analog channel on the wired link and alerting on a fall.
//!
//! The board itself is behind the traits in [drivers]. The `alert-monitor` binary runs
//! the workers against a simulated board.

/// This module contains the configuration file format and its defaults.
pub mod config;
/// This module contains the error type used during startup.
pub mod error;
/// This module contains the state shared between workers: the distance cell and the alarm line.
pub mod shared;
/// This module contains the wake signal and the periodic timers that give it.
pub mod trigger;
/// This module contains the peripheral traits and the simulated and recording boards.
pub mod drivers;
/// This module contains the workers and the startup sequence.
pub mod operators;

pub use config::Config;
pub use error::{Error, Result};
pub use operators::launcher::{launch, Monitor};

//! Operators are the workers of the monitor.
//!
//! Each one owns the peripherals it drives and runs as its own task. They share
//! nothing but the distance cell, the read-only alarm line state and the wireless link.

/// This operator takes one ranging measurement per wake and publishes it in the shared distance cell.
pub mod sampler;

/// This operator classifies the shared distance on every wake, lights the indicators and
/// holds the alarm line for the matching band.
pub mod evaluator;

/// This operator free-runs on a fixed delay and reports the distance and alarm state over the wireless link.
pub mod broadcaster;

/// This operator reads the analog channel on every wake, echoes it on the wired link and
/// raises a wireless alert on a fall.
pub mod fall;

/// This is the startup sequence that wires the board, starts the timers and spawns the operators
pub mod launcher;

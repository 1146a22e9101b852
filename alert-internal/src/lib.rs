//! Board-side building blocks of the proximity and fall alert monitor.
//!
//! It is highly recommended to familiarize yourself with the following crates:
//! * [embedded_hal](https://docs.rs/embedded-hal/0.2/embedded_hal)
//! * [ufmt](https://docs.rs/ufmt/latest/ufmt)
//!
//! This crate holds everything that would live on the microcontroller no matter which
//! executor drives it: the pin map, the default periods and thresholds, the alarm band
//! policy and the text frames sent over the wired and wireless serial links.
//! It performs no I/O and allocates nothing, so the same code runs on the board and
//! inside the `alert-monitor` host runtime.

#![no_std]

/// Re-exported so drivers and workers agree on the one discrete output trait.
pub use embedded_hal::digital::v2::OutputPin;

/// GPIO wired to the HC-SR04 echo line
pub const ECHO_GPIO: u8 = 5;
/// GPIO wired to the HC-SR04 trigger line
pub const TRIGGER_GPIO: u8 = 3;
/// GPIO driving the physical alarm line
pub const ALARM_GPIO: u8 = 0;

/// Period of the proximity timer (timer A) in microseconds
pub const PROXIMITY_PERIOD_US: u64 = 500_000;
/// Period of the fall detection timer (timer B) in microseconds
pub const FALL_PERIOD_US: u64 = 500_000;
/// Delay between two status broadcasts in milliseconds
pub const STATUS_PERIOD_MS: u64 = 500;

/// Every distance at or below this is "near"
pub const NEAR_CM: u16 = 500;
/// Lower bound (inclusive) of the caution band
pub const CAUTION_MIN_CM: u16 = 300;
/// Upper bound (inclusive) of the danger band
pub const DANGER_MAX_CM: u16 = 300;

/// How long the alarm line stays asserted for the caution band
pub const CAUTION_HOLD_MS: u64 = 1000;
/// How long the alarm line stays asserted for the danger band
pub const DANGER_HOLD_MS: u64 = 500;
/// Pause after every evaluation pass before the next wake is consumed
pub const HOUSEKEEPING_MS: u64 = 1000;

/// Raw analog value above which a fall is reported
pub const FALL_THRESHOLD: u16 = 4;
/// Baud rate of the wired serial link to the PC
pub const WIRED_BAUD_RATE: u32 = 115_200;
/// Name advertised by the wireless serial link
pub const WIRELESS_DEVICE_NAME: &str = "Alertas de seguridad";
/// Largest frame, in bytes, either link is asked to send
pub const FRAME_SIZE: usize = 48;

/// This module contains the alarm band policy shared by the evaluator and the broadcaster
pub mod alarm;

/// This module contains the identifiers of the indicators, analog channels and serial ports on the board
pub mod board;

/// This module renders the text frames sent over the wired and wireless links
pub mod frames;

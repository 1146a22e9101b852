//! Narrow interfaces to the board peripherals.
//!
//! The workers never talk to hardware directly. Everything they need is one of the
//! traits below, so the same workers run against the simulated board, the recording
//! board used by the tests, or real drivers.

use std::convert::Infallible;

use alert_internal::{
    board::{AnalogChannel, AnalogConfig, Indicator, SerialPort},
    OutputPin,
};

use crate::error::Result;

/// This driver simulates the board: a wandering ranging target and a noisy analog channel.
pub mod sim;

/// This driver forwards link frames to the process log through a channel.
pub mod console;

/// This driver records every pin change and frame with a timestamp, for tests.
pub mod mock;

/// A discrete output line such as an indicator LED or the alarm line
pub type DiscreteOutput = Box<dyn OutputPin<Error = Infallible> + Send>;

/// Ultrasonic ranging sensor. The driver is brought up and torn down around every read.
pub trait RangingSensor: Send{
    fn init(&mut self, echo_gpio: u8, trigger_gpio: u8);
    /// Blocks for one echo. A missing echo comes back as 0, same as a touching object.
    fn read_distance_cm(&mut self) -> u16;
    fn deinit(&mut self);
}

pub trait AnalogInput: Send{
    fn init(&mut self, config: AnalogConfig) -> Result<()>;
    /// One conversion. Failures are not reported, the raw value is used as is.
    fn read_single(&mut self, channel: AnalogChannel) -> u16;
}

/// UART to the PC
pub trait WiredSerial: Send + Sync{
    fn init(&mut self, port: SerialPort, baud_rate: u32) -> Result<()>;
    fn send_text(&self, text: &[u8]) -> Result<()>;
}

/// Wireless serial link to the phone dashboard. Shared by the broadcaster and the fall detector.
pub trait WirelessSerial: Send + Sync{
    fn init(&mut self, device_name: &str) -> Result<()>;
    fn send_text(&self, text: &[u8]) -> Result<()>;
}

/// The three indicator LEDs
pub struct IndicatorPins{
    pub near: DiscreteOutput,
    pub caution: DiscreteOutput,
    pub danger: DiscreteOutput,
}

impl IndicatorPins{
    /// Turns one indicator on
    pub fn set(&mut self, indicator: Indicator){
        let pin = match indicator{
            Indicator::Near => &mut self.near,
            Indicator::Caution => &mut self.caution,
            Indicator::Danger => &mut self.danger,
        };
        let _ = pin.set_high();
    }
}

/// Every peripheral the monitor consumes
pub struct Board{
    pub ranging: Box<dyn RangingSensor>,
    pub analog: Box<dyn AnalogInput>,
    pub wired: Box<dyn WiredSerial>,
    pub wireless: Box<dyn WirelessSerial>,
    pub indicators: IndicatorPins,
    pub alarm: DiscreteOutput,
}

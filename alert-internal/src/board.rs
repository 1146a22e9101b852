use serde::{Deserialize, Serialize};
use ufmt::derive::uDebug;

/// The three indicator LEDs on the board
#[derive(uDebug, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator{
    /// LED 1
    Near,
    /// LED 2
    Caution,
    /// LED 3
    Danger,
}

impl Indicator{
    pub fn name(&self) -> &'static str{
        match self{
            Indicator::Near => "near",
            Indicator::Caution => "caution",
            Indicator::Danger => "danger",
        }
    }
}

#[derive(uDebug, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalogChannel{
    Ch0,
    Ch1,
    Ch2,
    Ch3,
}

#[derive(uDebug, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdcMode{
    /// One conversion per read request
    Single,
    /// Free running conversions at a fixed sample rate
    Continuous,
}

/// Configuration handed to the analog input driver on startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalogConfig{
    pub input: AnalogChannel,
    pub mode: AdcMode,
}

impl AnalogConfig{
    pub fn single(input: AnalogChannel) -> Self{
        Self{
            input,
            mode: AdcMode::Single,
        }
    }
}

#[derive(uDebug, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerialPort{
    /// The USB bridge to the PC
    Pc,
    /// The expansion connector UART
    Connector,
}

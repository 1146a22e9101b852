//! Configuration for the alert monitor
//!
//! Loaded from an optional TOML file. Every section and field may be left out, in
//! which case the board defaults from `alert_internal` are used.

use std::{fs, path::Path, time::Duration};

use alert_internal::{
    alarm::Thresholds,
    board::{AnalogChannel, SerialPort},
    ALARM_GPIO, CAUTION_HOLD_MS, DANGER_HOLD_MS, ECHO_GPIO, FALL_PERIOD_US, FALL_THRESHOLD,
    HOUSEKEEPING_MS, PROXIMITY_PERIOD_US, STATUS_PERIOD_MS, TRIGGER_GPIO, WIRED_BAUD_RATE,
    WIRELESS_DEVICE_NAME,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config{
    pub proximity: ProximityConfig,
    pub alarm: AlarmConfig,
    pub status: StatusConfig,
    pub fall: FallConfig,
}

/// Proximity timer and ranging sensor wiring
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProximityConfig{
    /// Period of the timer waking the sampler and the evaluator
    pub period_us: u64,
    pub echo_gpio: u8,
    pub trigger_gpio: u8,
}

/// Alarm evaluator policy
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AlarmConfig{
    pub thresholds: Thresholds,
    /// Alarm line hold for the caution band
    pub caution_hold_ms: u64,
    /// Alarm line hold for the danger band
    pub danger_hold_ms: u64,
    /// Pause after every pass
    pub housekeeping_ms: u64,
    pub alarm_gpio: u8,
}

/// Status broadcaster over the wireless link
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StatusConfig{
    pub period_ms: u64,
    /// Name the wireless link advertises
    pub device_name: String,
}

/// Fall detector and its wired link
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FallConfig{
    pub period_us: u64,
    pub channel: AnalogChannel,
    /// Raw readings strictly above this are a fall
    pub threshold: u16,
    pub port: SerialPort,
    pub baud_rate: u32,
}

impl Default for ProximityConfig{
    fn default() -> Self{
        Self{
            period_us: PROXIMITY_PERIOD_US,
            echo_gpio: ECHO_GPIO,
            trigger_gpio: TRIGGER_GPIO,
        }
    }
}

impl Default for AlarmConfig{
    fn default() -> Self{
        Self{
            thresholds: Thresholds::default(),
            caution_hold_ms: CAUTION_HOLD_MS,
            danger_hold_ms: DANGER_HOLD_MS,
            housekeeping_ms: HOUSEKEEPING_MS,
            alarm_gpio: ALARM_GPIO,
        }
    }
}

impl Default for StatusConfig{
    fn default() -> Self{
        Self{
            period_ms: STATUS_PERIOD_MS,
            device_name: WIRELESS_DEVICE_NAME.to_string(),
        }
    }
}

impl Default for FallConfig{
    fn default() -> Self{
        Self{
            period_us: FALL_PERIOD_US,
            channel: AnalogChannel::Ch0,
            threshold: FALL_THRESHOLD,
            port: SerialPort::Pc,
            baud_rate: WIRED_BAUD_RATE,
        }
    }
}

impl ProximityConfig{
    pub fn period(&self) -> Duration{
        Duration::from_micros(self.period_us)
    }
}

impl AlarmConfig{
    pub fn caution_hold(&self) -> Duration{
        Duration::from_millis(self.caution_hold_ms)
    }
    pub fn danger_hold(&self) -> Duration{
        Duration::from_millis(self.danger_hold_ms)
    }
    pub fn housekeeping(&self) -> Duration{
        Duration::from_millis(self.housekeeping_ms)
    }
}

impl StatusConfig{
    pub fn period(&self) -> Duration{
        Duration::from_millis(self.period_ms)
    }
}

impl FallConfig{
    pub fn period(&self) -> Duration{
        Duration::from_micros(self.period_us)
    }
}

impl Config{
    /// Load and validate a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self>{
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self>{
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the workers cannot run with
    pub fn validate(&self) -> Result<()>{
        if self.proximity.period_us == 0{
            return Err(Error::InvalidConfig("proximity.period_us must be non-zero".into()));
        }
        if self.fall.period_us == 0{
            return Err(Error::InvalidConfig("fall.period_us must be non-zero".into()));
        }
        if self.status.period_ms == 0{
            return Err(Error::InvalidConfig("status.period_ms must be non-zero".into()));
        }
        if self.fall.baud_rate == 0{
            return Err(Error::InvalidConfig("fall.baud_rate must be non-zero".into()));
        }
        let t = &self.alarm.thresholds;
        if t.caution_min_cm > t.near_cm{
            return Err(Error::InvalidConfig(format!(
                "alarm.thresholds.caution_min_cm ({}) is above near_cm ({})",
                t.caution_min_cm, t.near_cm
            )));
        }
        Ok(())
    }
}

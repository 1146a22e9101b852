use std::convert::Infallible;

use alert_internal::{
    board::{AdcMode, AnalogChannel, AnalogConfig, Indicator},
    OutputPin,
};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::Config,
    error::{Error, Result},
};

use super::{
    console::{ConsoleFrame, ConsoleWired, ConsoleWireless},
    AnalogInput, Board, IndicatorPins, RangingSensor,
};

/// Farthest echo the simulated target wanders to
pub const SIM_MAX_RANGE_CM: u16 = 700;
/// Largest change between two readings
pub const SIM_MAX_STEP_CM: i32 = 40;
/// One read in this many loses its echo
pub const SIM_TIMEOUT_ODDS: u32 = 50;
/// One analog read in this many is a spike
pub const SIM_SPIKE_ODDS: u32 = 50;

/// A target wandering in front of the sensor
pub struct SimRangingSensor{
    rng: StdRng,
    target_cm: i32,
    wired: Option<(u8, u8)>,
}

impl SimRangingSensor{
    pub fn new(seed: u64) -> SimRangingSensor{
        Self{
            rng: StdRng::seed_from_u64(seed),
            target_cm: SIM_MAX_RANGE_CM as i32,
            wired: None,
        }
    }
}

impl RangingSensor for SimRangingSensor{
    fn init(&mut self, echo_gpio: u8, trigger_gpio: u8){
        trace!("Ranging sensor up on echo {} trigger {}", echo_gpio, trigger_gpio);
        self.wired = Some((echo_gpio, trigger_gpio));
    }

    fn read_distance_cm(&mut self) -> u16{
        if self.wired.is_none(){
            return 0;
        }
        let step = self.rng.gen_range(-SIM_MAX_STEP_CM..=SIM_MAX_STEP_CM);
        self.target_cm = (self.target_cm + step).clamp(0, SIM_MAX_RANGE_CM as i32);
        if self.rng.gen_ratio(1, SIM_TIMEOUT_ODDS){
            debug!("Simulated echo lost");
            return 0;
        }
        self.target_cm as u16
    }

    fn deinit(&mut self){
        self.wired = None;
    }
}

/// Accelerometer-like channel: a low resting level with rare spikes
pub struct SimAnalogInput{
    rng: StdRng,
    config: Option<AnalogConfig>,
}

impl SimAnalogInput{
    pub fn new(seed: u64) -> SimAnalogInput{
        Self{
            rng: StdRng::seed_from_u64(seed),
            config: None,
        }
    }
}

impl AnalogInput for SimAnalogInput{
    fn init(&mut self, config: AnalogConfig) -> Result<()>{
        if config.mode != AdcMode::Single{
            return Err(Error::DriverInit{
                driver: "analog input",
                reason: format!("{:?} conversions are not simulated", config.mode),
            });
        }
        self.config = Some(config);
        Ok(())
    }

    fn read_single(&mut self, channel: AnalogChannel) -> u16{
        match self.config{
            Some(c) if c.input == channel => {}
            _ => return 0,
        }
        if self.rng.gen_ratio(1, SIM_SPIKE_ODDS){
            return self.rng.gen_range(100..=3300);
        }
        self.rng.gen_range(0..=4)
    }
}

/// Output line that only logs its level
pub struct LoggedPin{
    name: String,
    high: bool,
}

impl LoggedPin{
    pub fn new(name: impl Into<String>) -> LoggedPin{
        Self{name: name.into(), high: false}
    }
    pub fn indicator(indicator: Indicator) -> LoggedPin{
        Self::new(format!("{} LED", indicator.name()))
    }
    pub fn alarm(gpio: u8) -> LoggedPin{
        Self::new(format!("Alarm line (GPIO {})", gpio))
    }
    pub fn name(&self) -> &str{
        &self.name
    }
    pub fn is_high(&self) -> bool{
        self.high
    }
}

impl OutputPin for LoggedPin{
    type Error = Infallible;

    fn set_low(&mut self) -> std::result::Result<(), Infallible>{
        if self.high{
            debug!("{} off", self.name);
        }
        self.high = false;
        Ok(())
    }
    fn set_high(&mut self) -> std::result::Result<(), Infallible>{
        if !self.high{
            debug!("{} on", self.name);
        }
        self.high = true;
        Ok(())
    }
}

/// A complete simulated board wired as `config` describes. Frames sent on either link come
/// out of the returned receiver.
pub fn board(seed: u64, config: &Config) -> (Board, flume::Receiver<ConsoleFrame>){
    let (tx, rx) = flume::unbounded();
    let board = Board{
        ranging: Box::new(SimRangingSensor::new(seed)),
        analog: Box::new(SimAnalogInput::new(seed.wrapping_add(1))),
        wired: Box::new(ConsoleWired::new(tx.clone())),
        wireless: Box::new(ConsoleWireless::new(tx)),
        indicators: IndicatorPins{
            near: Box::new(LoggedPin::indicator(Indicator::Near)),
            caution: Box::new(LoggedPin::indicator(Indicator::Caution)),
            danger: Box::new(LoggedPin::indicator(Indicator::Danger)),
        },
        alarm: Box::new(LoggedPin::alarm(config.alarm.alarm_gpio)),
    };
    (board, rx)
}

use std::sync::Arc;

use alert_internal::{
    board::AnalogChannel,
    frames::{reading, Frame},
};
use log::{debug, info, warn};

use crate::{
    drivers::{AnalogInput, WiredSerial, WirelessSerial},
    trigger::WakeSignal,
};

/// Decides whether a sample is a fall.
///
/// This is where a multi-channel algorithm plugs in. The board only wires one
/// accelerometer axis, so the detector feeds one sample per wake.
pub trait FallCriterion: Send{
    fn is_fall(&mut self, sample: u16) -> bool;
}

/// A fall is any raw sample strictly above the threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawThreshold{
    pub threshold: u16,
}

impl FallCriterion for RawThreshold{
    fn is_fall(&mut self, sample: u16) -> bool{
        sample > self.threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallCheck{
    pub sample: u16,
    pub fall: bool,
}

pub struct FallDetector{
    analog: Box<dyn AnalogInput>,
    channel: AnalogChannel,
    criterion: Box<dyn FallCriterion>,
    wired: Box<dyn WiredSerial>,
    wireless: Arc<dyn WirelessSerial>,
    wake: WakeSignal,
}

impl FallDetector{
    pub fn new(
        analog: Box<dyn AnalogInput>,
        channel: AnalogChannel,
        criterion: Box<dyn FallCriterion>,
        wired: Box<dyn WiredSerial>,
        wireless: Arc<dyn WirelessSerial>,
        wake: WakeSignal,
    ) -> FallDetector{
        Self{
            analog,
            channel,
            criterion,
            wired,
            wireless,
            wake,
        }
    }

    /// Reads the channel once, echoes the raw value on the wired link and alerts on a fall
    pub fn check(&mut self) -> FallCheck{
        let sample = self.analog.read_single(self.channel);
        debug!("Fall channel {:?} read {}", self.channel, sample);
        if let Err(e) = self.wired.send_text(reading(sample).as_bytes()){
            warn!("Dropped reading {}: {}", sample, e);
        }

        let fall = self.criterion.is_fall(sample);
        if fall{
            info!("Fall detected (sample {})", sample);
            if let Err(e) = self.wireless.send_text(Frame::FallDetected.render().as_bytes()){
                warn!("Dropped fall alert: {}", e);
            }
        }
        FallCheck{sample, fall}
    }

    pub async fn run(mut self){
        loop{
            self.wake.take().await;
            self.check();
        }
    }
}

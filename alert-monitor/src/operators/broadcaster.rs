use std::sync::Arc;

use alert_internal::{
    alarm::{AlarmBand, Thresholds},
    frames::Frame,
};
use log::{debug, warn};
use tokio::time::{sleep, Duration};

use crate::{
    drivers::WirelessSerial,
    shared::{AlarmLineState, SharedDistance},
};

/// Periodic status over the wireless link. Not woken by anyone, it just sleeps its period.
pub struct StatusBroadcaster{
    thresholds: Thresholds,
    period: Duration,
    distance: SharedDistance,
    alarm: AlarmLineState,
    wireless: Arc<dyn WirelessSerial>,
}

/// Frames for one cycle. Exactly one category: a warning and/or the distance gauge for
/// the caution and danger bands, the heartbeat otherwise. Warnings only go out while the
/// alarm line is asserted.
pub fn status_frames(thresholds: &Thresholds, distance_cm: u16, alarm_asserted: bool) -> Vec<Frame>{
    let mut frames = Vec::with_capacity(2);
    match thresholds.band(distance_cm){
        AlarmBand::Caution => {
            if alarm_asserted{
                frames.push(Frame::CautionWarning);
            }
            frames.push(Frame::Distance(distance_cm));
        }
        AlarmBand::Danger => {
            if alarm_asserted{
                frames.push(Frame::DangerWarning);
            }
            frames.push(Frame::Distance(distance_cm));
        }
        AlarmBand::Safe => frames.push(Frame::Heartbeat),
    }
    frames
}

impl StatusBroadcaster{
    pub fn new(
        thresholds: Thresholds,
        period: Duration,
        distance: SharedDistance,
        alarm: AlarmLineState,
        wireless: Arc<dyn WirelessSerial>,
    ) -> StatusBroadcaster{
        Self{
            thresholds,
            period,
            distance,
            alarm,
            wireless,
        }
    }

    /// Reads the shared state once and sends this cycle's frames
    pub fn cycle(&self) -> Vec<Frame>{
        let distance = self.distance.load();
        let asserted = self.alarm.is_asserted();
        let frames = status_frames(&self.thresholds, distance, asserted);
        debug!("Status at {} cm (alarm {}): {:?}", distance, asserted, frames);
        for frame in frames.iter(){
            if let Err(e) = self.wireless.send_text(frame.render().as_bytes()){
                warn!("Dropped {:?}: {}", frame, e);
            }
        }
        frames
    }

    pub async fn run(self){
        loop{
            sleep(self.period).await;
            self.cycle();
        }
    }
}

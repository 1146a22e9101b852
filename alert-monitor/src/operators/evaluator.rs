use alert_internal::{
    alarm::{Branches, Thresholds},
    board::Indicator,
};
use log::debug;
use tokio::time::{sleep, Duration};

use crate::{
    config::AlarmConfig,
    drivers::IndicatorPins,
    shared::{AlarmLine, AlarmLineState, SharedDistance},
    trigger::WakeSignal,
};

/// Turns the latest distance into indicator and alarm line activity.
///
/// Every pass starts from the current reading only. There is no memory of the previous
/// band and no hysteresis, and indicators are only ever switched on.
pub struct AlarmEvaluator{
    thresholds: Thresholds,
    caution_hold: Duration,
    danger_hold: Duration,
    housekeeping: Duration,
    indicators: IndicatorPins,
    alarm: AlarmLine,
    distance: SharedDistance,
    wake: WakeSignal,
}

impl AlarmEvaluator{
    pub fn new(
        config: &AlarmConfig,
        indicators: IndicatorPins,
        alarm: AlarmLine,
        distance: SharedDistance,
        wake: WakeSignal,
    ) -> AlarmEvaluator{
        Self{
            thresholds: config.thresholds,
            caution_hold: config.caution_hold(),
            danger_hold: config.danger_hold(),
            housekeeping: config.housekeeping(),
            indicators,
            alarm,
            distance,
            wake,
        }
    }

    pub fn alarm_state(&self) -> AlarmLineState{
        self.alarm.state()
    }

    /// One pass over the branches. Caution and danger are checked independently, so on
    /// the shared boundary the line is held for caution and then held again for danger.
    /// The distance is not looked at again while a hold is running.
    pub async fn evaluate(&mut self) -> Branches{
        let distance = self.distance.load();
        let branches = self.thresholds.branches(distance);
        debug!("Evaluating {} cm: {:?}", distance, branches);

        if branches.near{
            self.indicators.set(Indicator::Near);
        }
        if branches.caution{
            self.indicators.set(Indicator::Caution);
            self.hold(self.caution_hold).await;
        }
        if branches.danger{
            self.indicators.set(Indicator::Danger);
            self.hold(self.danger_hold).await;
        }
        branches
    }

    async fn hold(&mut self, duration: Duration){
        self.alarm.assert();
        sleep(duration).await;
        self.alarm.release();
    }

    pub async fn run(mut self){
        loop{
            self.wake.take().await;
            self.evaluate().await;
            sleep(self.housekeeping).await;
        }
    }
}

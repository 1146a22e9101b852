use std::sync::Arc;

use alert_internal::board::AnalogConfig;
use log::info;
use tokio::task::JoinHandle;

use crate::{
    config::Config,
    drivers::{Board, WirelessSerial},
    error::Result,
    shared::{AlarmLine, AlarmLineState, SharedDistance},
    trigger::{PeriodicTimer, TimerId, WakeSignal},
};

use super::{
    broadcaster::StatusBroadcaster,
    evaluator::AlarmEvaluator,
    fall::{FallDetector, RawThreshold},
    sampler::DistanceSampler,
};

/// A running monitor. Dropping it aborts the timers and workers; [Monitor::shutdown] also waits for them.
pub struct Monitor{
    distance: SharedDistance,
    alarm: AlarmLineState,
    timers: Vec<PeriodicTimer>,
    workers: Vec<JoinHandle<()>>,
}

impl Monitor{
    pub fn distance(&self) -> &SharedDistance{
        &self.distance
    }
    pub fn alarm_state(&self) -> &AlarmLineState{
        &self.alarm
    }

    /// Stops the timers, then the workers
    pub async fn shutdown(mut self){
        info!("Shutting down monitor");
        for timer in self.timers.iter_mut(){
            timer.stop();
        }
        for worker in self.workers.iter(){
            worker.abort();
        }
        for worker in self.workers.drain(..){
            let _ = worker.await;
        }
        info!("Monitor stopped");
    }
}

impl Drop for Monitor{
    fn drop(&mut self){
        for worker in self.workers.iter(){
            worker.abort();
        }
    }
}

/// Brings the board up, starts both timers and spawns the four workers.
///
/// Timer A wakes the distance sampler and the alarm evaluator, timer B wakes the fall
/// detector. The status broadcaster runs on its own delay.
pub async fn launch(config: &Config, board: Board) -> Result<Monitor>{
    config.validate()?;
    let Board{
        ranging,
        mut analog,
        mut wired,
        mut wireless,
        indicators,
        alarm,
    } = board;

    let alarm = AlarmLine::new(alarm, config.alarm.alarm_gpio);
    wireless.init(&config.status.device_name)?;
    analog.init(AnalogConfig::single(config.fall.channel))?;
    wired.init(config.fall.port, config.fall.baud_rate)?;
    let wireless: Arc<dyn WirelessSerial> = Arc::from(wireless);

    let sampler_wake = WakeSignal::new();
    let evaluator_wake = WakeSignal::new();
    let fall_wake = WakeSignal::new();

    let mut timers = vec![
        PeriodicTimer::waking(
            TimerId::A,
            config.proximity.period(),
            vec![sampler_wake.clone(), evaluator_wake.clone()],
        ),
        PeriodicTimer::waking(TimerId::B, config.fall.period(), vec![fall_wake.clone()]),
    ];
    for timer in timers.iter_mut(){
        timer.start();
    }

    let distance = SharedDistance::default();
    let sampler = DistanceSampler::new(ranging, &config.proximity, distance.clone(), sampler_wake);
    let evaluator = AlarmEvaluator::new(&config.alarm, indicators, alarm, distance.clone(), evaluator_wake);
    let alarm_state = evaluator.alarm_state();
    let broadcaster = StatusBroadcaster::new(
        config.alarm.thresholds,
        config.status.period(),
        distance.clone(),
        alarm_state.clone(),
        wireless.clone(),
    );
    let fall = FallDetector::new(
        analog,
        config.fall.channel,
        Box::new(RawThreshold{
            threshold: config.fall.threshold,
        }),
        wired,
        wireless,
        fall_wake,
    );

    let workers = vec![
        tokio::spawn(sampler.run()),
        tokio::spawn(evaluator.run()),
        tokio::spawn(broadcaster.run()),
        tokio::spawn(fall.run()),
    ];
    info!("Monitor running");

    Ok(Monitor{
        distance,
        alarm: alarm_state,
        timers,
        workers,
    })
}

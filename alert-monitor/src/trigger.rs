use std::{fmt, sync::Arc};

use log::{debug, info};
use tokio::{
    sync::Notify,
    task::JoinHandle,
    time::{interval_at, Duration, Instant, MissedTickBehavior},
};

/// Single slot wake from a producer to one consumer.
///
/// Any number of [WakeSignal::give] calls made while the consumer is busy leave one
/// pending wake behind, so a consumer must re-read whatever state it works on instead of
/// counting wakes.
#[derive(Clone, Default)]
pub struct WakeSignal{
    notify: Arc<Notify>,
}

impl WakeSignal{
    pub fn new() -> WakeSignal{
        Self::default()
    }
    /// Never blocks and touches nothing but the slot, so it is fine to call from a timer expiry.
    pub fn give(&self){
        self.notify.notify_one();
    }
    /// Waits for the pending wake, consuming it
    pub async fn take(&self){
        self.notify.notified().await;
    }
}

impl fmt::Debug for WakeSignal{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        f.write_str("WakeSignal")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerId{
    /// Proximity timer
    A,
    /// Fall detection timer
    B,
}

type Expiry = Box<dyn FnMut() + Send>;

/// A fixed period timer running a short expiry callback.
///
/// The callback stands in for the interrupt handler: it must not block and should only
/// give wake signals.
pub struct PeriodicTimer{
    id: TimerId,
    period: Duration,
    expiry: Option<Expiry>,
    task: Option<JoinHandle<()>>,
}

impl PeriodicTimer{
    pub fn new(id: TimerId, period: Duration, expiry: impl FnMut() + Send + 'static) -> PeriodicTimer{
        Self{
            id,
            period,
            expiry: Some(Box::new(expiry)),
            task: None,
        }
    }

    /// Timer whose expiry gives every target a wake
    pub fn waking(id: TimerId, period: Duration, targets: Vec<WakeSignal>) -> PeriodicTimer{
        Self::new(id, period, move ||{
            for target in targets.iter(){
                target.give();
            }
        })
    }

    pub fn id(&self) -> TimerId{
        self.id
    }
    pub fn period(&self) -> Duration{
        self.period
    }
    pub fn running(&self) -> bool{
        self.task.is_some()
    }

    /// Starts counting. The first expiry is one period from now. Returns false if the
    /// timer was already started.
    pub fn start(&mut self) -> bool{
        let mut expiry = match self.expiry.take(){
            Some(e) => e,
            None => return false,
        };
        let id = self.id;
        let period = self.period;
        info!("Starting timer {:?} with a period of {:?}", id, period);
        self.task = Some(tokio::spawn(async move{
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop{
                ticks.tick().await;
                debug!("Timer {:?} expired", id);
                expiry();
            }
        }));
        true
    }

    pub fn stop(&mut self){
        if let Some(task) = self.task.take(){
            info!("Stopping timer {:?}", self.id);
            task.abort();
        }
    }
}

impl Drop for PeriodicTimer{
    fn drop(&mut self){
        if let Some(task) = self.task.take(){
            task.abort();
        }
    }
}

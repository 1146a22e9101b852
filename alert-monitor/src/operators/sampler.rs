use log::debug;

use crate::{config::ProximityConfig, drivers::RangingSensor, shared::SharedDistance, trigger::WakeSignal};

pub struct DistanceSampler{
    sensor: Box<dyn RangingSensor>,
    echo_gpio: u8,
    trigger_gpio: u8,
    distance: SharedDistance,
    wake: WakeSignal,
}

impl DistanceSampler{
    pub fn new(sensor: Box<dyn RangingSensor>, config: &ProximityConfig, distance: SharedDistance, wake: WakeSignal) -> DistanceSampler{
        Self{
            sensor,
            echo_gpio: config.echo_gpio,
            trigger_gpio: config.trigger_gpio,
            distance,
            wake,
        }
    }

    /// One measurement. The driver is only up for the duration of the read.
    /// A lost echo is stored as 0 like any other reading.
    pub fn sample(&mut self) -> u16{
        self.sensor.init(self.echo_gpio, self.trigger_gpio);
        let cm = self.sensor.read_distance_cm();
        self.sensor.deinit();
        self.distance.store(cm);
        debug!("Distance sampled: {} cm", cm);
        cm
    }

    pub async fn run(mut self){
        loop{
            self.wake.take().await;
            self.sample();
        }
    }
}

use std::sync::{
    atomic::{AtomicBool, AtomicU16, Ordering},
    Arc,
};

use log::debug;

use crate::drivers::DiscreteOutput;

/// The latest ranging result in centimeters.
///
/// Written by the distance sampler only, read by the evaluator and the broadcaster.
/// A single atomic word, so readers never observe half of a write.
#[derive(Clone, Default, Debug)]
pub struct SharedDistance{
    cm: Arc<AtomicU16>,
}

impl SharedDistance{
    pub fn new(initial_cm: u16) -> SharedDistance{
        Self{
            cm: Arc::new(AtomicU16::new(initial_cm)),
        }
    }
    pub fn load(&self) -> u16{
        self.cm.load(Ordering::Acquire)
    }
    pub fn store(&self, cm: u16){
        self.cm.store(cm, Ordering::Release);
    }
}

/// The physical alarm line. Not `Clone`: whoever holds it is the only writer.
pub struct AlarmLine{
    pin: DiscreteOutput,
    gpio: u8,
    asserted: Arc<AtomicBool>,
}

/// Read-only view of the alarm line for other workers
#[derive(Clone, Debug)]
pub struct AlarmLineState{
    gpio: u8,
    asserted: Arc<AtomicBool>,
}

impl AlarmLine{
    /// Takes the pin wired to `gpio` and drives it low
    pub fn new(mut pin: DiscreteOutput, gpio: u8) -> AlarmLine{
        let _ = pin.set_low();
        debug!("Alarm line on GPIO {}", gpio);
        Self{
            pin,
            gpio,
            asserted: Arc::new(AtomicBool::new(false)),
        }
    }
    pub fn assert(&mut self){
        debug!("Alarm line (GPIO {}) asserted", self.gpio);
        let _ = self.pin.set_high();
        self.asserted.store(true, Ordering::Release);
    }
    pub fn release(&mut self){
        debug!("Alarm line (GPIO {}) released", self.gpio);
        self.asserted.store(false, Ordering::Release);
        let _ = self.pin.set_low();
    }
    pub fn gpio(&self) -> u8{
        self.gpio
    }
    pub fn is_asserted(&self) -> bool{
        self.asserted.load(Ordering::Acquire)
    }
    pub fn state(&self) -> AlarmLineState{
        AlarmLineState{
            gpio: self.gpio,
            asserted: self.asserted.clone(),
        }
    }
}

impl Drop for AlarmLine{
    fn drop(&mut self){
        if self.is_asserted(){
            self.release();
        }
    }
}

impl AlarmLineState{
    pub fn gpio(&self) -> u8{
        self.gpio
    }
    pub fn is_asserted(&self) -> bool{
        self.asserted.load(Ordering::Acquire)
    }
}

use std::{
    collections::VecDeque,
    convert::Infallible,
    sync::{Arc, Mutex, MutexGuard},
};

use alert_internal::{
    board::{AnalogChannel, AnalogConfig, Indicator, SerialPort},
    OutputPin,
};
use tokio::time::Instant;

use crate::error::{Error, Result};

use super::{AnalogInput, Board, IndicatorPins, RangingSensor, WiredSerial, WirelessSerial};

/// Something a recording peripheral saw
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activity{
    Pin{name: &'static str, high: bool},
    Frame{link: &'static str, text: String},
}

#[derive(Clone, Debug)]
pub struct Record{
    pub at: Instant,
    pub activity: Activity,
}

/// Shared log of everything the recording peripherals saw, in order
#[derive(Clone, Default)]
pub struct Recorder{
    records: Arc<Mutex<Vec<Record>>>,
}

fn locked<T>(m: &Mutex<T>) -> MutexGuard<'_, T>{
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl Recorder{
    pub fn new() -> Recorder{
        Self::default()
    }

    fn push(&self, activity: Activity){
        locked(&self.records).push(Record{
            at: Instant::now(),
            activity,
        });
    }

    pub fn pin(&self, name: &'static str) -> RecordingPin{
        RecordingPin{
            name,
            recorder: self.clone(),
        }
    }
    pub fn link(&self, link: &'static str) -> RecordingLink{
        RecordingLink{
            link,
            recorder: self.clone(),
            ready: false,
            failing: false,
        }
    }

    pub fn records(&self) -> Vec<Record>{
        locked(&self.records).clone()
    }
    pub fn activities(&self) -> Vec<Activity>{
        self.records().into_iter().map(|r| r.activity).collect()
    }
    /// Texts sent on one link, oldest first
    pub fn frames(&self, link: &str) -> Vec<String>{
        self.activities()
            .into_iter()
            .filter_map(|a| match a{
                Activity::Frame{link: l, text} if l == link => Some(text),
                _ => None,
            })
            .collect()
    }
    /// Level changes of one pin with their time
    pub fn levels(&self, name: &str) -> Vec<(Instant, bool)>{
        self.records()
            .into_iter()
            .filter_map(|r| match r.activity{
                Activity::Pin{name: n, high} if n == name => Some((r.at, high)),
                _ => None,
            })
            .collect()
    }
    /// How many times a pin was driven high
    pub fn rises(&self, name: &str) -> usize{
        self.levels(name).iter().filter(|(_, high)| *high).count()
    }
    pub fn clear(&self){
        locked(&self.records).clear();
    }
}

pub struct RecordingPin{
    name: &'static str,
    recorder: Recorder,
}

impl OutputPin for RecordingPin{
    type Error = Infallible;

    fn set_low(&mut self) -> std::result::Result<(), Infallible>{
        self.recorder.push(Activity::Pin{
            name: self.name,
            high: false,
        });
        Ok(())
    }
    fn set_high(&mut self) -> std::result::Result<(), Infallible>{
        self.recorder.push(Activity::Pin{
            name: self.name,
            high: true,
        });
        Ok(())
    }
}

/// Serial link that records frames. Serves as either the wired or the wireless link.
pub struct RecordingLink{
    link: &'static str,
    recorder: Recorder,
    ready: bool,
    failing: bool,
}

impl RecordingLink{
    /// A link that has been initialized and accepts frames
    pub fn ready(mut self) -> RecordingLink{
        self.ready = true;
        self
    }
    /// A link that refuses every frame
    pub fn failing(mut self) -> RecordingLink{
        self.failing = true;
        self
    }

    fn record(&self, text: &[u8]) -> Result<()>{
        if !self.ready || self.failing{
            return Err(Error::LinkClosed(self.link));
        }
        self.recorder.push(Activity::Frame{
            link: self.link,
            text: String::from_utf8_lossy(text).into_owned(),
        });
        Ok(())
    }
}

impl WiredSerial for RecordingLink{
    fn init(&mut self, _port: SerialPort, baud_rate: u32) -> Result<()>{
        if baud_rate == 0{
            return Err(Error::DriverInit{
                driver: self.link,
                reason: "baud rate of 0".into(),
            });
        }
        self.ready = true;
        Ok(())
    }
    fn send_text(&self, text: &[u8]) -> Result<()>{
        self.record(text)
    }
}

impl WirelessSerial for RecordingLink{
    fn init(&mut self, _device_name: &str) -> Result<()>{
        self.ready = true;
        Ok(())
    }
    fn send_text(&self, text: &[u8]) -> Result<()>{
        self.record(text)
    }
}

#[derive(Default, Debug)]
struct RangingScript{
    readings: VecDeque<u16>,
    last: u16,
    wired: bool,
    inits: usize,
    deinits: usize,
    reads_while_down: usize,
}

/// Ranging sensor replaying queued readings. Once the queue is empty the last reading repeats.
#[derive(Clone, Default)]
pub struct ScriptedRanging{
    script: Arc<Mutex<RangingScript>>,
}

impl ScriptedRanging{
    pub fn new(readings: &[u16]) -> ScriptedRanging{
        let sensor = Self::default();
        sensor.push(readings);
        sensor
    }
    pub fn push(&self, readings: &[u16]){
        locked(&self.script).readings.extend(readings.iter().copied());
    }
    pub fn inits(&self) -> usize{
        locked(&self.script).inits
    }
    pub fn deinits(&self) -> usize{
        locked(&self.script).deinits
    }
    /// Reads attempted while the driver was not initialized
    pub fn reads_while_down(&self) -> usize{
        locked(&self.script).reads_while_down
    }
}

impl RangingSensor for ScriptedRanging{
    fn init(&mut self, _echo_gpio: u8, _trigger_gpio: u8){
        let mut s = locked(&self.script);
        s.wired = true;
        s.inits += 1;
    }
    fn read_distance_cm(&mut self) -> u16{
        let mut s = locked(&self.script);
        if !s.wired{
            s.reads_while_down += 1;
            return 0;
        }
        if let Some(next) = s.readings.pop_front(){
            s.last = next;
        }
        s.last
    }
    fn deinit(&mut self){
        let mut s = locked(&self.script);
        s.wired = false;
        s.deinits += 1;
    }
}

/// Analog input replaying queued samples, 0 once exhausted
#[derive(Clone, Default)]
pub struct ScriptedAnalog{
    samples: Arc<Mutex<VecDeque<u16>>>,
    config: Arc<Mutex<Option<AnalogConfig>>>,
}

impl ScriptedAnalog{
    pub fn new(samples: &[u16]) -> ScriptedAnalog{
        let analog = Self::default();
        analog.push(samples);
        analog
    }
    pub fn push(&self, samples: &[u16]){
        locked(&self.samples).extend(samples.iter().copied());
    }
    pub fn config(&self) -> Option<AnalogConfig>{
        *locked(&self.config)
    }
}

impl AnalogInput for ScriptedAnalog{
    fn init(&mut self, config: AnalogConfig) -> Result<()>{
        *locked(&self.config) = Some(config);
        Ok(())
    }
    fn read_single(&mut self, _channel: AnalogChannel) -> u16{
        locked(&self.samples).pop_front().unwrap_or(0)
    }
}

/// A board made of recording and scripted peripherals.
///
/// Pins are named `near`, `caution`, `danger` and `alarm`; links are `wired` and `wireless`.
pub fn board(recorder: &Recorder, ranging: ScriptedRanging, analog: ScriptedAnalog) -> Board{
    Board{
        ranging: Box::new(ranging),
        analog: Box::new(analog),
        wired: Box::new(recorder.link("wired")),
        wireless: Box::new(recorder.link("wireless")),
        indicators: IndicatorPins{
            near: Box::new(recorder.pin(Indicator::Near.name())),
            caution: Box::new(recorder.pin(Indicator::Caution.name())),
            danger: Box::new(recorder.pin(Indicator::Danger.name())),
        },
        alarm: Box::new(recorder.pin("alarm")),
    }
}

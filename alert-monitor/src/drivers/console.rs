use alert_internal::board::SerialPort;
use log::info;

use crate::error::{Error, Result};

use super::{WiredSerial, WirelessSerial};

/// One frame as it left a link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleFrame{
    pub link: &'static str,
    pub text: String,
}

impl ConsoleFrame{
    fn new(link: &'static str, text: &[u8]) -> ConsoleFrame{
        Self{
            link,
            text: String::from_utf8_lossy(text).into_owned(),
        }
    }
}

pub struct ConsoleWired{
    tx: flume::Sender<ConsoleFrame>,
    port: Option<SerialPort>,
}

impl ConsoleWired{
    pub fn new(tx: flume::Sender<ConsoleFrame>) -> ConsoleWired{
        Self{tx, port: None}
    }
}

impl WiredSerial for ConsoleWired{
    fn init(&mut self, port: SerialPort, baud_rate: u32) -> Result<()>{
        if baud_rate == 0{
            return Err(Error::DriverInit{
                driver: "wired serial",
                reason: "baud rate of 0".into(),
            });
        }
        info!("Wired serial on {:?} at {} baud", port, baud_rate);
        self.port = Some(port);
        Ok(())
    }

    fn send_text(&self, text: &[u8]) -> Result<()>{
        if self.port.is_none(){
            return Err(Error::LinkClosed("wired"));
        }
        self.tx
            .send(ConsoleFrame::new("wired", text))
            .map_err(|_| Error::LinkClosed("wired"))
    }
}

pub struct ConsoleWireless{
    tx: flume::Sender<ConsoleFrame>,
    device_name: Option<String>,
}

impl ConsoleWireless{
    pub fn new(tx: flume::Sender<ConsoleFrame>) -> ConsoleWireless{
        Self{
            tx,
            device_name: None,
        }
    }
}

impl WirelessSerial for ConsoleWireless{
    fn init(&mut self, device_name: &str) -> Result<()>{
        if device_name.is_empty(){
            return Err(Error::DriverInit{
                driver: "wireless serial",
                reason: "empty device name".into(),
            });
        }
        info!("Wireless serial advertising as \"{}\"", device_name);
        self.device_name = Some(device_name.to_string());
        Ok(())
    }

    fn send_text(&self, text: &[u8]) -> Result<()>{
        if self.device_name.is_none(){
            return Err(Error::LinkClosed("wireless"));
        }
        self.tx
            .send(ConsoleFrame::new("wireless", text))
            .map_err(|_| Error::LinkClosed("wireless"))
    }
}

/// Logs every frame until all senders are gone
pub async fn print_frames(rx: flume::Receiver<ConsoleFrame>){
    while let Ok(frame) = rx.recv_async().await{
        info!("[{}] {}", frame.link, frame.text.trim_end());
    }
}

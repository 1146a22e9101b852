use core::fmt;

use ufmt::{derive::uDebug, uWrite, uwrite};

use crate::FRAME_SIZE;

/// Text frames understood by the phone dashboard on the wireless link.
///
/// `*C` lines go to the console panel, `*H` lines feed the distance gauge.
#[derive(uDebug, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame{
    CautionWarning,
    DangerWarning,
    Distance(u16),
    Heartbeat,
    FallDetected,
}

impl Frame{
    pub fn render(&self) -> FrameBuf{
        let mut buf = FrameBuf::new();
        let _ = match self{
            Frame::CautionWarning => buf.write_str("*CPrecaución, vehículo cerca\n"),
            Frame::DangerWarning => buf.write_str("*CPeligro, vehículo cerca\n"),
            Frame::Distance(cm) => uwrite!(buf, "*H{} \n", *cm),
            Frame::Heartbeat => buf.write_str("*C\n"),
            Frame::FallDetected => buf.write_str("*CCaída detectada\n"),
        };
        buf
    }
}

/// Raw analog reading as sent over the wired link, one value per line
pub fn reading(value: u16) -> FrameBuf{
    let mut buf = FrameBuf::new();
    let _ = uwrite!(buf, "{}\r\n", value);
    buf
}

/// Returned when a write does not fit in the remaining space
#[derive(uDebug, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overflow;

/// Fixed capacity text buffer. Writes are all or nothing so the contents stay valid UTF-8.
#[derive(Clone, Copy)]
pub struct FrameBuf{
    data: [u8; FRAME_SIZE],
    len: usize,
}

impl FrameBuf{
    pub fn new() -> FrameBuf{
        FrameBuf{
            data: [0u8; FRAME_SIZE],
            len: 0,
        }
    }
    pub fn as_bytes(&self) -> &[u8]{
        &self.data[..self.len]
    }
    pub fn as_str(&self) -> &str{
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
    pub fn len(&self) -> usize{
        self.len
    }
    pub fn is_empty(&self) -> bool{
        self.len == 0
    }
}

impl Default for FrameBuf{
    fn default() -> Self{
        Self::new()
    }
}

impl uWrite for FrameBuf{
    type Error = Overflow;

    fn write_str(&mut self, s: &str) -> Result<(), Overflow>{
        let bytes = s.as_bytes();
        let end = self.len + bytes.len();
        if end > FRAME_SIZE{
            return Err(Overflow);
        }
        self.data[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

impl PartialEq for FrameBuf{
    fn eq(&self, other: &Self) -> bool{
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for FrameBuf {}

impl fmt::Debug for FrameBuf{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        write!(f, "{:?}", self.as_str())
    }
}

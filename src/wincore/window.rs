pub use crate::Result;

use std::convert::TryFrom;

use anyhow::anyhow;

pub type WindowId = u32;

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
    Hidden,
}

impl TryFrom<u8> for WindowState {
    type Error = anyhow::Error;

    fn try_from(val: u8) -> Result<Self> {
        match val {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Minimized),
            2 => Ok(Self::Maximized),
            3 => Ok(Self::Fullscreen),
            4 => Ok(Self::Hidden),
            _ => Err(anyhow!("unable to resolve {} to window state", val)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq)]
pub enum WindowType {
    Normal,
    Dialog,
    Tooltip,
    Popup,
    Utility,
}

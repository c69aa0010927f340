use crate::geometry::Pos;

use std::collections::HashSet;

use strum::EnumIter;
use strum::IntoEnumIterator;

#[repr(u8)]
#[derive(Debug, PartialEq, EnumIter, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Modifier {
    Shift = 1 << 0,
    Ctrl = 1 << 1,
    Alt = 1 << 2,
    Super = 1 << 3,
    CapsLock = 1 << 4,
    NumLock = 1 << 5,
}

impl Modifier {
    pub fn from_mask(mask: u8) -> HashSet<Self> {
        Self::iter()
            .filter(|&modifier| mask & modifier as u8 != 0)
            .collect()
    }

    pub fn mask(modifiers: &HashSet<Self>) -> u8 {
        modifiers
            .iter()
            .fold(0u8, |acc, &modifier| acc | modifier as u8)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Button {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
    Backward,
    Forward,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum MouseEventKind {
    Enter,
    Leave,
    Motion,
    Press,
    Release,
    Wheel,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum KeyEventKind {
    Press,
    Release,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum DragEventKind {
    Begin,
    Move,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseInput {
    pub pos: Pos,
    pub global_pos: Pos,
    pub button: Option<Button>,
    pub modifiers: HashSet<Modifier>,
    pub wheel_delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub code: u32,
    pub text: String,
    pub modifiers: HashSet<Modifier>,
    pub repeat: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragInput {
    pub start: Pos,
    pub current: Pos,
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_masks_round_trip() {
        let modifiers: HashSet<Modifier> =
            [Modifier::Shift, Modifier::Ctrl, Modifier::Super]
                .iter()
                .cloned()
                .collect();

        let mask = Modifier::mask(&modifiers);

        assert_eq!(mask, 0b1011);
        assert_eq!(Modifier::from_mask(mask), modifiers);
    }

    #[test]
    fn empty_mask_yields_no_modifiers() {
        assert!(Modifier::from_mask(0).is_empty());
        assert_eq!(Modifier::mask(&HashSet::new()), 0);
    }

    #[test]
    fn unknown_mask_bits_are_ignored() {
        assert_eq!(
            Modifier::from_mask(0b1100_0001),
            Modifier::from_mask(0b0000_0001)
        );
    }
}

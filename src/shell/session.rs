pub use wincore::Result;

use crate::window::Window;

use wincore::event::EventKind;
use wincore::event::WindowEvent;
use wincore::geometry::Dim;
use wincore::geometry::Pos;
use wincore::screen::Screen;
use wincore::window::WindowId;
use wincore::window::WindowState;
use wincore::window::WindowType;

use std::collections::HashMap;
use std::convert::TryFrom;

use anyhow::anyhow;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub state: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub windows: Vec<WindowRecord>,
    pub focused_window: i64,
}

pub struct Restored {
    pub windows: HashMap<WindowId, Window>,
    pub focus: Option<WindowId>,
    pub next_id: WindowId,
}

impl Snapshot {
    pub fn capture(
        windows: &HashMap<WindowId, Window>,
        focus: Option<WindowId>,
    ) -> Self {
        let mut records = windows
            .values()
            .map(|window| {
                let (pos, dim) = window.geometry().region().values();
                let (x, y) = pos.values();
                let (width, height) = dim.values();

                WindowRecord {
                    id: window.id(),
                    title: window.title(),
                    x,
                    y,
                    width,
                    height,
                    state: window.state() as u8,
                }
            })
            .collect::<Vec<WindowRecord>>();

        records.sort_by_key(|record| record.id);

        Self {
            windows: records,
            focused_window: focus.map(i64::from).unwrap_or(-1),
        }
    }

    // Validates and rebuilds the entire collection up front, so the caller
    // swaps in the result whole or not at all. Windows are reconstructed
    // without a sink, hence no events escape during replay.
    pub fn reconstruct(
        &self,
        screen: &Screen,
        next_id: WindowId,
    ) -> Result<Restored> {
        let mut windows = HashMap::with_capacity(self.windows.len());
        let mut next_id = next_id;

        for record in &self.windows {
            let state = WindowState::try_from(record.state)?;
            let window = Window::new(
                record.id,
                record.title.clone(),
                Dim {
                    w: record.width,
                    h: record.height,
                },
                WindowType::Normal,
            )?;

            window.move_to(Pos {
                x: record.x,
                y: record.y,
            });

            match state {
                WindowState::Minimized => window.minimize(),
                WindowState::Maximized => window.maximize(screen.placeable_region()),
                WindowState::Fullscreen => window.set_fullscreen(true, screen.full_region()),
                WindowState::Normal | WindowState::Hidden => {},
            }

            if windows.insert(record.id, window).is_some() {
                return Err(anyhow!("duplicate window id {} in snapshot", record.id));
            }

            if record.id >= next_id {
                next_id = record.id + 1;
            }
        }

        let focus = match self.focused_window {
            -1 => None,
            id => {
                let id = WindowId::try_from(id)
                    .map_err(|_| anyhow!("focused window id {} out of range", id))?;

                windows
                    .get(&id)
                    .ok_or_else(|| anyhow!("focused window {} missing from snapshot", id))?
                    .handle_event(&WindowEvent::new(id, EventKind::FocusGained));

                Some(id)
            },
        };

        Ok(Restored {
            windows,
            focus,
            next_id,
        })
    }
}

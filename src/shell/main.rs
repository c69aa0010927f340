#![deny(clippy::all)]

#[macro_use]
extern crate log;

use simplelog::LevelFilter;
use simplelog::SimpleLogger;

use wincore::event::EventKind;
use wincore::event::WindowEvent;
use wincore::geometry::Dim;
use wincore::geometry::Padding;
use wincore::geometry::Pos;
use wincore::geometry::Region;
use wincore::input::Button;
use wincore::input::KeyEventKind;
use wincore::input::KeyInput;
use wincore::input::Modifier;
use wincore::input::MouseEventKind;
use wincore::input::MouseInput;
use wincore::screen::Screen;
use wincore::window::WindowType;
pub use wincore::Result;

#[macro_use]
mod common;

mod error;
mod manager;
mod session;
mod window;

use manager::WindowManager;

pub fn main() -> Result<()> {
    SimpleLogger::init(LevelFilter::Debug, simplelog::Config::default())?;

    info!("starting {}", SHELL_NAME!());

    let screen = Screen::with_padding(Region::new(0, 0, 1920, 1080), Padding {
        left: 0,
        right: 0,
        top: 0,
        bottom: 40,
    });

    let mut manager = WindowManager::new(screen);

    manager.set_event_callback(|event: &WindowEvent| {
        debug!("event: {:?}", event);
    });

    let layout = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(SHELL_NAME!(), "-layout.json").to_string());

    if std::path::Path::new(&layout).exists() {
        manager.restore_window_state(&layout)?;
    } else {
        let terminal = manager.create_window(
            "terminal",
            Dim {
                w: 800,
                h: 600,
            },
            WindowType::Normal,
        )?;
        let browser = manager.create_window(
            "browser",
            Dim {
                w: 1280,
                h: 720,
            },
            WindowType::Normal,
        )?;
        let prompt = manager.create_window(
            "unsaved changes",
            Dim {
                w: 420,
                h: 160,
            },
            WindowType::Dialog,
        )?;

        manager.move_window(terminal, Pos {
            x: 80,
            y: 80,
        })?;
        manager.move_window(browser, Pos {
            x: 480,
            y: 120,
        })?;
        manager.move_window(prompt, Pos {
            x: 750,
            y: 460,
        })?;

        manager.maximize_window(browser)?;
        manager.set_focus(terminal)?;

        dispatch_press(&manager, Pos {
            x: 96,
            y: 100,
        });

        if let Some(focus) = manager.focused_window() {
            manager.handle_event(&WindowEvent::new(focus, EventKind::Key {
                kind: KeyEventKind::Press,
                input: KeyInput {
                    code: 36,
                    text: "\n".to_string(),
                    modifiers: Modifier::from_mask(0),
                    repeat: false,
                },
            }));
        }

        manager.close_window(prompt)?;
    }

    manager.save_window_state(&layout)?;

    info!("saved layout to {}", layout);

    Ok(())
}

// Routes a synthetic press to the first window claiming the point.
fn dispatch_press(
    manager: &WindowManager,
    pos: Pos,
) {
    for id in manager.window_ids() {
        let region = manager.window_geometry(id).region();

        if region.encompasses(pos) {
            manager.handle_event(&WindowEvent::new(id, EventKind::Mouse {
                kind: MouseEventKind::Press,
                input: MouseInput {
                    pos: Pos {
                        x: pos.x - region.pos.x,
                        y: pos.y - region.pos.y,
                    },
                    global_pos: pos,
                    button: Some(Button::Left),
                    modifiers: Modifier::from_mask(0),
                    wheel_delta: 0,
                },
            }));

            return;
        }
    }

    trace!("press at {:?} hit no window", pos);
}

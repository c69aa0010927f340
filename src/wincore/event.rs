use crate::geometry::Dim;
use crate::geometry::Pos;
use crate::input::DragEventKind;
use crate::input::DragInput;
use crate::input::KeyEventKind;
use crate::input::KeyInput;
use crate::input::MouseEventKind;
use crate::input::MouseInput;
use crate::window::WindowId;
use crate::window::WindowState;

use std::cell::RefCell;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

static TIMESTAMP: AtomicU64 = AtomicU64::new(0);

// Ordinal clock: event order matters, wall-clock time does not.
pub fn next_timestamp() -> u64 {
    TIMESTAMP.fetch_add(1, Ordering::Relaxed) + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Created,
    Closing,
    Destroyed,
    CloseRequest,
    FocusGained,
    FocusLost,
    Moved {
        from: Pos,
        to: Pos,
    },
    Resized {
        from: Dim,
        to: Dim,
    },
    StateChanged {
        prev: WindowState,
    },
    Mouse {
        kind: MouseEventKind,
        input: MouseInput,
    },
    Key {
        kind: KeyEventKind,
        input: KeyInput,
    },
    Drag {
        kind: DragEventKind,
        input: DragInput,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEvent {
    pub window: WindowId,
    pub timestamp: u64,
    pub kind: EventKind,
}

impl WindowEvent {
    pub fn new(
        window: WindowId,
        kind: EventKind,
    ) -> Self {
        Self {
            window,
            timestamp: next_timestamp(),
            kind,
        }
    }
}

pub type EventHandler = Box<dyn FnMut(&WindowEvent)>;

pub struct EventSink {
    handler: RefCell<Option<EventHandler>>,
}

impl Default for EventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink {
    pub fn new() -> Self {
        Self {
            handler: RefCell::new(None),
        }
    }

    // A single listener: registering again replaces the prior handler.
    pub fn register(
        &self,
        handler: impl FnMut(&WindowEvent) + 'static,
    ) {
        self.handler.replace(Some(Box::new(handler)));
    }

    pub fn emit(
        &self,
        event: &WindowEvent,
    ) {
        if let Some(handler) = self.handler.borrow_mut().as_mut() {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn timestamps_strictly_increase() {
        let first = WindowEvent::new(1, EventKind::Created);
        let second = WindowEvent::new(1, EventKind::FocusGained);
        let third = WindowEvent::new(2, EventKind::Created);

        assert!(first.timestamp < second.timestamp);
        assert!(second.timestamp < third.timestamp);
    }

    #[test]
    fn emitting_without_a_handler_is_a_no_op() {
        let sink = EventSink::new();
        sink.emit(&WindowEvent::new(1, EventKind::Created));
    }

    #[test]
    fn registering_replaces_the_prior_handler() {
        let sink = EventSink::new();

        let first_count = Rc::new(Cell::new(0));
        let second_count = Rc::new(Cell::new(0));

        let count = Rc::clone(&first_count);
        sink.register(move |_| count.set(count.get() + 1));
        sink.emit(&WindowEvent::new(1, EventKind::Created));

        let count = Rc::clone(&second_count);
        sink.register(move |_| count.set(count.get() + 1));
        sink.emit(&WindowEvent::new(1, EventKind::Destroyed));
        sink.emit(&WindowEvent::new(1, EventKind::Destroyed));

        assert_eq!(first_count.get(), 1);
        assert_eq!(second_count.get(), 2);
    }
}

use crate::error::WindowError;
use crate::session::Snapshot;
use crate::window::Window;

use wincore::event::EventKind;
use wincore::event::EventSink;
use wincore::event::WindowEvent;
use wincore::geometry::Dim;
use wincore::geometry::Geometry;
use wincore::geometry::Pos;
use wincore::screen::Screen;
use wincore::window::WindowId;
use wincore::window::WindowState;
use wincore::window::WindowType;

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

pub struct WindowManager {
    screen: Screen,
    windows: HashMap<WindowId, Window>,
    next_id: WindowId,
    focus: Option<WindowId>,
    sink: Rc<EventSink>,
}

impl WindowManager {
    pub fn new(screen: Screen) -> Self {
        info!("initializing window manager");

        Self {
            screen,
            windows: HashMap::new(),
            next_id: 1,
            focus: None,
            sink: Rc::new(EventSink::new()),
        }
    }

    pub fn create_window(
        &mut self,
        title: impl Into<String>,
        dim: Dim,
        window_type: WindowType,
    ) -> Result<WindowId, WindowError> {
        let title = title.into();

        // Validated before an identity is handed out, so a failed create
        // never consumes an id.
        if title.is_empty() {
            return Err(WindowError::EmptyTitle);
        }

        if !dim.is_positive() {
            return Err(WindowError::InvalidDim);
        }

        let id = self.next_id;
        let window = Window::new(id, title, dim, window_type)?;

        window.set_callback(Rc::clone(&self.sink));

        self.next_id += 1;
        self.windows.insert(id, window);
        self.set_focus(id).ok();
        self.sink.emit(&WindowEvent::new(id, EventKind::Created));

        info!("created window {}", id);

        Ok(id)
    }

    pub fn close_window(
        &mut self,
        id: WindowId,
    ) -> Result<(), WindowError> {
        if !self.windows.contains_key(&id) {
            return Err(WindowError::UnknownWindow);
        }

        self.sink.emit(&WindowEvent::new(id, EventKind::Closing));
        self.windows.remove(&id);

        if self.focus == Some(id) {
            self.focus = None;
            self.focus_fallback();
        }

        self.sink.emit(&WindowEvent::new(id, EventKind::Destroyed));

        info!("destroyed window {}", id);

        Ok(())
    }

    pub fn set_focus(
        &mut self,
        id: WindowId,
    ) -> Result<(), WindowError> {
        if self.focus == Some(id) {
            return Ok(());
        }

        if !self.windows.contains_key(&id) {
            return Err(WindowError::UnknownWindow);
        }

        // The outgoing window is notified strictly before the incoming one,
        // so no observer ever sees two focused windows.
        if let Some(prev) = self.focus.take() {
            if let Some(window) = self.windows.get(&prev) {
                window.handle_event(&WindowEvent::new(prev, EventKind::FocusLost));
            }
        }

        self.focus = Some(id);
        self.windows[&id].handle_event(&WindowEvent::new(id, EventKind::FocusGained));

        debug!("focused window {}", id);

        Ok(())
    }

    #[inline]
    pub fn focused_window(&self) -> Option<WindowId> {
        self.focus
    }

    pub fn minimize_window(
        &self,
        id: WindowId,
    ) -> Result<(), WindowError> {
        self.window(id)?.minimize();
        Ok(())
    }

    pub fn maximize_window(
        &self,
        id: WindowId,
    ) -> Result<(), WindowError> {
        self.window(id)?.maximize(self.screen.placeable_region());
        Ok(())
    }

    pub fn restore_window(
        &self,
        id: WindowId,
    ) -> Result<(), WindowError> {
        self.window(id)?.restore();
        Ok(())
    }

    pub fn fullscreen_window(
        &self,
        id: WindowId,
        fullscreen: bool,
    ) -> Result<(), WindowError> {
        self.window(id)?
            .set_fullscreen(fullscreen, self.screen.full_region());
        Ok(())
    }

    pub fn move_window(
        &self,
        id: WindowId,
        pos: Pos,
    ) -> Result<(), WindowError> {
        self.window(id)?.move_to(pos);
        Ok(())
    }

    pub fn resize_window(
        &self,
        id: WindowId,
        dim: Dim,
    ) -> Result<(), WindowError> {
        self.window(id)?.resize(dim)
    }

    pub fn request_close(
        &self,
        id: WindowId,
    ) -> Result<(), WindowError> {
        self.window(id)?.close();
        Ok(())
    }

    #[inline]
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        let mut ids = self.windows.keys().copied().collect::<Vec<WindowId>>();
        ids.sort_unstable();
        ids
    }

    // Geometry probes are expected on stale ids; unknown windows answer
    // with the zeroed sentinel instead of failing.
    pub fn window_geometry(
        &self,
        id: WindowId,
    ) -> Geometry {
        self.windows
            .get(&id)
            .map(|window| window.geometry())
            .unwrap_or_default()
    }

    pub fn window_state(
        &self,
        id: WindowId,
    ) -> Option<WindowState> {
        self.windows.get(&id).map(|window| window.state())
    }

    pub fn window_title(
        &self,
        id: WindowId,
    ) -> Option<String> {
        self.windows.get(&id).map(|window| window.title())
    }

    pub fn set_event_callback(
        &self,
        handler: impl FnMut(&WindowEvent) + 'static,
    ) {
        self.sink.register(handler);
    }

    pub fn handle_event(
        &self,
        event: &WindowEvent,
    ) {
        match self.windows.get(&event.window) {
            Some(window) => window.handle_event(event),
            None => trace!("dropping event for unknown window {}", event.window),
        }
    }

    pub fn save_window_state(
        &self,
        path: impl AsRef<Path>,
    ) -> wincore::Result<()> {
        let snapshot = Snapshot::capture(&self.windows, self.focus);

        std::fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;

        info!("saved {} windows", snapshot.windows.len());

        Ok(())
    }

    pub fn restore_window_state(
        &mut self,
        path: impl AsRef<Path>,
    ) -> wincore::Result<()> {
        let snapshot: Snapshot = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        let restored = snapshot.reconstruct(&self.screen, self.next_id)?;

        self.windows = restored.windows;
        self.focus = restored.focus;
        self.next_id = restored.next_id;

        for window in self.windows.values() {
            window.set_callback(Rc::clone(&self.sink));
        }

        info!("restored {} windows", self.windows.len());

        Ok(())
    }

    fn window(
        &self,
        id: WindowId,
    ) -> Result<&Window, WindowError> {
        self.windows.get(&id).ok_or(WindowError::UnknownWindow)
    }

    fn focus_fallback(&mut self) {
        if let Some(&next) = self.windows.keys().min() {
            self.set_focus(next).ok();
        }
    }
}

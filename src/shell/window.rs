use crate::common::DEFAULT_MAX_DIM;
use crate::common::DEFAULT_MIN_DIM;
use crate::error::WindowError;

use wincore::event::EventKind;
use wincore::event::EventSink;
use wincore::event::WindowEvent;
use wincore::geometry::Dim;
use wincore::geometry::Geometry;
use wincore::geometry::Pos;
use wincore::geometry::Region;
use wincore::window::WindowId;
use wincore::window::WindowState;
use wincore::window::WindowType;

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

pub struct Window {
    id: WindowId,
    title: RefCell<String>,
    geometry: Cell<Geometry>,
    normal_geometry: Cell<Geometry>,
    state: Cell<WindowState>,
    window_type: WindowType,
    visible: Cell<bool>,
    focused: Cell<bool>,
    resizable: Cell<bool>,
    movable: Cell<bool>,
    always_on_top: Cell<bool>,
    opacity: Cell<f64>,
    sink: RefCell<Option<Rc<EventSink>>>,
}

impl Window {
    pub fn new(
        id: WindowId,
        title: impl Into<String>,
        dim: Dim,
        window_type: WindowType,
    ) -> Result<Self, WindowError> {
        let title = title.into();

        if title.is_empty() {
            return Err(WindowError::EmptyTitle);
        }

        if !dim.is_positive() {
            return Err(WindowError::InvalidDim);
        }

        let (always_on_top, resizable, movable) = match window_type {
            WindowType::Dialog => (true, false, true),
            WindowType::Tooltip => (true, false, false),
            WindowType::Popup => (true, true, true),
            WindowType::Utility => (false, false, true),
            WindowType::Normal => (false, true, true),
        };

        let geometry = Geometry::new(dim, DEFAULT_MIN_DIM, DEFAULT_MAX_DIM);

        Ok(Self {
            id,
            title: RefCell::new(title),
            geometry: Cell::new(geometry),
            normal_geometry: Cell::new(geometry),
            state: Cell::new(WindowState::Normal),
            window_type,
            visible: Cell::new(true),
            focused: Cell::new(false),
            resizable: Cell::new(resizable),
            movable: Cell::new(movable),
            always_on_top: Cell::new(always_on_top),
            opacity: Cell::new(1.0),
            sink: RefCell::new(None),
        })
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> String {
        self.title.borrow().to_owned()
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry.get()
    }

    #[inline]
    pub fn state(&self) -> WindowState {
        self.state.get()
    }

    #[inline]
    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.resizable.get()
    }

    #[inline]
    pub fn is_movable(&self) -> bool {
        self.movable.get()
    }

    #[inline]
    pub fn is_always_on_top(&self) -> bool {
        self.always_on_top.get()
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity.get()
    }

    #[inline]
    pub fn set_callback(
        &self,
        sink: Rc<EventSink>,
    ) {
        self.sink.replace(Some(sink));
    }

    pub fn set_title(
        &self,
        title: impl Into<String>,
    ) -> Result<(), WindowError> {
        let title = title.into();

        if title.is_empty() {
            return Err(WindowError::EmptyTitle);
        }

        self.title.replace(title);
        self.emit(EventKind::StateChanged {
            prev: self.state.get(),
        });

        Ok(())
    }

    pub fn move_to(
        &self,
        pos: Pos,
    ) {
        let mut geometry = self.geometry.get();
        let from = geometry.pos;

        geometry.pos = pos;
        self.geometry.set(geometry);

        self.emit(EventKind::Moved {
            from,
            to: pos,
        });
    }

    pub fn resize(
        &self,
        dim: Dim,
    ) -> Result<(), WindowError> {
        let mut geometry = self.geometry.get();

        if !geometry.admits(dim) {
            return Err(WindowError::DimOutOfBounds);
        }

        let from = geometry.dim;

        geometry.dim = dim;
        self.geometry.set(geometry);

        self.emit(EventKind::Resized {
            from,
            to: dim,
        });

        Ok(())
    }

    pub fn minimize(&self) {
        if self.state.get() == WindowState::Minimized {
            return;
        }

        let prev = self.state.replace(WindowState::Minimized);
        self.visible.set(false);

        self.emit(EventKind::StateChanged {
            prev,
        });
    }

    pub fn maximize(
        &self,
        extent: Region,
    ) {
        if self.state.get() == WindowState::Maximized {
            return;
        }

        let prev = self.state.replace(WindowState::Maximized);

        if prev == WindowState::Normal {
            self.normal_geometry.set(self.geometry.get());
        }

        let mut geometry = self.geometry.get();
        geometry.pos = extent.pos;
        geometry.dim = extent.dim;
        self.geometry.set(geometry);

        self.emit(EventKind::StateChanged {
            prev,
        });
    }

    pub fn restore(&self) {
        if self.state.get() == WindowState::Normal {
            return;
        }

        let prev = self.state.replace(WindowState::Normal);
        self.visible.set(true);

        if prev == WindowState::Maximized || prev == WindowState::Fullscreen {
            self.geometry.set(self.normal_geometry.get());
        }

        self.emit(EventKind::StateChanged {
            prev,
        });
    }

    pub fn set_fullscreen(
        &self,
        fullscreen: bool,
        extent: Region,
    ) {
        if fullscreen == (self.state.get() == WindowState::Fullscreen) {
            return;
        }

        let prev = if fullscreen {
            self.normal_geometry.set(self.geometry.get());

            let mut geometry = self.geometry.get();
            geometry.pos = extent.pos;
            geometry.dim = extent.dim;
            self.geometry.set(geometry);

            self.state.replace(WindowState::Fullscreen)
        } else {
            self.geometry.set(self.normal_geometry.get());
            self.state.replace(WindowState::Normal)
        };

        self.emit(EventKind::StateChanged {
            prev,
        });
    }

    pub fn show(&self) {
        if self.visible.get() {
            return;
        }

        self.visible.set(true);
        self.emit(EventKind::StateChanged {
            prev: self.state.get(),
        });
    }

    pub fn hide(&self) {
        if !self.visible.get() {
            return;
        }

        self.visible.set(false);
        self.emit(EventKind::StateChanged {
            prev: self.state.get(),
        });
    }

    // Announces the close wish; destruction is the owning manager's call.
    pub fn close(&self) {
        self.emit(EventKind::CloseRequest);
    }

    // Announces the focus wish; only handle_event flips the focus flag.
    pub fn request_focus(&self) {
        if self.focused.get() {
            return;
        }

        self.emit(EventKind::FocusGained);
    }

    pub fn handle_event(
        &self,
        event: &WindowEvent,
    ) {
        match event.kind {
            EventKind::FocusGained => self.focused.set(true),
            EventKind::FocusLost => self.focused.set(false),
            _ => {},
        }

        self.forward(event);
    }

    #[inline]
    pub fn set_resizable(
        &self,
        resizable: bool,
    ) {
        self.resizable.set(resizable);
    }

    #[inline]
    pub fn set_movable(
        &self,
        movable: bool,
    ) {
        self.movable.set(movable);
    }

    #[inline]
    pub fn set_always_on_top(
        &self,
        always_on_top: bool,
    ) {
        self.always_on_top.set(always_on_top);
    }

    pub fn set_minimum_size(
        &self,
        min_dim: Dim,
    ) -> Result<(), WindowError> {
        if !min_dim.is_positive() {
            return Err(WindowError::InvalidDim);
        }

        let mut geometry = self.geometry.get();

        if min_dim.w > geometry.max_dim.w || min_dim.h > geometry.max_dim.h {
            return Err(WindowError::DimOutOfBounds);
        }

        geometry.min_dim = min_dim;
        geometry.dim = geometry.clamped(geometry.dim);
        self.geometry.set(geometry);

        Ok(())
    }

    pub fn set_maximum_size(
        &self,
        max_dim: Dim,
    ) -> Result<(), WindowError> {
        if !max_dim.is_positive() {
            return Err(WindowError::InvalidDim);
        }

        let mut geometry = self.geometry.get();

        if max_dim.w < geometry.min_dim.w || max_dim.h < geometry.min_dim.h {
            return Err(WindowError::DimOutOfBounds);
        }

        geometry.max_dim = max_dim;
        geometry.dim = geometry.clamped(geometry.dim);
        self.geometry.set(geometry);

        Ok(())
    }

    pub fn set_opacity(
        &self,
        opacity: f64,
    ) -> Result<(), WindowError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(WindowError::InvalidOpacity);
        }

        self.opacity.set(opacity);
        Ok(())
    }

    fn emit(
        &self,
        kind: EventKind,
    ) {
        let sink = self.sink.borrow().as_ref().map(Rc::clone);

        if let Some(sink) = sink {
            sink.emit(&WindowEvent::new(self.id, kind));
        }
    }

    fn forward(
        &self,
        event: &WindowEvent,
    ) {
        let sink = self.sink.borrow().as_ref().map(Rc::clone);

        if let Some(sink) = sink {
            sink.emit(event);
        }
    }
}

impl PartialEq for Window {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Debug for Window {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("geometry", &self.geometry)
            .field("normal_geometry", &self.normal_geometry)
            .field("state", &self.state)
            .field("window_type", &self.window_type)
            .field("visible", &self.visible)
            .field("focused", &self.focused)
            .field("resizable", &self.resizable)
            .field("movable", &self.movable)
            .field("always_on_top", &self.always_on_top)
            .field("opacity", &self.opacity)
            .finish()
    }
}

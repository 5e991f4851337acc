use std::collections::BTreeMap;
use std::sync::Arc;

use super::decorator::{DefaultDecorator, HitRegion, WindowDecorator};
use super::embedded::EmbeddedContentGuard;
use super::interaction::Interaction;
use super::{WindowHandle, WindowId, WindowOptions, WindowRecord, WindowState};
use crate::config::WmConfig;
use crate::error::WmResult;
use crate::geometry::{Geometry, Point, cascade_origin, maximized_geometry};
use crate::input::{PointerButton, PointerEvent, PointerKind};
use crate::surface::{RenderSurface, RenderableContent};

/// Owns every window, the stacking counter, the active window and the single
/// interaction slot.
///
/// All mutation goes through `&mut self`, so a host constructs one manager at
/// start-up and hands it to whatever needs to open windows. Operations that
/// address an unknown id are no-ops and report `false`.
pub struct WindowManager<S: RenderSurface> {
    surface: S,
    config: WmConfig,
    decorator: Arc<dyn WindowDecorator>,
    // ids are allocated in increasing order, so map order is creation order
    windows: BTreeMap<WindowId, WindowRecord>,
    next_id: u64,
    z_counter: u64,
    active: Option<WindowId>,
    interaction: Option<Interaction>,
    guard: EmbeddedContentGuard,
}

impl<S: RenderSurface> WindowManager<S> {
    pub fn new(surface: S) -> Self {
        Self::build(surface, WmConfig::default())
    }

    pub fn with_config(surface: S, config: WmConfig) -> WmResult<Self> {
        config.validate()?;
        Ok(Self::build(surface, config))
    }

    fn build(surface: S, config: WmConfig) -> Self {
        Self {
            surface,
            decorator: Arc::new(DefaultDecorator::new(config.chrome)),
            windows: BTreeMap::new(),
            next_id: 1,
            z_counter: config.z_base,
            active: None,
            interaction: None,
            guard: EmbeddedContentGuard::new(),
            config,
        }
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Host access for attaching, resizing or rendering the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn decorator(&self) -> Arc<dyn WindowDecorator> {
        Arc::clone(&self.decorator)
    }

    pub fn set_decorator(&mut self, decorator: Arc<dyn WindowDecorator>) {
        self.decorator = decorator;
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    /// Live windows in creation order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub fn find_by_title(&self, title: &str) -> Option<WindowId> {
        self.windows
            .values()
            .find(|window| window.title == title)
            .map(|window| window.id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active
    }

    pub fn z_counter(&self) -> u64 {
        self.z_counter
    }

    pub fn interaction(&self) -> Option<Interaction> {
        self.interaction
    }

    pub fn embedded_suppressed(&self) -> bool {
        self.guard.is_suppressed()
    }

    /// Visible windows from bottom to top.
    pub fn draw_order(&self) -> Vec<WindowId> {
        let mut visible: Vec<&WindowRecord> = self
            .windows
            .values()
            .filter(|window| !window.is_minimized())
            .collect();
        visible.sort_by_key(|window| window.z_order);
        visible.into_iter().map(|window| window.id).collect()
    }

    /// Topmost visible window under `point`.
    pub fn window_at(&self, point: Point) -> Option<WindowId> {
        self.draw_order().into_iter().rev().find(|id| {
            self.windows
                .get(id)
                .is_some_and(|window| window.geometry.contains(point))
        })
    }

    fn is_minimized(&self, id: WindowId) -> bool {
        self.windows.get(&id).is_some_and(|w| w.is_minimized())
    }

    fn embedded_regions(&self) -> Vec<WindowId> {
        self.windows
            .values()
            .filter(|window| window.embedded)
            .map(|window| window.id)
            .collect()
    }

    fn initial_geometry(&self, options: &WindowOptions) -> Geometry {
        let cascade = cascade_origin(
            self.config.cascade_origin,
            self.config.cascade_step,
            self.windows.len(),
        );
        Geometry {
            x: options.x.unwrap_or(cascade.x),
            y: options.y.unwrap_or(cascade.y),
            width: options.width.unwrap_or(self.config.default_width),
            height: options.height.unwrap_or(self.config.default_height),
        }
        .clamp_size(self.config.min_width, self.config.min_height)
        .clamp_top()
    }

    /// Open a window, or bring back the live window that already uses
    /// `title`. A reused window is restored if minimized and focused; the
    /// new content and options are dropped in that case.
    pub fn create_window(
        &mut self,
        title: impl Into<String>,
        content: S::Content,
        options: WindowOptions,
    ) -> WmResult<WindowHandle> {
        let title = title.into();
        if let Some(id) = self.find_by_title(&title) {
            tracing::debug!(window_id = %id, %title, "reusing window with matching title");
            if self.is_minimized(id) {
                self.restore_window(id);
            }
            self.focus_window(id);
            return Ok(WindowHandle::from(id));
        }

        let id = WindowId::from_raw(self.next_id);
        let geometry = self.initial_geometry(&options);
        let embedded = content.has_embedded_region();
        if let Err(err) = self.surface.create(id, &title, content) {
            tracing::warn!(%title, error = %err, "window surface could not be created");
            return Err(err.into());
        }
        self.next_id = self.next_id.saturating_add(1);
        self.surface.set_bounds(id, geometry);
        if embedded {
            self.guard.adopt(&mut self.surface, id);
        }
        tracing::debug!(window_id = %id, %title, ?geometry, embedded, "opened window");
        self.windows
            .insert(id, WindowRecord::new(id, title, geometry, embedded));
        self.focus_window(id);

        if options.maximized {
            self.toggle_maximize(id);
        }
        if options.minimized {
            self.minimize_window(id);
        }
        Ok(WindowHandle::from(id))
    }

    /// Remove the window and its surface. No confirmation happens here.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        if !self.windows.contains_key(&id) {
            tracing::debug!(window_id = %id, "close ignored for unknown window");
            return false;
        }
        self.end_interaction_for(id);
        self.windows.remove(&id);
        self.surface.remove(id);
        if self.active == Some(id) {
            self.active = None;
        }
        tracing::debug!(window_id = %id, "closed window");
        true
    }

    /// Raise `id` to the top of the stack and make it the active window.
    /// The stacking counter is only ever advanced here.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        if self.active == Some(id) {
            return false;
        }
        let Some(window) = self.windows.get_mut(&id) else {
            tracing::debug!(window_id = %id, "focus ignored for unknown window");
            return false;
        };
        self.z_counter = self.z_counter.saturating_add(1);
        window.z_order = self.z_counter;
        if let Some(previous) = self.active.take() {
            self.surface.set_active(previous, false);
        }
        self.surface.set_z(id, self.z_counter);
        self.surface.set_active(id, true);
        self.active = Some(id);
        tracing::debug!(window_id = %id, z = self.z_counter, "focused window");
        true
    }

    /// Focus the next (or previous) visible window in creation order,
    /// wrapping around.
    pub fn cycle_focus(&mut self, forward: bool) -> bool {
        let order: Vec<WindowId> = self
            .windows
            .values()
            .filter(|window| !window.is_minimized())
            .map(|window| window.id)
            .collect();
        if order.is_empty() {
            return false;
        }
        let len = order.len() as isize;
        let next = match self
            .active
            .and_then(|active| order.iter().position(|id| *id == active))
        {
            Some(idx) => {
                let step = if forward { 1isize } else { -1isize };
                order[(idx as isize + step).rem_euclid(len) as usize]
            }
            None if forward => order[0],
            None => order[order.len() - 1],
        };
        self.focus_window(next)
    }

    /// Hide the window. Geometry, stacking and the active window are left
    /// as they are.
    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        match self.windows.get(&id) {
            None => {
                tracing::debug!(window_id = %id, "minimize ignored for unknown window");
                return false;
            }
            Some(window) if window.is_minimized() => return false,
            Some(_) => {}
        }
        self.end_interaction_for(id);
        if let Some(window) = self.windows.get_mut(&id) {
            window.state = WindowState::Minimized;
        }
        self.surface.hide(id);
        tracing::debug!(window_id = %id, "minimized window");
        true
    }

    /// Show a minimized window again and focus it. A window that was
    /// maximized when it was minimized comes back maximized.
    pub fn restore_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            tracing::debug!(window_id = %id, "restore ignored for unknown window");
            return false;
        };
        if !window.is_minimized() {
            return false;
        }
        window.state = if window.saved_geometry.is_some() {
            WindowState::Maximized
        } else {
            WindowState::Normal
        };
        self.surface.show(id);
        tracing::debug!(window_id = %id, "restored window");
        self.focus_window(id);
        true
    }

    /// Maximize a normal window into the display area, or put a maximized
    /// window back exactly where it was. Minimized windows are left alone.
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        let Some(state) = self.windows.get(&id).map(|window| window.state) else {
            tracing::debug!(window_id = %id, "maximize ignored for unknown window");
            return false;
        };
        let next = match state {
            WindowState::Minimized => {
                tracing::debug!(window_id = %id, "maximize ignored for minimized window");
                return false;
            }
            WindowState::Maximized => None,
            WindowState::Normal => {
                let Some(area) = self.surface.display_area() else {
                    tracing::warn!(window_id = %id, "cannot maximize without a display area");
                    return false;
                };
                Some(maximized_geometry(
                    area,
                    self.config.maximize_margin,
                    self.config.min_width,
                    self.config.min_height,
                ))
            }
        };

        self.end_interaction_for(id);
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        match next {
            Some(full) => {
                window.saved_geometry = Some(window.geometry);
                window.geometry = full;
                window.state = WindowState::Maximized;
                tracing::debug!(window_id = %id, geometry = ?full, "maximized window");
            }
            None => {
                if let Some(saved) = window.saved_geometry.take() {
                    window.geometry = saved;
                }
                window.state = WindowState::Normal;
                tracing::debug!(window_id = %id, geometry = ?window.geometry, "unmaximized window");
            }
        }
        let geometry = window.geometry;
        self.surface.set_bounds(id, geometry);
        true
    }

    /// Start moving `id` with the pointer at `pointer`. Refused while any
    /// other drag or resize is running.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        self.begin_interaction(id, pointer, Interaction::drag)
    }

    /// Start resizing `id` from its bottom-right corner.
    pub fn begin_resize(&mut self, id: WindowId, pointer: Point) -> bool {
        self.begin_interaction(id, pointer, Interaction::resize)
    }

    fn begin_interaction(
        &mut self,
        id: WindowId,
        pointer: Point,
        start: fn(WindowId, Geometry, Point) -> Interaction,
    ) -> bool {
        if let Some(current) = self.interaction {
            tracing::debug!(
                window_id = %id,
                busy_with = %current.target(),
                "interaction already in progress; ignoring start"
            );
            return false;
        }
        let Some(window) = self.windows.get(&id) else {
            return false;
        };
        if window.is_minimized() {
            return false;
        }
        let interaction = start(id, window.geometry, pointer);
        self.interaction = Some(interaction);
        let regions = self.embedded_regions();
        self.guard.suppress_all(&mut self.surface, regions);
        tracing::debug!(window_id = %id, ?interaction, "interaction started");
        true
    }

    /// Apply pointer motion to the running interaction, if any.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        let Some(interaction) = self.interaction else {
            return false;
        };
        let id = interaction.target();
        let next = interaction.apply(pointer, self.config.min_width, self.config.min_height);
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        window.geometry = next;
        self.surface.set_bounds(id, next);
        true
    }

    /// Finish the running interaction wherever the pointer was released.
    pub fn pointer_released(&mut self) -> bool {
        self.end_interaction().is_some()
    }

    /// Abort the running interaction and put the window back where it was
    /// when the interaction started.
    pub fn cancel_interaction(&mut self) -> bool {
        let Some(interaction) = self.end_interaction() else {
            return false;
        };
        let id = interaction.target();
        let start = interaction.start_geometry();
        if let Some(window) = self.windows.get_mut(&id) {
            window.geometry = start;
            self.surface.set_bounds(id, start);
        }
        tracing::debug!(window_id = %id, "interaction cancelled");
        true
    }

    fn end_interaction(&mut self) -> Option<Interaction> {
        let interaction = self.interaction.take()?;
        let regions = self.embedded_regions();
        self.guard.restore_all(&mut self.surface, regions);
        tracing::debug!(window_id = %interaction.target(), "interaction finished");
        Some(interaction)
    }

    fn end_interaction_for(&mut self, id: WindowId) {
        if self
            .interaction
            .is_some_and(|interaction| interaction.target() == id)
        {
            self.end_interaction();
        }
    }

    /// Route a host pointer event.
    ///
    /// Pointer-down focuses the topmost window under the pointer and then
    /// acts on the chrome it hit. Motion and release are global: they drive
    /// the running interaction no matter where the pointer is.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let point = event.position;
        match event.kind {
            PointerKind::Down(button) => self.handle_pointer_down(button, point),
            PointerKind::Drag => self.pointer_moved(point),
            PointerKind::Moved => {
                if self.interaction.is_none() {
                    return false;
                }
                // No button is held, so the release never reached us.
                tracing::warn!("pointer released outside the host; ending interaction");
                self.pointer_released()
            }
            PointerKind::Up(_) => self.pointer_released(),
        }
    }

    fn handle_pointer_down(&mut self, button: PointerButton, point: Point) -> bool {
        if self.interaction.is_some() {
            return true;
        }
        let Some(id) = self.window_at(point) else {
            return false;
        };
        self.focus_window(id);
        if button != PointerButton::Primary {
            return true;
        }
        let Some(geometry) = self.windows.get(&id).map(|window| window.geometry) else {
            return true;
        };
        match self.decorator.hit_test(geometry, point) {
            HitRegion::Minimize => {
                self.minimize_window(id);
            }
            HitRegion::Maximize => {
                self.toggle_maximize(id);
            }
            HitRegion::Close => {
                self.close_window(id);
            }
            HitRegion::TitleBar => {
                self.begin_drag(id, point);
            }
            HitRegion::ResizeGrip => {
                self.begin_resize(id, point);
            }
            HitRegion::Content | HitRegion::Outside => {}
        }
        true
    }
}

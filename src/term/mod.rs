//! Terminal host for the window manager.
//!
//! Windows live in logical pixels; the terminal draws them on a character
//! grid. A cell belongs to a window when the cell's centre lies inside the
//! window's geometry, and mouse events are reported at cell centres, so what
//! is drawn and what is hit always agree.

pub mod render;

use std::collections::BTreeMap;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::geometry::{DisplayArea, Geometry, Point};
use crate::input::{PointerButton, PointerEvent, PointerKind};
use crate::surface::{RenderSurface, RenderableContent, SurfaceError};
use crate::window::{ChromeMetrics, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
        }
    }
}

/// A window footprint in cells. May extend past any edge of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub col: i64,
    pub row: i64,
    pub cols: i64,
    pub rows: i64,
}

impl CellRect {
    pub fn right(&self) -> i64 {
        self.col + self.cols
    }

    pub fn bottom(&self) -> i64 {
        self.row + self.rows
    }
}

fn div_ceil(value: i64, divisor: i64) -> i64 {
    -(-value).div_euclid(divisor)
}

/// Cells whose centre falls in `start..start + len`.
fn cell_span(start: i64, len: i64, cell: i64) -> (i64, i64) {
    let half = cell / 2;
    let first = div_ceil(start - half, cell);
    let end = div_ceil(start + len - half, cell);
    (first, end.max(first))
}

impl CellMetrics {
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Chrome sized to whole cells: one title row, three-cell buttons.
    pub fn chrome(&self) -> ChromeMetrics {
        ChromeMetrics::for_cells(self.cell_width, self.cell_height)
    }

    pub fn cells_for(&self, geometry: Geometry) -> CellRect {
        let (col, right) = cell_span(
            geometry.x as i64,
            geometry.width as i64,
            self.cell_width as i64,
        );
        let (row, bottom) = cell_span(
            geometry.y as i64,
            geometry.height as i64,
            self.cell_height as i64,
        );
        CellRect {
            col,
            row,
            cols: right - col,
            rows: bottom - row,
        }
    }

    /// Logical position of the centre of a cell.
    pub fn point_at(&self, column: u16, row: u16) -> Point {
        let x = column as i64 * self.cell_width as i64 + (self.cell_width / 2) as i64;
        let y = row as i64 * self.cell_height as i64 + (self.cell_height / 2) as i64;
        Point::new(
            x.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            y.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        )
    }

    /// The display area covering `area` cells.
    pub fn area_for(&self, area: Rect) -> DisplayArea {
        Geometry {
            x: (area.x as u32 * self.cell_width) as i32,
            y: (area.y as u32 * self.cell_height) as i32,
            width: area.width as u32 * self.cell_width,
            height: area.height as u32 * self.cell_height,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaneContent {
    pub lines: Vec<String>,
    /// Label of a nested region that takes pointer input of its own.
    pub embedded: Option<String>,
}

impl PaneContent {
    pub fn text<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            embedded: None,
        }
    }

    pub fn with_embedded(mut self, label: impl Into<String>) -> Self {
        self.embedded = Some(label.into());
        self
    }
}

impl RenderableContent for PaneContent {
    fn has_embedded_region(&self) -> bool {
        self.embedded.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct TerminalPane {
    pub title: String,
    pub content: PaneContent,
    pub bounds: Geometry,
    pub z: u64,
    pub visible: bool,
    pub active: bool,
    pub pointer_events: bool,
}

#[derive(Debug, Default)]
pub struct TerminalSurface {
    panes: BTreeMap<WindowId, TerminalPane>,
    metrics: CellMetrics,
    area: Option<Rect>,
}

impl TerminalSurface {
    pub fn new(metrics: CellMetrics) -> Self {
        Self {
            panes: BTreeMap::new(),
            metrics,
            area: None,
        }
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Lay windows out in `area` (in cells). Called on start-up and whenever
    /// the terminal is resized.
    pub fn attach(&mut self, area: Rect) {
        tracing::debug!(cols = area.width, rows = area.height, "terminal surface attached");
        self.area = Some(area);
    }

    pub fn detach(&mut self) {
        self.area = None;
    }

    pub fn cell_area(&self) -> Option<Rect> {
        self.area
    }

    pub fn pane(&self, id: WindowId) -> Option<&TerminalPane> {
        self.panes.get(&id)
    }

    /// Visible panes from bottom to top.
    pub fn stacked(&self) -> Vec<(WindowId, &TerminalPane)> {
        let mut visible: Vec<(WindowId, &TerminalPane)> = self
            .panes
            .iter()
            .filter(|(_, pane)| pane.visible)
            .map(|(id, pane)| (*id, pane))
            .collect();
        visible.sort_by_key(|(_, pane)| pane.z);
        visible
    }

    fn pane_mut(&mut self, id: WindowId) -> Option<&mut TerminalPane> {
        self.panes.get_mut(&id)
    }
}

impl RenderSurface for TerminalSurface {
    type Content = PaneContent;

    fn create(
        &mut self,
        id: WindowId,
        title: &str,
        content: Self::Content,
    ) -> Result<(), SurfaceError> {
        if self.area.is_none() {
            return Err(SurfaceError::TargetMissing);
        }
        if self.panes.contains_key(&id) {
            return Err(SurfaceError::DuplicateSurface(id));
        }
        self.panes.insert(
            id,
            TerminalPane {
                title: title.to_string(),
                content,
                bounds: Geometry::default(),
                z: 0,
                visible: true,
                active: false,
                pointer_events: true,
            },
        );
        Ok(())
    }

    fn show(&mut self, id: WindowId) {
        if let Some(pane) = self.pane_mut(id) {
            pane.visible = true;
        }
    }

    fn hide(&mut self, id: WindowId) {
        if let Some(pane) = self.pane_mut(id) {
            pane.visible = false;
        }
    }

    fn remove(&mut self, id: WindowId) {
        self.panes.remove(&id);
    }

    fn set_bounds(&mut self, id: WindowId, bounds: Geometry) {
        if let Some(pane) = self.pane_mut(id) {
            pane.bounds = bounds;
        }
    }

    fn set_z(&mut self, id: WindowId, z: u64) {
        if let Some(pane) = self.pane_mut(id) {
            pane.z = z;
        }
    }

    fn set_active(&mut self, id: WindowId, active: bool) {
        if let Some(pane) = self.pane_mut(id) {
            pane.active = active;
        }
    }

    fn set_pointer_events(&mut self, id: WindowId, enabled: bool) {
        if let Some(pane) = self.pane_mut(id) {
            pane.pointer_events = enabled;
        }
    }

    fn display_area(&self) -> Option<DisplayArea> {
        self.area.map(|area| self.metrics.area_for(area))
    }
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

/// Translate a crossterm mouse event into logical pixels. Scroll events have
/// no meaning for window management and map to `None`.
pub fn pointer_from_mouse(event: &MouseEvent, metrics: CellMetrics) -> Option<PointerEvent> {
    let kind = match event.kind {
        MouseEventKind::Down(button) => PointerKind::Down(map_button(button)),
        MouseEventKind::Up(button) => PointerKind::Up(map_button(button)),
        MouseEventKind::Drag(_) => PointerKind::Drag,
        MouseEventKind::Moved => PointerKind::Moved,
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        position: metrics.point_at(event.column, event.row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn cells_follow_cell_centres() {
        let metrics = CellMetrics::default();
        // 50..650 x 50..450 in pixels
        let cells = metrics.cells_for(Geometry::new(50, 50, 600, 400));
        assert_eq!(cells.col, 6);
        assert_eq!(cells.row, 3);
        assert_eq!(cells.right(), 81);
        assert_eq!(cells.bottom(), 28);
    }

    #[test]
    fn title_row_is_exactly_one_cell_tall() {
        let metrics = CellMetrics::default();
        let chrome = metrics.chrome();
        for y in [0, 5, 8, 50, 63] {
            let bar = chrome.title_bar(Geometry::new(0, y, 400, 300));
            assert_eq!(metrics.cells_for(bar).rows, 1, "y = {y}");
        }
    }

    #[test]
    fn negative_origins_map_to_negative_cells() {
        let cells = CellMetrics::default().cells_for(Geometry::new(-100, 0, 300, 200));
        assert_eq!(cells.col, -13);
        assert!(cells.right() > 0);
    }

    #[test]
    fn mouse_events_land_on_cell_centres() {
        let metrics = CellMetrics::default();
        let down = pointer_from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 3), metrics)
            .unwrap();
        assert_eq!(down.kind, PointerKind::Down(PointerButton::Primary));
        assert_eq!(down.position, Point::new(84, 56));
        let drag = pointer_from_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0), metrics)
            .unwrap();
        assert_eq!(drag.kind, PointerKind::Drag);
        assert!(pointer_from_mouse(&mouse(MouseEventKind::ScrollDown, 0, 0), metrics).is_none());
    }

    #[test]
    fn detached_terminal_has_no_display_area() {
        let mut surface = TerminalSurface::new(CellMetrics::default());
        assert_eq!(
            surface.create(WindowId::from_raw(1), "Notes", PaneContent::default()),
            Err(SurfaceError::TargetMissing)
        );
        surface.attach(Rect::new(0, 0, 100, 40));
        assert_eq!(
            surface.display_area(),
            Some(Geometry::new(0, 0, 800, 640))
        );
        assert!(
            surface
                .create(WindowId::from_raw(1), "Notes", PaneContent::default())
                .is_ok()
        );
    }

    #[test]
    fn stacked_skips_hidden_panes_and_sorts_by_z() {
        let mut surface = TerminalSurface::new(CellMetrics::default());
        surface.attach(Rect::new(0, 0, 100, 40));
        let (a, b, c) = (
            WindowId::from_raw(1),
            WindowId::from_raw(2),
            WindowId::from_raw(3),
        );
        for id in [a, b, c] {
            surface.create(id, "w", PaneContent::default()).unwrap();
        }
        surface.set_z(a, 1003);
        surface.set_z(b, 1001);
        surface.set_z(c, 1002);
        surface.hide(c);
        let order: Vec<WindowId> = surface.stacked().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![b, a]);
    }
}

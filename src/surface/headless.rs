//! A `RenderSurface` that only records what it was told.
//!
//! Used by the integration tests and the benchmark, and handy for hosts that
//! want to drive the window manager before they have a real display.

use std::collections::BTreeMap;

use super::{RenderSurface, RenderableContent, SurfaceError};
use crate::geometry::{DisplayArea, Geometry};
use crate::window::WindowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessContent {
    Plain(String),
    Embedded(String),
}

impl RenderableContent for HeadlessContent {
    fn has_embedded_region(&self) -> bool {
        matches!(self, HeadlessContent::Embedded(_))
    }
}

impl From<&str> for HeadlessContent {
    fn from(value: &str) -> Self {
        HeadlessContent::Plain(value.to_string())
    }
}

impl From<String> for HeadlessContent {
    fn from(value: String) -> Self {
        HeadlessContent::Plain(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessPane {
    pub title: String,
    pub content: HeadlessContent,
    pub bounds: Geometry,
    pub z: u64,
    pub visible: bool,
    pub active: bool,
    pub pointer_events: bool,
    /// How many times pointer handling was switched off for this pane.
    pub suppressions: usize,
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    panes: BTreeMap<WindowId, HeadlessPane>,
    area: Option<DisplayArea>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(Geometry::new(0, 0, 1280, 800))
    }
}

impl HeadlessSurface {
    pub fn new(area: DisplayArea) -> Self {
        Self {
            panes: BTreeMap::new(),
            area: Some(area),
        }
    }

    /// A surface with no render target; every `create` fails.
    pub fn detached() -> Self {
        Self {
            panes: BTreeMap::new(),
            area: None,
        }
    }

    pub fn set_area(&mut self, area: Option<DisplayArea>) {
        self.area = area;
    }

    pub fn pane(&self, id: WindowId) -> Option<&HeadlessPane> {
        self.panes.get(&id)
    }

    pub fn panes(&self) -> impl Iterator<Item = (&WindowId, &HeadlessPane)> {
        self.panes.iter()
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    fn pane_mut(&mut self, id: WindowId) -> Option<&mut HeadlessPane> {
        self.panes.get_mut(&id)
    }
}

impl RenderSurface for HeadlessSurface {
    type Content = HeadlessContent;

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
            HeadlessPane {
                title: title.to_string(),
                content,
                bounds: Geometry::default(),
                z: 0,
                visible: true,
                active: false,
                pointer_events: true,
                suppressions: 0,
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
            if pane.pointer_events && !enabled {
                pane.suppressions += 1;
            }
            pane.pointer_events = enabled;
        }
    }

    fn display_area(&self) -> Option<DisplayArea> {
        self.area
    }
}

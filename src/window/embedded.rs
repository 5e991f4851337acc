//! Pointer suppression for embedded content.
//!
//! Embedded regions (nested frames and the like) swallow pointer events the
//! moment the pointer crosses them. During a drag or resize that makes the
//! window "stick" wherever the pointer entered such a region, so while an
//! interaction runs every embedded region in every window has its pointer
//! handling switched off, not only the one being manipulated.

use crate::surface::RenderSurface;

use super::WindowId;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedContentGuard {
    suppressed: bool,
}

impl EmbeddedContentGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Disable pointer events on every embedded region in `regions`.
    /// Returns `false` if the guard was already engaged.
    pub fn suppress_all<S, I>(&mut self, surface: &mut S, regions: I) -> bool
    where
        S: RenderSurface + ?Sized,
        I: IntoIterator<Item = WindowId>,
    {
        if self.suppressed {
            return false;
        }
        self.suppressed = true;
        let mut count = 0usize;
        for id in regions {
            surface.set_pointer_events(id, false);
            count += 1;
        }
        tracing::debug!(regions = count, "suppressed embedded pointer events");
        true
    }

    /// Re-enable pointer events on every embedded region. Returns `false`
    /// when there was nothing to release.
    pub fn restore_all<S, I>(&mut self, surface: &mut S, regions: I) -> bool
    where
        S: RenderSurface + ?Sized,
        I: IntoIterator<Item = WindowId>,
    {
        if !self.suppressed {
            return false;
        }
        self.suppressed = false;
        let mut count = 0usize;
        for id in regions {
            surface.set_pointer_events(id, true);
            count += 1;
        }
        tracing::debug!(regions = count, "restored embedded pointer events");
        true
    }

    /// Bring a region that appeared mid-interaction in line with the rest.
    pub fn adopt<S>(&self, surface: &mut S, id: WindowId)
    where
        S: RenderSurface + ?Sized,
    {
        if self.suppressed {
            surface.set_pointer_events(id, false);
        }
    }
}

//! Shared crate-wide constants.
//!
//! All sizes are in logical pixels. Hosts that render on a coarser grid (the
//! terminal front-end, for example) convert through their own cell metrics.

/// Width given to a new window when the caller does not supply one.
pub const DEFAULT_WINDOW_WIDTH: u32 = 600;

/// Height given to a new window when the caller does not supply one.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 400;

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: u32 = 300;

/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Top-left corner of the first window placed by the cascade.
pub const CASCADE_ORIGIN: i32 = 50;

/// Offset applied on both axes per already-open window when cascading.
pub const CASCADE_STEP: i32 = 30;

/// Gap kept between a maximized window and the edges of the display area.
pub const MAXIMIZE_MARGIN: u32 = 20;

/// First value handed out by the stacking counter is `Z_ORDER_BASE + 1`.
pub const Z_ORDER_BASE: u64 = 1000;

pub const TITLE_BAR_HEIGHT: u32 = 24;
pub const TITLE_BUTTON_WIDTH: u32 = 24;
pub const RESIZE_GRIP_SIZE: u32 = 16;

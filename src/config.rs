//! Tunables for a `WindowManager` instance.

use crate::constants::{
    CASCADE_ORIGIN, CASCADE_STEP, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAXIMIZE_MARGIN,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, Z_ORDER_BASE,
};
use crate::error::{WmError, WmResult};
use crate::window::decorator::ChromeMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmConfig {
    pub default_width: u32,
    pub default_height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub cascade_origin: i32,
    pub cascade_step: i32,
    pub maximize_margin: u32,
    pub z_base: u64,
    pub chrome: ChromeMetrics,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            cascade_origin: CASCADE_ORIGIN,
            cascade_step: CASCADE_STEP,
            maximize_margin: MAXIMIZE_MARGIN,
            z_base: Z_ORDER_BASE,
            chrome: ChromeMetrics::default(),
        }
    }
}

impl WmConfig {
    pub fn with_chrome(mut self, chrome: ChromeMetrics) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn validate(&self) -> WmResult<()> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(WmError::InvalidConfig(
                "minimum window size must be non-zero".to_string(),
            ));
        }
        if self.default_width < self.min_width || self.default_height < self.min_height {
            return Err(WmError::InvalidConfig(format!(
                "default size {}x{} is below the minimum {}x{}",
                self.default_width, self.default_height, self.min_width, self.min_height
            )));
        }
        let chrome = self.chrome;
        if chrome.title_bar_height == 0 || chrome.button_width == 0 {
            return Err(WmError::InvalidConfig(
                "title bar and buttons need a non-zero size".to_string(),
            ));
        }
        if chrome.title_bar_height >= self.min_height
            || chrome.button_width.saturating_mul(3) >= self.min_width
        {
            return Err(WmError::InvalidConfig(
                "window chrome does not fit inside the minimum window size".to_string(),
            ));
        }
        Ok(())
    }
}

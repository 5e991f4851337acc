//! A floating window manager that does not care what it draws on.
//!
//! [`window::WindowManager`] keeps the window registry, stacking order,
//! focus and the single in-flight drag or resize. Everything visible goes
//! through a [`surface::RenderSurface`]; the crate ships a headless surface
//! for tests and tooling and a terminal surface used by the `desk-wm` binary.

pub mod config;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod input;
pub mod keybindings;
pub mod runner;
pub mod surface;
pub mod term;
pub mod tracing_sub;
pub mod window;

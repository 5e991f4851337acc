use std::io;
use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::config::WmConfig;
use crate::drivers::{InputDriver, OutputDriver};
use crate::error::WmResult;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::keybindings::{Action, KeyBindings};
use crate::term::render::{self, StatusBar, split_status};
use crate::term::{CellMetrics, PaneContent, TerminalSurface, pointer_from_mouse};
use crate::window::{Interaction, WindowHandle, WindowId, WindowManager, WindowOptions};

/// A window the demo desktop knows how to open.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub embedded: Option<&'static str>,
}

impl CatalogEntry {
    pub fn content(&self) -> PaneContent {
        let content = PaneContent::text(self.lines.iter().copied());
        match self.embedded {
            Some(label) => content.with_embedded(label),
            None => content,
        }
    }
}

pub const CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        title: "Notes",
        lines: &["Scratch space.", "Drag the title bar to move me."],
        embedded: None,
    },
    CatalogEntry {
        title: "Chat",
        lines: &["#general", "> hello there"],
        embedded: None,
    },
    CatalogEntry {
        title: "Search",
        lines: &["Results from an embedded page:"],
        embedded: Some("results frame"),
    },
    CatalogEntry {
        title: "Radio",
        lines: &["Now playing: nothing yet"],
        embedded: Some("player"),
    },
    CatalogEntry {
        title: "Activity",
        lines: &["No recent activity."],
        embedded: None,
    },
];

pub const HELP_TITLE: &str = "Help";

pub struct DeskApp {
    windows: WindowManager<TerminalSurface>,
    bindings: KeyBindings,
    next_entry: usize,
    status: StatusBar,
}

impl DeskApp {
    /// Build the desktop for a terminal of `area` cells.
    pub fn new(metrics: CellMetrics, area: Rect) -> WmResult<Self> {
        let config = WmConfig::default().with_chrome(metrics.chrome());
        let mut surface = TerminalSurface::new(metrics);
        surface.attach(split_status(area).0);
        Ok(Self {
            windows: WindowManager::with_config(surface, config)?,
            bindings: KeyBindings::default(),
            next_entry: 0,
            status: StatusBar::new(),
        })
    }

    pub fn windows(&self) -> &WindowManager<TerminalSurface> {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager<TerminalSurface> {
        &mut self.windows
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn resize(&mut self, area: Rect) {
        self.windows.surface_mut().attach(split_status(area).0);
    }

    /// Open the next catalog entry. Entries that are already open are
    /// brought back instead of duplicated.
    pub fn open_next(&mut self) -> WmResult<WindowHandle> {
        let entry = CATALOG[self.next_entry % CATALOG.len()];
        self.next_entry = self.next_entry.wrapping_add(1);
        self.windows
            .create_window(entry.title, entry.content(), WindowOptions::default())
    }

    pub fn open_help(&mut self) -> WmResult<WindowHandle> {
        let mut lines: Vec<String> = indoc::indoc! {"
            Drag a title bar to move a window and the corner grip to
            resize it. Esc puts the window back where it started.
        "}
        .lines()
        .map(str::to_string)
        .collect();
        lines.push(String::new());
        for (action, keys) in self.bindings.help_entries() {
            lines.push(format!("{:<14} {}", keys.join(" / "), action));
        }
        self.windows.create_window(
            HELP_TITLE,
            PaneContent::text(lines),
            WindowOptions::default().size(560, 400),
        )
    }

    pub fn handle_event(&mut self, event: &Event) -> WmResult<ControlFlow> {
        match event {
            Event::Key(key) => {
                let Some(action) = self.bindings.action_for_key(key) else {
                    return Ok(ControlFlow::Continue);
                };
                tracing::debug!(%action, "key action");
                self.apply(action)
            }
            Event::Mouse(mouse) => {
                let metrics = self.windows.surface().metrics();
                if let Some(pointer) = pointer_from_mouse(mouse, metrics) {
                    self.windows.handle_pointer(&pointer);
                }
                Ok(ControlFlow::Continue)
            }
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, *width, *height));
                Ok(ControlFlow::Continue)
            }
            _ => Ok(ControlFlow::Continue),
        }
    }

    fn apply(&mut self, action: Action) -> WmResult<ControlFlow> {
        let active = self.windows.active_window();
        match action {
            Action::Quit => return Ok(ControlFlow::Quit),
            Action::NewWindow => {
                self.open_next()?;
            }
            Action::OpenHelp => {
                self.open_help()?;
            }
            Action::MinimizeActive => {
                if let Some(id) = active {
                    self.windows.minimize_window(id);
                }
            }
            Action::ToggleMaximizeActive => {
                if let Some(id) = active {
                    self.windows.toggle_maximize(id);
                }
            }
            Action::CloseActive => {
                if let Some(id) = active {
                    self.windows.close_window(id);
                }
            }
            Action::RestoreAll => {
                let minimized: Vec<_> = self
                    .windows
                    .windows()
                    .filter(|window| window.is_minimized())
                    .map(|window| window.id())
                    .collect();
                for id in minimized {
                    self.windows.restore_window(id);
                }
            }
            Action::CycleNextWindow => {
                self.windows.cycle_focus(true);
            }
            Action::CyclePrevWindow => {
                self.windows.cycle_focus(false);
            }
            Action::CancelInteraction => {
                self.windows.cancel_interaction();
            }
        }
        Ok(ControlFlow::Continue)
    }

    fn title_of(&self, id: WindowId) -> &str {
        self.windows.window(id).map(|w| w.title()).unwrap_or("?")
    }

    pub fn refresh_status(&mut self) {
        let count = self.windows.len();
        let minimized = self.windows.windows().filter(|w| w.is_minimized()).count();
        let mut left = format!(
            " {count} window{}",
            if count == 1 { "" } else { "s" }
        );
        if minimized > 0 {
            left.push_str(&format!(" ({minimized} minimized)"));
        }
        if let Some(id) = self.windows.active_window() {
            left.push_str(&format!(" | active: {}", self.title_of(id)));
            // minimizing leaves focus where it was
            if self.windows.window(id).is_some_and(|w| w.is_minimized()) {
                left.push_str(" (minimized)");
            }
        }
        let right = match self.windows.interaction() {
            Some(Interaction::Dragging(drag)) => format!("moving {} ", self.title_of(drag.id)),
            Some(Interaction::Resizing(resize)) => {
                format!("resizing {} ", self.title_of(resize.id))
            }
            None => "n new  h help  q quit ".to_string(),
        };
        self.status.set_left(left);
        self.status.set_right(right);
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        self.refresh_status();
        render::draw(frame, self.windows.surface(), &self.status);
    }
}

/// Drive `app` until the user quits: redraw on every idle tick, route every
/// input event through the window manager.
pub fn run_app<O, D>(
    output: &mut O,
    input: D,
    app: &mut DeskApp,
    poll_interval: Duration,
) -> WmResult<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    event_loop.run(|_, event| match event {
        None => {
            output.draw(|frame| app.draw(frame))?;
            Ok(ControlFlow::Continue)
        }
        Some(evt) => app.handle_event(&evt).map_err(io::Error::other),
    })?;
    Ok(())
}

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use super::{CellRect, TerminalPane, TerminalSurface};

const BUTTONS: [&str; 3] = [" _ ", " □ ", " × "];
const BUTTON_CELLS: i64 = 9;

/// Split the frame into the desktop and the one-row status bar below it.
pub fn split_status(area: Rect) -> (Rect, Rect) {
    if area.height == 0 {
        return (area, Rect::default());
    }
    let desk = Rect {
        height: area.height - 1,
        ..area
    };
    let status = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    (desk, status)
}

pub fn draw(frame: &mut Frame, surface: &TerminalSurface, status: &StatusBar) {
    let area = frame.area();
    render_desktop(frame.buffer_mut(), area, surface, status);
}

pub fn render_desktop(
    buffer: &mut Buffer,
    area: Rect,
    surface: &TerminalSurface,
    status: &StatusBar,
) {
    let (desk, status_row) = split_status(area);
    let clip = desk.intersection(buffer.area);
    let mut canvas = Canvas { buffer, clip };
    canvas.fill(
        CellRect {
            col: desk.x as i64,
            row: desk.y as i64,
            cols: desk.width as i64,
            rows: desk.height as i64,
        },
        Style::default().bg(Color::Black),
    );
    let metrics = surface.metrics();
    for (_, pane) in surface.stacked() {
        draw_pane(&mut canvas, metrics.cells_for(pane.bounds), pane);
    }
    status.render(canvas.buffer, status_row);
}

/// Signed drawing into a clipped region; windows may hang off any edge.
struct Canvas<'a> {
    buffer: &'a mut Buffer,
    clip: Rect,
}

impl Canvas<'_> {
    fn columns(&self, from: i64, to: i64) -> std::ops::Range<i64> {
        let left = self.clip.x as i64;
        from.max(left)..to.min(left + self.clip.width as i64)
    }

    fn rows(&self, from: i64, to: i64) -> std::ops::Range<i64> {
        let top = self.clip.y as i64;
        from.max(top)..to.min(top + self.clip.height as i64)
    }

    fn put(&mut self, x: i64, y: i64, symbol: &str, style: Style) {
        let (left, top) = (self.clip.x as i64, self.clip.y as i64);
        if x < left
            || y < top
            || x >= left + self.clip.width as i64
            || y >= top + self.clip.height as i64
        {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    fn put_str(&mut self, x: i64, y: i64, text: &str, style: Style, limit: i64) {
        let mut buf = [0u8; 4];
        for (idx, ch) in text.chars().take(limit.max(0) as usize).enumerate() {
            self.put(x + idx as i64, y, ch.encode_utf8(&mut buf), style);
        }
    }

    fn fill(&mut self, rect: CellRect, style: Style) {
        let columns = self.columns(rect.col, rect.right());
        for y in self.rows(rect.row, rect.bottom()) {
            for x in columns.clone() {
                self.put(x, y, " ", style);
            }
        }
    }
}

fn draw_pane(canvas: &mut Canvas<'_>, cells: CellRect, pane: &TerminalPane) {
    if cells.cols < 2 || cells.rows < 2 {
        return;
    }
    let body_style = Style::default().fg(Color::White).bg(Color::Black);
    let border_style = Style::default().fg(Color::DarkGray).bg(Color::Black);
    let header_style = if pane.active {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };

    let left = cells.col;
    let right = cells.right() - 1;
    let top = cells.row;
    let bottom = cells.bottom() - 1;

    canvas.fill(cells, body_style);

    // Title bar
    canvas.fill(CellRect { rows: 1, ..cells }, header_style);
    let buttons_x = cells.right() - BUTTON_CELLS;
    canvas.put_str(left + 1, top, &pane.title, header_style, buttons_x - left - 2);
    for (slot, label) in BUTTONS.iter().enumerate() {
        canvas.put_str(buttons_x + 3 * slot as i64, top, label, header_style, 3);
    }

    // Borders
    for y in canvas.rows(top + 1, bottom) {
        canvas.put(left, y, "│", border_style);
        canvas.put(right, y, "│", border_style);
    }
    canvas.put(left, bottom, "└", border_style);
    for x in canvas.columns(left + 1, right) {
        canvas.put(x, bottom, "─", border_style);
    }
    canvas.put(right, bottom, "◢", border_style.fg(Color::Gray));

    // Body
    let inner_left = left + 1;
    let inner_width = cells.cols - 2;
    let body_top = top + 1;
    for (idx, line) in pane.content.lines.iter().enumerate() {
        let y = body_top + idx as i64;
        if y >= bottom {
            break;
        }
        canvas.put_str(inner_left, y, line, body_style, inner_width);
    }

    let Some(label) = &pane.content.embedded else {
        return;
    };
    let region_top = body_top + pane.content.lines.len() as i64 + 1;
    if region_top >= bottom || inner_width <= 0 {
        return;
    }
    let (region_style, text) = if pane.pointer_events {
        (
            Style::default().fg(Color::Gray).bg(Color::Indexed(236)),
            format!("[{label}]"),
        )
    } else {
        (
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Indexed(52))
                .add_modifier(Modifier::ITALIC),
            format!("[{label}] (input suppressed)"),
        )
    };
    canvas.fill(
        CellRect {
            col: inner_left,
            row: region_top,
            cols: inner_width,
            rows: bottom - region_top,
        },
        region_style,
    );
    let text_width = text.chars().count() as i64;
    let text_x = inner_left + ((inner_width - text_width) / 2).max(0);
    let text_y = region_top + (bottom - region_top) / 2;
    canvas.put_str(text_x, text_y, &text, region_style, inner_width);
}

pub struct StatusBar {
    left: String,
    right: String,
    style: Style,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            style: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn render(&self, buffer: &mut Buffer, area: Rect) {
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let mut canvas = Canvas {
            buffer,
            clip: bounds,
        };
        let width = bounds.width as i64;
        let (x, y) = (bounds.x as i64, bounds.y as i64);
        canvas.fill(
            CellRect {
                col: x,
                row: y,
                cols: width,
                rows: 1,
            },
            self.style,
        );
        canvas.put_str(x, y, &self.left, self.style, width);
        let right_width = self.right.chars().count() as i64;
        if right_width > 0 && right_width < width {
            canvas.put_str(x + width - right_width, y, &self.right, self.style, right_width);
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// Smooths over terminal differences before events reach the window manager.
///
/// Keys: Shift+Tab arrives as `BackTab`, only presses get through, and on
/// Windows a held Esc reports once. Mouse: scroll is dropped, and repeated
/// motion reports for the same cell collapse into one.
#[derive(Debug, Default)]
pub struct EventNormalizer {
    esc_down: bool,
    last_motion: Option<(MouseEventKind, u16, u16)>,
}

impl EventNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(mut key) => {
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                if cfg!(windows) {
                    match key.kind {
                        KeyEventKind::Release => {
                            if key.code == KeyCode::Esc {
                                self.esc_down = false;
                            }
                            return None;
                        }
                        KeyEventKind::Repeat => return None,
                        KeyEventKind::Press => {}
                    }
                    if key.code == KeyCode::Esc {
                        if self.esc_down {
                            return None;
                        }
                        self.esc_down = true;
                    } else {
                        self.esc_down = false;
                    }
                } else if key.kind == KeyEventKind::Release {
                    return None;
                }
                Some(Event::Key(key))
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown
                | MouseEventKind::ScrollLeft
                | MouseEventKind::ScrollRight => None,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    let motion = (mouse.kind, mouse.column, mouse.row);
                    if self.last_motion == Some(motion) {
                        return None;
                    }
                    self.last_motion = Some(motion);
                    Some(Event::Mouse(mouse))
                }
                _ => {
                    self.last_motion = None;
                    Some(Event::Mouse(mouse))
                }
            },
            other => Some(other),
        }
    }
}

use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// Pumps input from a driver into a handler on the calling thread.
///
/// The handler sees `None` once per iteration before waiting for input,
/// which is where the host redraws. When input is pending the whole queue is
/// drained before the next redraw, so a burst of drag motion is applied in
/// one go instead of one cell per frame.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct Scripted(Vec<Event>);

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.0.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            if self.0.is_empty() {
                return Err(io::Error::other("script exhausted"));
            }
            Ok(self.0.remove(0))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn drains_pending_events_between_ticks() {
        let mut event_loop = EventLoop::new(
            Scripted(vec![key('a'), key('b'), key('q')]),
            Duration::ZERO,
        );
        let mut ticks = 0;
        let mut seen = Vec::new();
        event_loop
            .run(|_, event| {
                match event {
                    None => ticks += 1,
                    Some(Event::Key(k)) => {
                        if k.code == KeyCode::Char('q') {
                            return Ok(ControlFlow::Quit);
                        }
                        seen.push(k.code);
                    }
                    Some(_) => {}
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(ticks, 1);
        assert_eq!(seen, vec![KeyCode::Char('a'), KeyCode::Char('b')]);
    }

    #[test]
    fn idle_tick_can_quit() {
        let mut event_loop = EventLoop::new(Scripted(Vec::new()), Duration::ZERO);
        let mut ticks = 0;
        event_loop
            .run(|_, _| {
                ticks += 1;
                Ok(if ticks == 3 {
                    ControlFlow::Quit
                } else {
                    ControlFlow::Continue
                })
            })
            .unwrap();
        assert_eq!(ticks, 3);
    }
}

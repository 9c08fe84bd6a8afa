use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;

/// Short enough that scroll-driven redraws feel immediate
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(30);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let step = self.scrub_config.scroll_step();
        let page = self.scrub_config.page_distance();

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.notification.is_visible() {
                    self.notification.dismiss();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.scrubber.scroll_down(step),
            KeyCode::Char('k') | KeyCode::Up => self.scrubber.scroll_up(step),
            KeyCode::PageDown => self.scrubber.scroll_down(page),
            KeyCode::PageUp => self.scrubber.scroll_up(page),
            KeyCode::Char('g') | KeyCode::Home => self.scrubber.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scrubber.jump_to_bottom(),
            _ => return,
        }

        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

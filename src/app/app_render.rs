use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::scrubber::ScrubberPhase;
use crate::theme;
use crate::widgets::{FrameView, popup, scrollbar};

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let (pane_area, status_area) = (layout[0], layout[1]);

        self.render_pane(frame, pane_area);
        self.render_status_line(frame, status_area);

        render_notification(frame, &mut self.notification);
    }

    fn render_pane(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = match self.scrubber.phase() {
            ScrubberPhase::Ready => theme::pane::BORDER_READY,
            ScrubberPhase::Loading => theme::pane::BORDER_LOADING,
            ScrubberPhase::Failed(_) => theme::pane::BORDER_ERROR,
            ScrubberPhase::Unloaded => theme::pane::BORDER_IDLE,
        };
        let title = self
            .source_name()
            .map(|name| format!(" {} ", name))
            .unwrap_or_default();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::pane::TITLE)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // The pane is the page viewport; this is also the display refresh
        // point where queued frames get painted.
        self.scrubber.set_viewport_height(u32::from(inner.height));
        self.scrubber.refresh();

        match self.scrubber.phase() {
            ScrubberPhase::Ready => {
                frame.render_widget(FrameView::new(self.scrubber.surface()), inner);
                let scroll = self.scrubber.scroll();
                scrollbar::render_vertical_scrollbar(
                    frame,
                    area,
                    scroll.content_height as usize,
                    scroll.viewport_height as usize,
                    scroll.offset as usize,
                );
            }
            ScrubberPhase::Loading => {
                let name = self.source_name().unwrap_or_else(|| "animation".to_string());
                render_message(frame, inner, &format!("Decoding {}...", name), false);
            }
            ScrubberPhase::Failed(e) => {
                let message = format!("Failed to load animation: {}", e);
                render_message(frame, inner, &message, true);
            }
            ScrubberPhase::Unloaded => {
                render_message(frame, inner, "No animation loaded", false);
            }
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];

        if let (Some(current), Some(count)) =
            (self.scrubber.current_frame(), self.scrubber.frame_count())
        {
            let scroll = self.scrubber.scroll();
            spans.push(Span::styled(
                format!(
                    "frame {}/{}  scroll {}/{}",
                    current + 1,
                    count,
                    scroll.offset,
                    scroll.max_offset
                ),
                Style::default().fg(theme::status_line::POSITION),
            ));
            spans.push(separator());
            spans.extend(hint_spans(&hints![
                "j/k" => "Scroll",
                "PgUp/PgDn" => "Page",
                "g/G" => "First/Last",
                "q" => "Quit",
            ]));
        } else {
            spans.extend(hint_spans(&hints!["Esc" => "Dismiss", "q" => "Quit"]));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let color = if is_error {
        theme::pane::ERROR_MESSAGE
    } else {
        theme::pane::MESSAGE
    };
    let width = (message.chars().count() as u16).min(area.width);
    let target = popup::centered_popup(area, width, 1);

    let paragraph = Paragraph::new(Span::styled(message.to_string(), Style::default().fg(color)))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, target);
}

fn separator() -> Span<'static> {
    Span::styled(
        " \u{2022} ",
        Style::default().fg(theme::status_line::SEPARATOR),
    )
}

fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::status_line::KEY);
    let desc_style = Style::default().fg(theme::status_line::DESCRIPTION);

    let mut spans = Vec::with_capacity(hints.len() * 4);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }
    spans
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

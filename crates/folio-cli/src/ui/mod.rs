//! TUI rendering — orchestrates all panes.

pub mod form;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Status};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  form::draw(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    format!(" folio  Let's work together → {}", app.recipient),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  // Reference of the last accepted submission, if any.
  let right_text = match app.last_id {
    Some(id) => format!("ref {}  {date} ", &id.simple().to_string()[..8]),
    None => format!("{date} "),
  };
  let right = Span::styled(
    right_text,
    Style::default().fg(Color::DarkGray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

const HINTS: &str = "Tab/↑↓ field  Enter next/newline  Ctrl-S send  Esc quit";

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, mode_bg, text) = match &app.status {
    Status::Idle => ("EDIT", Color::Cyan, HINTS),
    Status::Success(m) => ("SENT", Color::Green, m.as_str()),
    Status::Failure(m) => ("ERROR", Color::Red, m.as_str()),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(mode_bg)
      .add_modifier(Modifier::BOLD),
  );
  let text_span = Span::styled(
    format!("  {text}"),
    Style::default().fg(Color::Gray),
  );

  let line = Line::from(vec![mode_span, text_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use ratatui::{Terminal, backend::TestBackend};

  use crate::{
    client::{ApiClient, ApiConfig},
    compose::BrowserComposer,
  };

  fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
      .backend()
      .buffer()
      .content()
      .iter()
      .map(|c| c.symbol())
      .collect()
  }

  fn app() -> App {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://localhost:3000".into(),
    })
    .unwrap();
    App::new(client, Box::new(BrowserComposer), "owner@example.com".into())
  }

  #[test]
  fn renders_every_field_and_hints() {
    let mut app = app();
    app.form.subject = "Consulting".into();
    let screen = render(&app);
    for text in ["Name", "Email", "Subject", "Message", "Consulting", "Ctrl-S send"] {
      assert!(screen.contains(text), "missing {text:?}");
    }
  }

  #[test]
  fn failure_status_replaces_hints() {
    let mut app = app();
    app.status = Status::Failure("Please fill in: email".into());
    let screen = render(&app);
    assert!(screen.contains("ERROR"));
    assert!(screen.contains("Please fill in: email"));
    assert!(!screen.contains("Ctrl-S send"));
  }
}

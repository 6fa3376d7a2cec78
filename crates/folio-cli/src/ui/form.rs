//! Contact form pane — one bordered box per field.

use folio_core::submission::Field;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Position, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the four fields into `area`; the message box takes the remaining
/// height.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // name
      Constraint::Length(3), // email
      Constraint::Length(3), // subject
      Constraint::Min(3),    // message
    ])
    .split(area);

  for (field, rect) in Field::ALL.into_iter().zip(rows.iter()) {
    draw_field(f, *rect, app, field);
  }
}

fn label(field: Field) -> &'static str {
  match field {
    Field::Name => " Name ",
    Field::Email => " Email ",
    Field::Subject => " Subject ",
    Field::Message => " Message ",
  }
}

fn draw_field(f: &mut Frame, area: Rect, app: &App, field: Field) {
  let focused = app.focus == field;
  let border = if focused {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::DarkGray)
  };

  let block = Block::default()
    .title(label(field))
    .borders(Borders::ALL)
    .border_style(border);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let value = app.form.get(field);
  let mut para = Paragraph::new(value.to_string());
  if field == Field::Message {
    para = para.wrap(Wrap { trim: false });
  }
  f.render_widget(para, inner);

  // Single-line fields show the terminal cursor after the last character.
  if focused && field != Field::Message {
    let width = value.chars().count() as u16;
    let x = inner.x + width.min(inner.width.saturating_sub(1));
    f.set_cursor_position(Position::new(x, inner.y));
  }
}

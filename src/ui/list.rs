// Todo list rendering.
// One multi-line entry per record with its image reference, plus an empty state.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::TodoListState;
use crate::todo::{TodoCollection, TodoRecord};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Todos "));
    frame.render_widget(text, area);
}

fn todo_item(record: &TodoRecord) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                record.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format_relative_time(&record.created_at)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::raw(record.description.clone())),
    ];

    if let Some(image) = &record.image {
        lines.push(Line::from(vec![
            Span::styled("🖼 ", Style::default().fg(Color::Magenta)),
            Span::styled(image.to_string(), Style::default().fg(Color::Magenta)),
        ]));
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

/// Render the todo list.
pub fn render_todo_list(
    frame: &mut Frame,
    todos: &TodoCollection,
    list: &mut TodoListState,
    area: Rect,
) {
    if todos.is_empty() {
        render_empty(frame, area, "No todos yet. Press Tab to create one.");
        return;
    }

    let items: Vec<ListItem> = todos.iter().map(todo_item).collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Todos "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}

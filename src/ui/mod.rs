// UI module for rendering the TUI.
// Contains widgets for tabs, the todo list, the create form, and modals.

mod form;
mod list;
mod modal;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Tab bar
    tabs::draw_tabs(frame, app, chunks[0]);

    // Main content area
    match app.active_tab {
        Tab::List => list::render_todo_list(frame, &app.todos, &mut app.list, chunks[1]),
        Tab::Create => form::draw_form(frame, &app.form, chunks[1]),
    }

    // Status bar
    draw_status_bar(frame, app, chunks[2]);

    if let Some(modal) = &app.browse {
        modal::draw_browse_modal(frame, modal);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the status bar with key hints, or the latest status message.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.status {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(status, area);
        return;
    }

    let hints = match app.active_tab {
        Tab::List => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  d "),
            Span::styled("Delete", Style::default().fg(Color::DarkGray)),
            Span::raw("  Tab "),
            Span::styled("Switch", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
        Tab::Create => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Field", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Next/Press", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^S "),
            Span::styled("Create", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Done editing", Style::default().fg(Color::DarkGray)),
            Span::raw("  Tab "),
            Span::styled("Switch", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^C "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
    };

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 50u16.min(area.width);
    let popup_height = 17u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  Tab / 1 / 2   ", "Switch tabs"),
        key("  ↑/↓ or j/k    ", "Navigate list"),
        key("  d / Del       ", "Delete selected todo"),
        key("  ↑/↓           ", "Move between form fields"),
        key("  Enter         ", "Next field / press button"),
        key("  Ctrl+S        ", "Create todo"),
        key("  Esc           ", "Stop editing / close"),
        key("  ?             ", "Show/hide this help"),
        key("  q / Ctrl+C    ", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help "),
    );

    frame.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::picker::{ImagePicker, PickOutcome, PickerRequest};
    use crate::todo::{ImageRef, NewTodo};
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct NoPicker;

    #[async_trait]
    impl ImagePicker for NoPicker {
        async fn pick(&self, _request: PickerRequest) -> Result<PickOutcome> {
            Ok(PickOutcome::Cancelled)
        }
    }

    fn test_app() -> App {
        let (tx, rx) = mpsc::unbounded_channel();
        App::new(Arc::new(NoPicker), tx, rx)
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_list() {
        let mut app = test_app();
        let screen = render(&mut app);
        assert!(screen.contains("List"));
        assert!(screen.contains("Create/Update"));
        assert!(screen.contains("No todos yet"));
    }

    #[test]
    fn test_list_shows_records() {
        let mut app = test_app();
        app.todos.add(NewTodo::new("Buy milk", "2%", None).unwrap());
        app.todos.add(
            NewTodo::new("Call Bob", "re: taxes", Some(ImageRef::new("file://x.png"))).unwrap(),
        );

        let screen = render(&mut app);
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("re: taxes"));
        assert!(screen.contains("file://x.png"));
        assert!(screen.contains("List (2)"));
    }

    #[test]
    fn test_form_and_overlays() {
        let mut app = test_app();
        app.set_active_index(1);
        app.form.draft.title = "Buy milk".to_string();

        let screen = render(&mut app);
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("Import Image"));
        assert!(screen.contains("[ Create ]"));

        app.show_help = true;
        assert!(render(&mut app).contains("Keyboard Shortcuts"));

        app.show_help = false;
        app.status = Some("Image picker failed: boom".to_string());
        assert!(render(&mut app).contains("Image picker failed: boom"));
    }
}

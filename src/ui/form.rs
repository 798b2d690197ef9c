// Create form rendering.
// Title and description inputs, the image import button, and the create button.

use ratatui::{prelude::*, widgets::*};

use crate::state::{FormFocus, FormState};

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(format!(" {} ", label));

    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    } else if value.is_empty() {
        spans.push(Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };

    let button = Paragraph::new(format!("[ {} ]", label))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(button, area);
}

/// Draw the create form.
pub fn draw_form(frame: &mut Frame, form: &FormState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Description
            Constraint::Length(1), // Import image
            Constraint::Length(2), // Selected image
            Constraint::Length(1), // Create
            Constraint::Min(0),
        ])
        .split(area);

    let focus = form.focus;
    draw_input(
        frame,
        chunks[0],
        "Title",
        &form.draft.title,
        focus == FormFocus::Title,
    );
    draw_input(
        frame,
        chunks[1],
        "Description",
        &form.draft.description,
        focus == FormFocus::Description,
    );

    let import_label = if form.picker_pending {
        "Waiting for picker..."
    } else {
        "Import Image"
    };
    draw_button(
        frame,
        chunks[2],
        import_label,
        focus == FormFocus::ImportImage,
    );

    if let Some(image) = &form.draft.image {
        let line = Line::from(vec![
            Span::styled(" 🖼 ", Style::default().fg(Color::Magenta)),
            Span::styled(image.to_string(), Style::default().fg(Color::Magenta)),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[3]);
    }

    draw_button(frame, chunks[4], "Create", focus == FormFocus::Create);
}

// Modal UI components.
// Media browser dialog shown while the browse picker waits for a choice.

use ratatui::{prelude::*, widgets::*};

use crate::app::BrowseModal;

/// Draw the media browser modal on top of the current view.
pub fn draw_browse_modal(frame: &mut Frame, modal: &BrowseModal) {
    let area = frame.area();

    // Create centered modal
    let modal_width = 60u16.min(area.width);
    let modal_height = 18u16.min(area.height);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Directory
            Constraint::Min(1),    // Media files
            Constraint::Length(2), // Instructions
        ])
        .split(modal_area);

    let session = &modal.session;
    let (width, height) = session.request.aspect;

    let dir_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Import Image ({}:{}) ", width, height));
    let dir_line = Line::from(vec![
        Span::styled("Folder: ", Style::default().fg(Color::DarkGray)),
        Span::raw(session.dir.display().to_string()),
    ]);
    frame.render_widget(Paragraph::new(dir_line).block(dir_block), chunks[0]);

    let files_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Media ");

    if session.entries.is_empty() {
        let empty_text = Paragraph::new("No images or videos in this folder")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(files_block);
        frame.render_widget(empty_text, chunks[1]);
    } else {
        let items: Vec<ListItem> = (0..session.entries.len())
            .filter_map(|i| session.entry_label(i))
            .map(|label| {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(label, Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(modal.selection));

        let list_widget = List::new(items)
            .block(files_block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list_widget, chunks[1], &mut list_state);
    }

    // Instructions
    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Import  ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" = Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[2]);
}

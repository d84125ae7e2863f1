use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "KAUN BANEGA CROREPATI",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from("10 Questions · ₹10,000 Ladder · 3 Lifelines".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("Hello Contestant! Get ready for an exciting game!".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

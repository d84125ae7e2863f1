use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::format_rupees;
use crate::session::Outcome;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .split(area);

    let (headline, headline_color) = if session.is_top_tier_win() {
        ("🏆 CONGRATULATIONS! YOU WON! 🏆", Color::Yellow)
    } else {
        ("Thank you for playing!", Color::Cyan)
    };

    let closing = match session.outcome() {
        Some(Outcome::FullWin) => "Your performance was outstanding!",
        Some(Outcome::WrongAnswer) => "❌ Wrong Answer! ❌",
        Some(Outcome::Quit) => "You've chosen to quit the game.",
        None => "",
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(headline_color).bold(),
        )),
        Line::from(""),
        Line::from(closing.fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Your total winning amount: {}",
                format_rupees(session.winnings())
            ),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("r play again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

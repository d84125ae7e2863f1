use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, QuizPhase};
use crate::models::format_rupees;

const OPTION_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &app.session().current_question().text);
    render_phase_panel(frame, chunks[2], app);
    render_options(frame, chunks[3], app);
    render_controls(frame, chunks[4], app.phase());
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let stake = Paragraph::new(format!(
        "Question {} for {}",
        session.position(),
        format_rupees(session.prize_at_stake())
    ))
    .fg(Color::Yellow)
    .bold();
    frame.render_widget(stake, halves[0]);

    let progress = Paragraph::new(format!(
        "{}/{}",
        session.position(),
        session.total_questions()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(progress, halves[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

/// The middle panel changes with the phase: the lifeline offer, the banked
/// confirmation, or a reminder of what is still unused.
fn render_phase_panel(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.phase() {
        QuizPhase::LifelineOffer => {
            let mut lines = vec![Line::from("Available lifelines:".fg(Color::Cyan))];
            for (number, lifeline) in app.session().available_lifelines().iter().enumerate() {
                lines.push(Line::from(format!("  {}. {}", number + 1, lifeline.label())));
            }
            lines
        }
        QuizPhase::Answering => {
            let available = app.session().available_lifelines();
            let labels: Vec<&str> = available.iter().map(|l| l.label()).collect();
            let summary = if labels.is_empty() {
                "No lifelines left".to_string()
            } else {
                format!("Lifelines left: {}", labels.join(", "))
            };
            vec![Line::from(summary.fg(Color::DarkGray))]
        }
        QuizPhase::Banked { amount } => vec![
            Line::from(Span::styled(
                "🎉 Correct Answer! 🎉",
                Style::default().fg(Color::Green).bold(),
            )),
            Line::from(format!(
                "Congratulations! You've won {}",
                format_rupees(amount)
            )),
        ],
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let answering = app.phase() == QuizPhase::Answering;
    let mut lines: Vec<Line> = Vec::with_capacity(8);

    for (index, option) in app.session().display_options().iter().enumerate() {
        let style = if answering {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", OPTION_LABELS[index]), style.bold()),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, phase: QuizPhase) {
    let text = match phase {
        QuizPhase::LifelineOffer => "1-3 use lifeline  ·  n skip  ·  q walk away",
        QuizPhase::Answering => "a-d answer  ·  q walk away",
        QuizPhase::Banked { .. } => "enter next question  ·  q walk away",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

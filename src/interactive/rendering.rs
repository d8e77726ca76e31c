//! TUI rendering with ratatui
//!
//! Panels for the ladder, search counters, history and messages.

use super::app::{App, InputField, MessageStyle};
use crate::output::formatters::highlight_changes;
use crate::solver::SearchOutcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Inputs
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_inputs(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Ladder
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[2]);

    render_ladder(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (field, title, value, chunk) in [
        (InputField::Start, " Start ", &app.start_input, chunks[0]),
        (InputField::Goal, " Goal ", &app.goal_input, chunks[1]),
    ] {
        let color = if app.focus == field {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let border = if app.focus == field {
            BorderType::Double
        } else {
            BorderType::Plain
        };

        let input = Paragraph::new(value.to_uppercase())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(border)
                    .style(Style::default().fg(color)),
            );
        f.render_widget(input, chunk);
    }
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Ladder ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(result) = &app.current else {
        let paragraph = Paragraph::new("No search yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let content: Vec<Line> = match &result.outcome {
        SearchOutcome::Found(ladder) => highlight_changes(ladder)
            .into_iter()
            .enumerate()
            .map(|(i, rung)| {
                let style = if i == 0 || i + 1 == ladder.len() {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(vec![
                    Span::styled(format!("{i:>3}  "), Style::default().fg(Color::DarkGray)),
                    Span::styled(rung, style),
                ])
            })
            .collect(),
        SearchOutcome::NoPath | SearchOutcome::Aborted { .. } => vec![Line::from(Span::styled(
            format!("No path exists from {} to {}.", result.start, result.goal),
            Style::default().fg(Color::Red),
        ))],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Explored gauge
            Constraint::Length(7),      // Search counters
            Constraint::Percentage(50), // History
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_explored(f, app, chunks[0]);
    render_counters(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_explored(f: &mut Frame, app: &App, area: Rect) {
    let expansions = app.current.as_ref().map_or(0, |r| r.stats.expansions);
    let total = app.same_length_count();
    let percent = if total > 0 {
        ((expansions as f64 / total as f64) * 100.0).min(100.0) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Explored ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{expansions}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_counters(f: &mut Frame, app: &App, area: Rect) {
    let content = app.current.as_ref().map_or_else(
        || vec![Line::from("Counters appear after a search")],
        |result| {
            vec![
                Line::from(format!("Expansions:    {}", result.stats.expansions)),
                Line::from(format!("Nodes created: {}", result.stats.nodes_created)),
                Line::from(format!("Max frontier:  {}", result.stats.max_frontier)),
                Line::from(format!("Depth reached: {}", result.stats.depth_reached)),
                Line::from(format!(
                    "Time:          {:.3}ms",
                    result.duration.as_secs_f64() * 1000.0
                )),
            ]
        },
    );

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .map(|entry| {
            let outcome = entry
                .length
                .map_or_else(|| "no path".to_string(), |len| format!("{len} words"));
            ListItem::new(format!(
                "{} → {}: {} [{} exp]",
                entry.start.to_uppercase(),
                entry.goal.to_uppercase(),
                outcome,
                entry.expansions
            ))
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let dict_text = format!("Dictionary: {} words", app.dictionary.len());
    f.render_widget(Paragraph::new(dict_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Searches: {} | Found: {}",
        app.stats.searches, app.stats.found
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Esc: Quit | Tab: Switch | Enter: Search | ^S: Swap | ^R: Reset")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

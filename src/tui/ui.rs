//! Stateless rendering for the game view.

use super::app::App;
use super::mode::GameMode;
use crate::game::{GameStatus, PlayerSlot, Round, group_into_rounds};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the whole game view.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let input_height = if app.mode().viewer_slot().is_some() {
        4
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status line
            Constraint::Length(input_height),
            Constraint::Min(5),   // History
            Constraint::Length(1), // Help line
        ])
        .split(area);

    draw_title(frame, chunks[0], app);
    draw_status(frame, chunks[1], app);
    if input_height > 0 {
        draw_input(frame, chunks[2], app);
    }
    draw_history(frame, chunks[3], app);
    draw_help(frame, chunks[4], app);

    if app.end_popup_open() {
        draw_end_popup(frame, area, app);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(format!("Codebreaker - {}", app.mode().title()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Game ID: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.game_id().to_string(), Style::default().fg(Color::White)),
        Span::raw("  "),
    ];

    match app.state() {
        None => spans.push(Span::styled(
            "Connecting...",
            Style::default().fg(Color::DarkGray),
        )),
        Some(state) => {
            let (status_label, status_color) = match state.status {
                GameStatus::InProgress => ("In Progress", Color::Blue),
                GameStatus::Completed => ("Completed", Color::Green),
                GameStatus::Cancelled => ("Cancelled", Color::Red),
            };
            spans.push(Span::styled(
                format!("[{}]", status_label),
                Style::default().fg(status_color),
            ));

            if let Some(winner) = state.winner {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("Winner: {}", app.mode().player_label(winner)),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ));
            }

            if state.status == GameStatus::InProgress {
                let turn = state.waiting_for_player;
                let color = if turn == PlayerSlot::Player1 {
                    Color::Green
                } else {
                    Color::Magenta
                };
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("{}'s turn", app.mode().player_label(turn)),
                    Style::default().fg(color),
                ));
            }
        }
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(error) = app.stream_error() {
        lines.push(Line::from(Span::styled(
            format!("Connection problem: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let enabled = app.is_my_turn() && !app.is_over();
    let border_style = if app.input().error().is_some() {
        Style::default().fg(Color::Red)
    } else if enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = app.input().value();
    let mut shown = String::from(value);
    shown.push_str(&"_".repeat(4usize.saturating_sub(value.chars().count())));

    let input_line = Line::from(vec![
        Span::raw("Guess: "),
        Span::styled(
            shown,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);

    let hint_line = if let Some(error) = app.input().error() {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(error) = app.command_error() {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ))
    } else if !enabled && !app.is_over() {
        Line::from(Span::styled(
            "Waiting for AI to make a move...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            "Enter 4 unique digits (0-9), Enter submits",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let paragraph = Paragraph::new(vec![input_line, hint_line]).block(
        Block::default()
            .title("Submit Guess")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.state() {
        None => vec![Line::from(Span::styled(
            "Waiting for the first update...",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(state) if state.history.is_empty() => {
            let text = match app.mode() {
                GameMode::AiVsAi => "No guesses yet. Waiting for AI players to start...",
                GameMode::PlayerVsAi => "No guesses yet. Make your first guess!",
            };
            vec![Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            ))]
        }
        Some(state) => {
            let rounds = group_into_rounds(&state.history);
            let total = rounds.len();
            let mut lines = Vec::new();
            // Newest round first; history order itself is untouched.
            for (index, round) in rounds.iter().enumerate().rev() {
                lines.push(Line::from(Span::styled(
                    format!("Round {}", index + 1),
                    Style::default().fg(Color::Cyan),
                )));
                push_guess_lines(&mut lines, app, round, PlayerSlot::Player1);
                push_guess_lines(&mut lines, app, round, PlayerSlot::Player2);
                if index + 1 != total {
                    lines.push(Line::raw(""));
                }
            }
            lines
        }
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Game History").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn push_guess_lines(lines: &mut Vec<Line<'_>>, app: &App, round: &Round, slot: PlayerSlot) {
    let label = app.mode().player_label(slot);
    let guess = match slot {
        PlayerSlot::Player1 => round.player_1.as_ref(),
        PlayerSlot::Player2 => round.player_2.as_ref(),
    };

    match guess {
        Some(guess) => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} guessed ", label),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    guess.code.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  feedback: ", Style::default().fg(Color::DarkGray)),
                Span::styled(guess.feedback.clone(), Style::default().fg(Color::Blue)),
            ]));
            if app.show_reasoning() {
                if let Some(comments) = &guess.comments {
                    lines.push(Line::from(Span::styled(
                        format!("    reasoning: {}", comments),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }
        None => {
            let text = match (app.mode(), slot) {
                (GameMode::PlayerVsAi, PlayerSlot::Player1) => "Waiting for your guess...",
                (GameMode::PlayerVsAi, PlayerSlot::Player2) => "Waiting for AI guess...",
                (GameMode::AiVsAi, PlayerSlot::Player1) => "Waiting for AI Player 1's guess...",
                (GameMode::AiVsAi, PlayerSlot::Player2) => "Waiting for AI Player 2's guess...",
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", text),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let help = if app.mode().viewer_slot().is_some() {
        "0-9 type guess | Backspace erase | Enter submit | r reasoning | q quit"
    } else {
        "r toggle AI reasoning | q quit"
    };
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_end_popup(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(area, 50, 9);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::from(Span::styled(
        "The game has ended.",
        Style::default().fg(Color::White),
    ))];

    match app.state().and_then(|state| state.winner) {
        Some(winner) => {
            let name = app.mode().player_label(winner);
            lines.push(Line::from(Span::styled(
                format!("Winner: {}", name),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            match (app.mode(), winner) {
                (GameMode::PlayerVsAi, PlayerSlot::Player1) => {
                    lines.push(Line::raw(""));
                    lines.push(Line::from(Span::styled(
                        "Congratulations! You've outsmarted the AI!",
                        Style::default().fg(Color::Green),
                    )));
                }
                (GameMode::AiVsAi, _) => {
                    lines.push(Line::raw(""));
                    lines.push(Line::from(Span::styled(
                        format!("{} figured out the secret code first!", name),
                        Style::default().fg(Color::White),
                    )));
                }
                _ => {}
            }
        }
        None => lines.push(Line::from(Span::styled(
            "The game ended without a winner.",
            Style::default().fg(Color::White),
        ))),
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Game Ended")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(paragraph, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

//! Widget drawing.
//!
//! # Responsibility
//! - Draw the card list, the detail view, the creation form and alerts
//!   from the controller's view models.
//!
//! # Invariants
//! - Every frame is drawn from scratch; no widget state survives between
//!   frames except the list selection cursor.

use crate::app::App;
use cardbox_core::{CardView, CreateForm, DetailView, FormField, ViewState};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    match app.controller.view() {
        ViewState::List => {
            draw_header(frame, layout[0], app);
            draw_card_list(frame, layout[1], app);
            draw_footer(
                frame,
                layout[2],
                "↑/↓ select  Enter open  n new note  q quit",
            );
        }
        ViewState::Detail { .. } => {
            draw_header(frame, layout[0], app);
            if let Some(detail) = app.controller.detail_view() {
                draw_detail(frame, layout[1], &detail);
            }
            draw_footer(frame, layout[2], "Esc/b back  s summarize  q quit");
        }
    }

    if app.controller.form().is_open() {
        draw_form(frame, app.controller.form());
    }

    if let Some(message) = app.alert.current() {
        draw_alert(frame, &message);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            "cardbox ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}", cardbox_core::core_version()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  •  "),
        Span::styled(
            format!("{} notes", app.controller.store().len()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center).block(block),
        area,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect, hints: &str) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center)
        .block(block),
        area,
    );
}

fn draw_card_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let cards = app.controller.list_view();
    app.selected = app.selected.min(cards.len().saturating_sub(1));

    let items: Vec<ListItem> = cards.iter().map(card_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Notes"))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("▌ ");

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_item(card: &CardView) -> ListItem<'static> {
    let mut topic_spans: Vec<Span> = Vec::new();
    for topic in &card.topics {
        topic_spans.push(Span::styled(
            format!(" {topic} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        topic_spans.push(Span::raw(" "));
    }

    ListItem::new(vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(topic_spans),
        Line::from(Span::styled(
            card.date.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ])
}

fn draw_detail(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.date.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if !detail.topics.is_empty() {
        let mut topic_spans: Vec<Span> = Vec::new();
        for topic in &detail.topics {
            topic_spans.push(Span::styled(
                format!(" {topic} "),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            topic_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(topic_spans));
    }

    lines.push(Line::from(""));
    for content_line in detail.content.lines() {
        lines.push(Line::from(content_line.to_string()));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Note"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_form(frame: &mut Frame, form: &CreateForm) {
    let area = centered_rect(60, 60, frame.area());

    let mut lines = Vec::new();
    lines.extend(field_lines("Title", &form.title, form.focus == FormField::Title));
    lines.extend(field_lines(
        "Topics (comma separated)",
        &form.topics,
        form.focus == FormField::Topics,
    ));
    lines.extend(field_lines(
        "Content",
        &form.content,
        form.focus == FormField::Content,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ctrl+S save  Esc close  Tab/Shift-Tab move",
        Style::default().fg(Color::Gray),
    )));

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    "New Note",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn field_lines(label: &str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut lines = vec![Line::from(Span::styled(format!("{label}:"), label_style))];

    let mut value_lines: Vec<String> = value.split('\n').map(str::to_string).collect();
    if focused {
        if let Some(last) = value_lines.last_mut() {
            last.push('▌');
        }
    }
    lines.extend(value_lines.into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines
}

fn draw_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 25, frame.area());
    let mut lines: Vec<Line> = message
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to dismiss",
        Style::default().fg(Color::Gray),
    )));

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    "Notice",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

mod articles;
pub mod formatters;
mod modals;

use crate::api::Transport;
use crate::app::{App, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw<T: Transport>(frame: &mut Frame, app: &mut App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_filters(frame, chunks[1], app);
    articles::draw_articles(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    match app.input_mode {
        InputMode::SourcePicker => modals::draw_source_picker(frame, app),
        InputMode::ArticleDetail => modals::draw_article_detail(frame, app),
        InputMode::Help => modals::draw_help(frame),
        InputMode::Normal | InputMode::Keyword => {}
    }
}

fn draw_header<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let status = if app.loading {
        "[Loading...]".to_string()
    } else {
        match &app.last_updated {
            Some(t) => format!("[fetched {}]", t),
            None => String::new(),
        }
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " News Explorer ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::raw("As of "),
        Span::styled(now, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_filters<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let dim = Style::default().fg(Color::DarkGray);
    let category_style = if app.filter.category_overridden() {
        dim.add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };

    let keyword = app.filter.keyword.as_deref().unwrap_or("-");
    let sources = if app.filter.category_overridden() {
        app.selected_source_names().join(", ")
    } else if app.sources.is_unavailable() {
        "(unavailable)".to_string()
    } else {
        "all".to_string()
    };

    let line = Line::from(vec![
        Span::styled(" Category: ", dim),
        Span::styled(app.filter.category.label(), category_style),
        Span::styled("  Keyword: ", dim),
        Span::styled(keyword.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled("  Sources (overrides category): ", dim),
        Span::styled(sources, Style::default().fg(Color::Magenta)),
    ]);

    let filters = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Filters "));
    frame.render_widget(filters, area);
}

fn draw_footer<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = " [g] Get News [c/C] Category [/] Keyword [s] Sources [x] Clear sources [Enter] Detail [↑↓] Nav [?] Help [q] Quit ";
            if let Some(msg) = &app.status_message {
                Line::from(vec![
                    Span::styled(msg.clone(), Style::default().fg(Color::Red)),
                    Span::raw(" | "),
                    Span::styled(help, Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
            }
        }
        InputMode::Keyword => Line::from(vec![
            Span::raw(" Keyword search: "),
            Span::styled(app.input_buffer.clone(), Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::raw(" | [Enter] Apply | [Esc] Cancel"),
        ]),
        InputMode::SourcePicker => Line::from(Span::styled(
            " [Space] Toggle | [x] Clear | [↑↓] Nav | [Enter/Esc] Done ",
            Style::default().fg(Color::DarkGray),
        )),
        InputMode::ArticleDetail => Line::from(Span::styled(
            " [↑↓] Scroll | [Enter/Esc] Close article ",
            Style::default().fg(Color::DarkGray),
        )),
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

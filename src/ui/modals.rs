use super::centered_rect;
use super::formatters::*;
use crate::api::Transport;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_source_picker<T: Transport>(frame: &mut Frame, app: &App<T>) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let selected = app.filter.selected_source_ids.len();
    let block = Block::default()
        .title(format!(" Sources ({} selected) ", selected))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .style(Style::default().bg(Color::Black));

    let items: Vec<ListItem> = app
        .sources
        .sources()
        .iter()
        .enumerate()
        .map(|(i, source)| {
            let checked = app.filter.selected_source_ids.contains(&source.id);
            let mark = if checked { "[x] " } else { "[ ] " };
            let style = match (i == app.source_cursor, checked) {
                (true, _) => Style::default()
                    .bg(Color::Rgb(40, 60, 100))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                (false, true) => Style::default().fg(Color::Magenta),
                (false, false) => Style::default(),
            };
            ListItem::new(Line::from(Span::styled(format!("{}{}", mark, source.name), style)))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.source_cursor));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

pub fn draw_article_detail<T: Transport>(frame: &mut Frame, app: &mut App<T>) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let record = match app.selected_article() {
        Some(article) => format_article(article),
        None => return,
    };

    let outer_block = Block::default()
        .title(format!(" {} ", record.publisher.as_deref().unwrap_or("Article")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let body_area = chunks[0];
    let footer_area = chunks[1];

    let inner_width = body_area.width as usize;
    let body_height = body_area.height as usize;
    let dim = Style::default().fg(Color::DarkGray);

    let mut all_lines: Vec<Line> = Vec::new();

    if let Some(ts) = &record.timestamp {
        all_lines.push(Line::from(Span::styled(format!("🕒 {}", ts), dim)));
    }

    for line in word_wrap(&record.title, inner_width) {
        all_lines.push(Line::from(Span::styled(
            line,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(author) = &record.author {
        all_lines.push(Line::from(Span::styled(format!("By {}", author), dim)));
    }

    all_lines.push(Line::from(Span::styled("─".repeat(inner_width), dim)));

    for line in word_wrap(&record.description, inner_width) {
        all_lines.push(Line::from(line));
    }

    if let Some(img) = &record.image_url {
        all_lines.push(Line::from(""));
        all_lines.push(Line::from(vec![
            Span::styled("Image: ", dim),
            Span::styled(img.clone(), Style::default().fg(Color::Cyan)),
        ]));
    }

    all_lines.push(Line::from(""));
    all_lines.push(Line::from(vec![
        Span::styled("Read more: ", dim),
        Span::styled(
            record.url.clone(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        ),
    ]));

    let max_scroll = all_lines.len().saturating_sub(body_height);
    app.detail_scroll = app.detail_scroll.min(max_scroll);

    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(app.detail_scroll)
        .take(body_height)
        .collect();
    frame.render_widget(Paragraph::new(visible), body_area);

    let footer_line = Line::from(vec![
        Span::styled("[↑/↓] ", Style::default().fg(Color::Cyan)),
        Span::styled("scroll  ", dim),
        Span::styled("[Esc] ", Style::default().fg(Color::Cyan)),
        Span::styled("close", dim),
    ]);
    frame.render_widget(Paragraph::new(footer_line), footer_area);
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let rows = [
        ("g / r", "Get News for the current filters"),
        ("c / C", "Next / previous category"),
        ("/", "Edit keyword (empty clears it)"),
        ("s", "Pick sources (overrides category)"),
        ("x", "Clear selected sources"),
        ("↑↓ / jk", "Move between articles"),
        ("Enter", "Open article"),
        ("?", "Toggle this help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (k, desc) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", k), key),
            Span::raw(desc),
        ]));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, area);
}

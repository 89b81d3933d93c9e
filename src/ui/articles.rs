use super::formatters::*;
use crate::api::Transport;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

fn article_item(record: &DisplayRecord, width: usize, is_selected: bool) -> ListItem<'static> {
    let title_style = if is_selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::with_capacity(4);
    if let Some(ts) = &record.timestamp {
        let mut meta = vec![Span::styled(format!("🕒 {}", ts), Style::default().fg(Color::DarkGray))];
        if let Some(p) = &record.publisher {
            meta.push(Span::styled(format!("  {}", p), Style::default().fg(Color::Blue)));
        }
        lines.push(Line::from(meta));
    }
    lines.push(Line::from(Span::styled(truncate_str(&record.title, width), title_style)));
    if !record.description.is_empty() {
        lines.push(Line::from(truncate_str(&record.description, width)));
    }
    lines.push(Line::from(Span::styled(
        "─".repeat(width.min(40)),
        Style::default().fg(Color::DarkGray),
    )));

    let item = ListItem::new(lines);
    if is_selected {
        item.style(Style::default().bg(Color::Rgb(40, 60, 100)))
    } else {
        item
    }
}

pub fn draw_articles<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let title = if app.loading {
        " Headlines [Loading...] ".to_string()
    } else {
        format!(" Headlines ({} articles) ", app.articles.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.articles.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No articles found for those filters.",
            Style::default().fg(Color::DarkGray),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .articles
        .iter()
        .enumerate()
        .map(|(i, article)| article_item(&format_article(article), width, i == app.selected_index))
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

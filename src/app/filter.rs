use super::{App, InputMode};
use crate::api::{Category, HeadlineQuery, Transport};
use std::collections::BTreeSet;

/// What the user has asked for; turned into a [`HeadlineQuery`] on each fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Category,
    pub keyword: Option<String>,
    pub selected_source_ids: BTreeSet<String>,
}

impl FilterState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> HeadlineQuery {
        HeadlineQuery::new(
            self.category,
            self.keyword.clone(),
            self.selected_source_ids.clone(),
        )
    }

    /// Empty input clears the keyword; anything else is kept verbatim.
    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = if keyword.is_empty() {
            None
        } else {
            Some(keyword.to_string())
        };
    }

    /// Returns whether `id` is selected afterwards.
    pub fn toggle_source(&mut self, id: &str) -> bool {
        if self.selected_source_ids.remove(id) {
            false
        } else {
            self.selected_source_ids.insert(id.to_string());
            true
        }
    }

    pub fn category_overridden(&self) -> bool {
        !self.selected_source_ids.is_empty()
    }
}

impl<T: Transport> App<T> {
    pub fn next_category(&mut self) {
        self.filter.category = self.filter.category.next();
    }

    pub fn prev_category(&mut self) {
        self.filter.category = self.filter.category.prev();
    }

    pub fn start_keyword(&mut self) {
        self.input_mode = InputMode::Keyword;
        self.input_buffer = self.filter.keyword.clone().unwrap_or_default();
    }

    pub fn confirm_keyword(&mut self) {
        self.filter.set_keyword(&self.input_buffer);
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn open_source_picker(&mut self) {
        if self.sources.sources().is_empty() {
            self.status_message = Some("No sources available".to_string());
            return;
        }
        self.source_cursor = self.source_cursor.min(self.sources.sources().len() - 1);
        self.input_mode = InputMode::SourcePicker;
    }

    pub fn close_source_picker(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn source_cursor_up(&mut self) {
        if self.source_cursor > 0 {
            self.source_cursor -= 1;
        }
    }

    pub fn source_cursor_down(&mut self) {
        let len = self.sources.sources().len();
        if len > 0 && self.source_cursor < len - 1 {
            self.source_cursor += 1;
        }
    }

    pub fn toggle_source_at_cursor(&mut self) {
        if let Some(source) = self.sources.sources().get(self.source_cursor) {
            let id = source.id.clone();
            self.filter.toggle_source(&id);
        }
    }

    pub fn clear_sources(&mut self) {
        self.filter.selected_source_ids.clear();
    }

    /// Selected sources by display name, falling back to the raw id.
    pub fn selected_source_names(&self) -> Vec<String> {
        self.filter
            .selected_source_ids
            .iter()
            .map(|id| self.sources.name_of(id).unwrap_or(id.as_str()).to_string())
            .collect()
    }
}

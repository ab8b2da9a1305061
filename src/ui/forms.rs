use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::commands::{DELETE_CATEGORY_PROMPT, DELETE_ITEM_PROMPT};
use crate::models::{TodoCategory, TodoItem};

/// What a submitted title form should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TitleTarget {
    NewCategory,
    RenameCategory { category_id: String },
    NewItem { category_id: String },
    RenameItem { category_id: String, item_id: String },
}

impl TitleTarget {
    pub(crate) fn heading(&self) -> &'static str {
        match self {
            TitleTarget::NewCategory => "Add Category",
            TitleTarget::RenameCategory { .. } => "Edit Category",
            TitleTarget::NewItem { .. } => "Add Item",
            TitleTarget::RenameItem { .. } => "Edit Item",
        }
    }
}

/// Single-line title input used for every add/edit dialog.
#[derive(Default, Clone)]
pub(crate) struct TitleForm {
    pub(crate) title: String,
    pub(crate) error: Option<String>,
}

impl TitleForm {
    pub(crate) fn with_title(title: &str) -> Self {
        Self {
            title: title.to_string(),
            error: None,
        }
    }

    /// Append a character, ignoring control input.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.title.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.title.pop();
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let (display, style) = if self.title.is_empty() {
            ("<required>".to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (self.title.clone(), Style::default().fg(Color::Yellow))
        };
        Line::from(vec![Span::raw("Title: "), Span::styled(display, style)])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.title.chars().count()
    }
}

/// Pending delete waiting on a yes/no answer.
#[derive(Clone, Debug)]
pub(crate) enum ConfirmDelete {
    Category {
        category_id: String,
        title: String,
        item_count: usize,
    },
    Item {
        category_id: String,
        item_id: String,
        title: String,
    },
}

impl ConfirmDelete {
    pub(crate) fn category(category: &TodoCategory) -> Self {
        ConfirmDelete::Category {
            category_id: category.id.clone(),
            title: category.title.clone(),
            item_count: category.items.len(),
        }
    }

    pub(crate) fn item(category_id: &str, item: &TodoItem) -> Self {
        ConfirmDelete::Item {
            category_id: category_id.to_string(),
            item_id: item.id.clone(),
            title: item.title.clone(),
        }
    }

    pub(crate) fn prompt(&self) -> &'static str {
        match self {
            ConfirmDelete::Category { .. } => DELETE_CATEGORY_PROMPT,
            ConfirmDelete::Item { .. } => DELETE_ITEM_PROMPT,
        }
    }

    /// Second line of the dialog naming what goes away.
    pub(crate) fn detail(&self) -> String {
        match self {
            ConfirmDelete::Category {
                title, item_count, ..
            } => match item_count {
                0 => format!("'{title}' has no items."),
                1 => format!("'{title}' and its 1 item will be removed."),
                n => format!("'{title}' and its {n} items will be removed."),
            },
            ConfirmDelete::Item { title, .. } => format!("'{title}' will be removed."),
        }
    }
}

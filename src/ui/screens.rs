use crate::models::{TodoCategory, TodoItem};

/// Which half of the todo screen receives navigation keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Pane {
    Categories,
    Items,
}

/// Selection state for the two-pane todo view. Indices are clamped against
/// the store after every mutation, so they never point past the end.
pub(crate) struct TodoScreen {
    pub(crate) focus: Pane,
    pub(crate) category: usize,
    pub(crate) item: usize,
}

impl TodoScreen {
    pub(crate) fn new() -> Self {
        Self {
            focus: Pane::Categories,
            category: 0,
            item: 0,
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Categories => Pane::Items,
            Pane::Items => Pane::Categories,
        };
    }

    pub(crate) fn current_category<'a>(
        &self,
        categories: &'a [TodoCategory],
    ) -> Option<&'a TodoCategory> {
        categories.get(self.category)
    }

    pub(crate) fn current_item<'a>(&self, categories: &'a [TodoCategory]) -> Option<&'a TodoItem> {
        self.current_category(categories)?.items.get(self.item)
    }

    /// Move the cursor in the focused pane. Switching category resets the
    /// item cursor to the top.
    pub(crate) fn move_selection(&mut self, categories: &[TodoCategory], offset: isize) {
        match self.focus {
            Pane::Categories => {
                let before = self.category;
                self.category = offset_index(self.category, offset, categories.len());
                if before != self.category {
                    self.item = 0;
                }
            }
            Pane::Items => {
                let len = self
                    .current_category(categories)
                    .map(|cat| cat.items.len())
                    .unwrap_or(0);
                self.item = offset_index(self.item, offset, len);
            }
        }
    }

    pub(crate) fn select_first(&mut self, categories: &[TodoCategory]) {
        self.move_selection(categories, isize::MIN / 2);
    }

    pub(crate) fn select_last(&mut self, categories: &[TodoCategory]) {
        self.move_selection(categories, isize::MAX / 2);
    }

    /// Point the category cursor at `category_id`, if it exists.
    pub(crate) fn focus_category(&mut self, categories: &[TodoCategory], category_id: &str) {
        if let Some(idx) = categories.iter().position(|cat| cat.id == category_id) {
            if idx != self.category {
                self.item = 0;
            }
            self.category = idx;
        }
    }

    /// Point the item cursor at `item_id` within the current category.
    pub(crate) fn focus_item(&mut self, categories: &[TodoCategory], item_id: &str) {
        if let Some(category) = self.current_category(categories) {
            if let Some(idx) = category.items.iter().position(|item| item.id == item_id) {
                self.item = idx;
            }
        }
    }

    /// Pull both cursors back inside the current bounds.
    pub(crate) fn ensure_in_bounds(&mut self, categories: &[TodoCategory]) {
        if categories.is_empty() {
            self.category = 0;
            self.item = 0;
            self.focus = Pane::Categories;
            return;
        }
        if self.category >= categories.len() {
            self.category = categories.len() - 1;
        }
        let items = categories[self.category].items.len();
        if items == 0 {
            self.item = 0;
        } else if self.item >= items {
            self.item = items - 1;
        }
    }
}

fn offset_index(current: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len as isize - 1;
    (current as isize).saturating_add(offset).clamp(0, max) as usize
}

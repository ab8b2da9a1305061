use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::commands::{
    add_category, add_item, confirm_delete_category, delete_item, toggle_item, update_category,
    update_item, CommandError,
};
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;

use super::forms::{ConfirmDelete, TitleForm, TitleTarget};
use super::helpers::{centered_rect, progress_label, surface_error};
use super::screens::{Pane, TodoScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Share of the todo screen width given to the category list.
const CATEGORY_PANE_PERCENT: u16 = 35;

/// Navigation destinations. `Home` is the landing view; `Todo` holds the
/// category and item lists.
enum Screen {
    Home,
    Todo(TodoScreen),
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    Editing {
        target: TitleTarget,
        form: TitleForm,
    },
    ConfirmDelete(ConfirmDelete),
    /// Blocking notice; any key dismisses it and restores `resume`.
    Notice {
        message: String,
        resume: Box<Mode>,
    },
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. Owns the store; every
/// change goes through the command layer.
pub struct App<S: KeyValueStorage> {
    store: TodoStore<S>,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl<S: KeyValueStorage> App<S> {
    pub fn new(store: TodoStore<S>) -> Self {
        Self {
            store,
            screen: Screen::Home,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    /// Feed one key press through the current mode. Returns `true` when the
    /// user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Editing { target, form } => self.handle_editing(code, target, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::Notice { resume, .. } => *resume,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let screen = match &mut self.screen {
            Screen::Home => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                    KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('T') => {
                        self.clear_status();
                        self.open_todo();
                    }
                    _ => {}
                }
                return Ok(Mode::Normal);
            }
            Screen::Todo(screen) => screen,
        };

        let categories = self.store.categories();
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                self.screen = Screen::Home;
                self.clear_status();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                if categories.is_empty() {
                    self.set_status("Add a category first.", StatusKind::Error);
                } else {
                    screen.toggle_focus();
                }
            }
            KeyCode::Up => screen.move_selection(categories, -1),
            KeyCode::Down => screen.move_selection(categories, 1),
            KeyCode::PageUp => screen.move_selection(categories, -5),
            KeyCode::PageDown => screen.move_selection(categories, 5),
            KeyCode::Home => screen.select_first(categories),
            KeyCode::End => screen.select_last(categories),
            KeyCode::Enter if screen.focus == Pane::Categories => {
                if screen.current_category(categories).is_some() {
                    screen.focus = Pane::Items;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if screen.focus == Pane::Items => {
                let target = screen
                    .current_category(categories)
                    .zip(screen.current_item(categories))
                    .map(|(cat, item)| (cat.id.clone(), item.id.clone()));
                if let Some((category_id, item_id)) = target {
                    if let Err(err) = toggle_item(&mut self.store, &category_id, &item_id) {
                        self.report_failure(err);
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('A') => {
                let target = match screen.focus {
                    Pane::Categories => Some(TitleTarget::NewCategory),
                    Pane::Items => screen
                        .current_category(categories)
                        .map(|cat| TitleTarget::NewItem {
                            category_id: cat.id.clone(),
                        }),
                };
                if let Some(target) = target {
                    self.clear_status();
                    return Ok(Mode::Editing {
                        target,
                        form: TitleForm::default(),
                    });
                }
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                let edit = match screen.focus {
                    Pane::Categories => screen.current_category(categories).map(|cat| {
                        (
                            TitleTarget::RenameCategory {
                                category_id: cat.id.clone(),
                            },
                            TitleForm::with_title(&cat.title),
                        )
                    }),
                    Pane::Items => screen
                        .current_category(categories)
                        .zip(screen.current_item(categories))
                        .map(|(cat, item)| {
                            (
                                TitleTarget::RenameItem {
                                    category_id: cat.id.clone(),
                                    item_id: item.id.clone(),
                                },
                                TitleForm::with_title(&item.title),
                            )
                        }),
                };
                match edit {
                    Some((target, form)) => {
                        self.clear_status();
                        return Ok(Mode::Editing { target, form });
                    }
                    None => self.set_status("Nothing selected to edit.", StatusKind::Error),
                }
            }
            KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                let confirm = match screen.focus {
                    Pane::Categories => screen
                        .current_category(categories)
                        .map(ConfirmDelete::category),
                    Pane::Items => screen
                        .current_category(categories)
                        .zip(screen.current_item(categories))
                        .map(|(cat, item)| ConfirmDelete::item(&cat.id, item)),
                };
                match confirm {
                    Some(confirm) => {
                        self.clear_status();
                        return Ok(Mode::ConfirmDelete(confirm));
                    }
                    None => self.set_status("Nothing selected to delete.", StatusKind::Error),
                }
            }
            _ => {}
        }

        Ok(Mode::Normal)
    }

    fn handle_editing(
        &mut self,
        code: KeyCode,
        target: TitleTarget,
        mut form: TitleForm,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.submit_title(&target, &form.title) {
                Ok(()) => return Ok(Mode::Normal),
                Err(err) if err.is_validation() => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    return Ok(Mode::Notice {
                        message,
                        resume: Box::new(Mode::Editing { target, form }),
                    });
                }
                Err(err) => {
                    // The change is already in memory; only the write failed.
                    self.report_failure(err);
                    self.clamp_selection();
                    return Ok(Mode::Normal);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        Ok(Mode::Editing { target, form })
    }

    /// Run the command behind a submitted title form and move the cursor to
    /// whatever it touched.
    fn submit_title(&mut self, target: &TitleTarget, title: &str) -> Result<(), CommandError> {
        match target {
            TitleTarget::NewCategory => {
                let id = add_category(&mut self.store, title)?;
                if let Screen::Todo(screen) = &mut self.screen {
                    screen.focus_category(self.store.categories(), &id);
                }
                self.set_status("Category added.", StatusKind::Info);
            }
            TitleTarget::RenameCategory { category_id } => {
                update_category(&mut self.store, category_id, title)?;
                self.set_status("Category updated.", StatusKind::Info);
            }
            TitleTarget::NewItem { category_id } => {
                match add_item(&mut self.store, category_id, title)? {
                    Some(id) => {
                        if let Screen::Todo(screen) = &mut self.screen {
                            screen.focus_category(self.store.categories(), category_id);
                            screen.focus_item(self.store.categories(), &id);
                        }
                        self.set_status("Item added.", StatusKind::Info);
                    }
                    None => self.set_status("That category no longer exists.", StatusKind::Error),
                }
            }
            TitleTarget::RenameItem {
                category_id,
                item_id,
            } => {
                update_item(&mut self.store, category_id, item_id, title)?;
                self.set_status("Item updated.", StatusKind::Info);
            }
        }
        Ok(())
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Result<Mode> {
        let answer = match code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => false,
            _ => return Ok(Mode::ConfirmDelete(confirm)),
        };
        let mut gate = |_: &str| answer;

        let outcome = match &confirm {
            ConfirmDelete::Category { category_id, .. } => {
                confirm_delete_category(&mut self.store, category_id, &mut gate)
            }
            ConfirmDelete::Item {
                category_id,
                item_id,
                ..
            } => delete_item(&mut self.store, category_id, item_id, &mut gate),
        };

        match outcome {
            Ok(true) => {
                self.clamp_selection();
                let message = match confirm {
                    ConfirmDelete::Category { .. } => "Category deleted.",
                    ConfirmDelete::Item { .. } => "Item deleted.",
                };
                self.set_status(message, StatusKind::Info);
                Ok(Mode::Normal)
            }
            Ok(false) => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            Err(err) => {
                self.report_failure(err);
                self.clamp_selection();
                Ok(Mode::Normal)
            }
        }
    }

    fn report_failure(&mut self, err: CommandError) {
        log::error!("event=command_failed error={err}");
        let message = surface_error(&anyhow::Error::from(err));
        self.set_status(message, StatusKind::Error);
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Home => self.draw_home(frame, content_area),
            Screen::Todo(screen) => self.draw_todo(frame, content_area, screen),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        self.draw_mode(frame, area, &self.mode);
    }

    fn draw_mode(&self, frame: &mut Frame, area: Rect, mode: &Mode) {
        match mode {
            Mode::Normal => {}
            Mode::Editing { target, form } => self.draw_title_form(frame, area, target, form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Notice { message, resume } => {
                self.draw_mode(frame, area, resume);
                self.draw_notice(frame, area, message);
            }
        }
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let categories = self.store.categories();
        let total: usize = categories.iter().map(|cat| cat.items.len()).sum();
        let done: usize = categories.iter().map(|cat| cat.completed_count()).sum();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Todo List",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "{} categories  •  {} of {} items done",
                categories.len(),
                done,
                total
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to open your lists.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn draw_todo(&self, frame: &mut Frame, area: Rect, screen: &TodoScreen) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(CATEGORY_PANE_PERCENT),
                Constraint::Percentage(100 - CATEGORY_PANE_PERCENT),
            ])
            .split(area);

        let categories = self.store.categories();
        let pane_block = |title: String, focused: bool| {
            let block = Block::default().borders(Borders::ALL).title(title);
            if focused {
                block.border_style(Style::default().fg(Color::Yellow))
            } else {
                block
            }
        };

        let category_block = pane_block("Categories".to_string(), screen.focus == Pane::Categories);
        if categories.is_empty() {
            let message = Paragraph::new("No categories yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(category_block);
            frame.render_widget(message, chunks[0]);
        } else {
            let rows: Vec<ListItem> = categories
                .iter()
                .map(|cat| {
                    ListItem::new(Line::from(vec![
                        Span::raw(cat.title.clone()),
                        Span::styled(
                            format!("  {}", progress_label(cat.completed_count(), cat.items.len())),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();
            let list = List::new(rows)
                .block(category_block)
                .highlight_style(Style::default().fg(Color::Yellow))
                .highlight_symbol("▶ ");
            let mut state = ListState::default();
            state.select(Some(screen.category));
            frame.render_stateful_widget(list, chunks[0], &mut state);
        }

        let Some(category) = screen.current_category(categories) else {
            frame.render_widget(pane_block("Items".to_string(), false), chunks[1]);
            return;
        };

        let item_block = pane_block(category.title.clone(), screen.focus == Pane::Items);
        if category.items.is_empty() {
            let message = Paragraph::new("No items yet. Press Tab, then '+' to add one.")
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(item_block);
            frame.render_widget(message, chunks[1]);
            return;
        }

        let rows: Vec<ListItem> = category
            .items
            .iter()
            .map(|item| {
                let style = if item.completed {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                ListItem::new(Span::styled(item.to_string(), style))
            })
            .collect();
        let list = List::new(rows)
            .block(item_block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");
        let mut state = ListState::default();
        if screen.focus == Pane::Items {
            state.select(Some(screen.item));
        }
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::Editing { .. }) => &[("[Enter]", " Save   "), ("[Esc]", " Cancel")],
            (_, Mode::ConfirmDelete(_)) => &[("[y]", " Delete   "), ("[n]", " Keep")],
            (_, Mode::Notice { .. }) => &[("[any key]", " Dismiss")],
            (Screen::Home, _) => &[("[Enter]", " Open Lists   "), ("[q]", " Quit")],
            (Screen::Todo(screen), _) if screen.focus == Pane::Items => &[
                ("[↑↓]", " Select   "),
                ("[Space]", " Toggle   "),
                ("[+]", " Add   "),
                ("[e]", " Edit   "),
                ("[-]", " Delete   "),
                ("[Tab]", " Categories   "),
                ("[Esc]", " Home   "),
                ("[q]", " Quit"),
            ],
            (Screen::Todo(_), _) => &[
                ("[↑↓]", " Select   "),
                ("[Enter]", " Open   "),
                ("[+]", " Add   "),
                ("[e]", " Edit   "),
                ("[-]", " Delete   "),
                ("[Tab]", " Items   "),
                ("[Esc]", " Home   "),
                ("[q]", " Quit"),
            ],
        };

        Line::from(
            keys.iter()
                .flat_map(|(key, label)| [Span::styled(*key, key_style), Span::raw(*label)])
                .collect::<Vec<_>>(),
        )
    }

    fn draw_title_form(&self, frame: &mut Frame, area: Rect, target: &TitleTarget, form: &TitleForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(target.heading())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let prefix = "Title: ".len() as u16;
        let typed = u16::try_from(form.value_len()).unwrap_or(u16::MAX);
        let cursor_x = inner
            .x
            .saturating_add(prefix)
            .saturating_add(typed)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Delete")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(confirm.prompt()),
            Line::from(confirm.detail()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, message: &str) {
        let popup_area = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Notice")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let lines = vec![
            Line::from(message.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue.",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn clamp_selection(&mut self) {
        if let Screen::Todo(screen) = &mut self.screen {
            screen.ensure_in_bounds(self.store.categories());
        }
    }

    fn open_todo(&mut self) {
        let mut screen = TodoScreen::new();
        screen.ensure_in_bounds(self.store.categories());
        self.screen = Screen::Todo(screen);
    }

    fn set_status<T: Into<String>>(&mut self, text: T, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError, StorageResult};

    /// Backend whose writes always fail.
    struct ReadOnlyDisk;

    impl KeyValueStorage for ReadOnlyDisk {
        fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }

        fn remove_item(&mut self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    fn app() -> App<MemoryStorage> {
        App::new(TodoStore::new(MemoryStorage::new()))
    }

    fn press(app: &mut App<MemoryStorage>, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).unwrap();
        }
    }

    fn type_text(app: &mut App<MemoryStorage>, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
    }

    #[test]
    fn quit_from_home() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn add_category_and_item_through_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('+')]);
        type_text(&mut app, "  Groceries ");
        press(&mut app, &[KeyCode::Enter, KeyCode::Tab, KeyCode::Char('+')]);
        type_text(&mut app, "Milk");
        press(&mut app, &[KeyCode::Enter, KeyCode::Char(' ')]);

        let categories = app.store().categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Groceries");
        assert_eq!(categories[0].items.len(), 1);
        assert!(categories[0].items[0].completed);
    }

    #[test]
    fn duplicate_title_shows_notice_and_keeps_form() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('+')]);
        type_text(&mut app, "Work");
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('+')]);
        type_text(&mut app, "work");
        press(&mut app, &[KeyCode::Enter]);

        assert!(matches!(app.mode, Mode::Notice { .. }));
        press(&mut app, &[KeyCode::Char('x')]);
        match &app.mode {
            Mode::Editing { form, .. } => {
                assert_eq!(form.title, "work");
                assert_eq!(form.error.as_deref(), Some("Category already exists"));
            }
            _ => panic!("expected the form to be restored"),
        }
        assert_eq!(app.store().categories().len(), 1);
    }

    #[test]
    fn declining_delete_keeps_category() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('+')]);
        type_text(&mut app, "Work");
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('-'), KeyCode::Char('n')]);
        assert_eq!(app.store().categories().len(), 1);

        press(&mut app, &[KeyCode::Char('-'), KeyCode::Char('y')]);
        assert!(app.store().categories().is_empty());
    }

    #[test]
    fn failed_write_closes_form_and_reports_in_status() {
        let mut app = App::new(TodoStore::new(ReadOnlyDisk));
        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_key(KeyCode::Char('+')).unwrap();
        for ch in "Work".chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        let status = app.status.as_ref().expect("write failure should be reported");
        assert!(matches!(status.kind, StatusKind::Error));
        assert!(status.text.contains("disk full"));
        assert_eq!(app.store().categories().len(), 1);
    }

    #[test]
    fn failed_delete_write_keeps_selection_in_bounds() {
        let mut app = App::new(TodoStore::new(ReadOnlyDisk));
        app.handle_key(KeyCode::Enter).unwrap();
        for title in ["Work", "Home"] {
            app.handle_key(KeyCode::Char('+')).unwrap();
            for ch in title.chars() {
                app.handle_key(KeyCode::Char(ch)).unwrap();
            }
            app.handle_key(KeyCode::Enter).unwrap();
        }
        app.handle_key(KeyCode::End).unwrap();
        app.handle_key(KeyCode::Char('-')).unwrap();
        app.handle_key(KeyCode::Char('y')).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.store().categories().len(), 1);
        match &app.screen {
            Screen::Todo(screen) => assert_eq!(screen.category, 0),
            Screen::Home => panic!("expected to stay on the todo screen"),
        }
    }

    #[test]
    fn long_title_keeps_cursor_inside_the_form() {
        use ratatui::backend::TestBackend;

        let mut app = App::new(TodoStore::new(MemoryStorage::new()));
        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_key(KeyCode::Char('+')).unwrap();
        for _ in 0..200 {
            app.handle_key(KeyCode::Char('x')).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 40);
    }
}

use std::mem;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::session::{Session, SessionState};

use super::forms::NameForm;
use super::helpers::{art_height, centered_rect, surface_error, WELCOME_ART};
use super::screens::{MenuItem, StatsScreen, SummaryScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows taken by the welcome line and store status above the menu.
const MENU_HEADER_HEIGHT: u16 = 4;
/// Rows needed to show every menu entry inside its border.
const MENU_LIST_HEIGHT: u16 = MenuItem::ALL.len() as u16 + 2;
/// Rows moved by PageUp/PageDown in the summary listing.
const PAGE_STEP: isize = 10;

/// High-level navigation states.
enum Screen {
    Menu,
    Summary(SummaryScreen),
    Stats(StatsScreen),
}

/// Popups layered on top of the current screen.
enum Mode {
    Normal,
    NamingStore(NameForm),
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

/// Central application state shared across the TUI.
pub struct App {
    session: Session,
    books_path: PathBuf,
    menu_selected: usize,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(session: Session, books_path: PathBuf) -> Self {
        Self {
            session,
            books_path,
            menu_selected: 0,
            screen: Screen::Menu,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Feed one key press through the current mode. Returns `true` once the
    /// user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::NamingStore(form) => self.handle_name_form(code, form)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match &mut self.screen {
            Screen::Menu => match code {
                KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                KeyCode::Up => self.move_menu(-1),
                KeyCode::Down => self.move_menu(1),
                KeyCode::Enter => {
                    let item = MenuItem::ALL[self.menu_selected];
                    return self.activate(item, exit);
                }
                KeyCode::Char(ch) => {
                    if let Some(item) = MenuItem::from_key(ch) {
                        self.menu_selected = item as usize;
                        return self.activate(item, exit);
                    }
                    self.set_status("This option doesn't exist.", StatusKind::Error);
                }
                _ => {}
            },
            Screen::Summary(summary) => match code {
                KeyCode::Char('q') => *exit = true,
                KeyCode::Esc | KeyCode::Backspace => self.back_to_menu(),
                KeyCode::Up => summary.move_selection(-1),
                KeyCode::Down => summary.move_selection(1),
                KeyCode::PageUp => summary.move_selection(-PAGE_STEP),
                KeyCode::PageDown => summary.move_selection(PAGE_STEP),
                KeyCode::Home => summary.select_first(),
                KeyCode::End => summary.select_last(),
                _ => {}
            },
            Screen::Stats(_) => match code {
                KeyCode::Char('q') => *exit = true,
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => self.back_to_menu(),
                _ => {}
            },
        }
        Ok(Mode::Normal)
    }

    fn activate(&mut self, item: MenuItem, exit: &mut bool) -> Result<Mode> {
        debug!(?item, "menu action");
        self.clear_status();
        match item {
            MenuItem::NameStore => {
                let form = self
                    .session
                    .store()
                    .map(|store| NameForm::with_name(store.name()))
                    .unwrap_or_default();
                return Ok(Mode::NamingStore(form));
            }
            MenuItem::LoadBooks => self.load_books(),
            MenuItem::Summary => self.open_summary(),
            MenuItem::Statistics => self.open_stats(),
            MenuItem::Quit => *exit = true,
        }
        Ok(Mode::Normal)
    }

    fn handle_name_form(&mut self, code: KeyCode, mut form: NameForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Naming cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_input() {
                Ok(name) => {
                    self.save_store_name(name);
                    return Ok(Mode::Normal);
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::NamingStore(form))
    }

    fn save_store_name(&mut self, name: String) {
        let renamed = self.session.state() == SessionState::Loaded;
        let store = self.session.name_store(name);
        let mut message = format!("The name of the bookstore was set to '{}'.", store.name());
        if renamed {
            message.push_str(" Previously loaded books were cleared.");
        }
        self.set_status(message, StatusKind::Info);
    }

    fn load_books(&mut self) {
        match self.session.load(&self.books_path) {
            Ok(count) => {
                let message = format!(
                    "Success! Read {count} books from {}.",
                    self.books_path.display()
                );
                self.set_status(message, StatusKind::Info);
            }
            Err(err) => {
                let message = surface_error(&anyhow::Error::new(err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    fn open_summary(&mut self) {
        match self.session.store() {
            Some(store) => {
                let summary = SummaryScreen::new(store, self.session.is_loaded());
                self.screen = Screen::Summary(summary);
            }
            None => self.set_status(
                "You haven't set the name of the book store yet. Use option 1 to set the name.",
                StatusKind::Error,
            ),
        }
    }

    fn open_stats(&mut self) {
        match self.session.stats() {
            Ok(stats) => {
                let name = self
                    .session
                    .store()
                    .map(|store| store.name().to_string())
                    .unwrap_or_default();
                self.screen = Screen::Stats(StatsScreen::new(&name, stats));
            }
            Err(err) => {
                let message = surface_error(&anyhow::Error::new(err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.clear_status();
    }

    fn move_menu(&mut self, offset: isize) {
        let last = MenuItem::ALL.len() as isize - 1;
        self.menu_selected = (self.menu_selected as isize + offset).clamp(0, last) as usize;
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
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
            Screen::Menu => self.draw_menu(frame, content_area),
            Screen::Summary(summary) => self.draw_summary(frame, content_area, summary),
            Screen::Stats(stats) => self.draw_stats(frame, content_area, stats),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        if let Mode::NamingStore(form) = &self.mode {
            self.draw_name_form(frame, area, form);
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let art_rows = art_height(WELCOME_ART);
        let show_art = area.height >= art_rows + MENU_HEADER_HEIGHT + MENU_LIST_HEIGHT;
        let constraints = if show_art {
            vec![
                Constraint::Length(art_rows),
                Constraint::Length(MENU_HEADER_HEIGHT),
                Constraint::Min(MENU_LIST_HEIGHT),
            ]
        } else {
            vec![
                Constraint::Length(0),
                Constraint::Length(MENU_HEADER_HEIGHT),
                Constraint::Min(0),
            ]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        if show_art {
            let art = Paragraph::new(WELCOME_ART).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(art, chunks[0]);
        }

        let store_line = match (self.session.store(), self.session.state()) {
            (None, _) => Line::from(Span::styled(
                "No book store named yet.",
                Style::default().fg(Color::DarkGray),
            )),
            (Some(store), SessionState::Loaded) => Line::from(vec![
                Span::styled(
                    store.name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  •  {} books loaded", store.len())),
            ]),
            (Some(store), _) => Line::from(vec![
                Span::styled(
                    store.name().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  •  no books loaded"),
            ]),
        };
        let header = Paragraph::new(vec![
            Line::from("Welcome to the book store window manager."),
            store_line,
        ])
        .block(Block::default().borders(Borders::ALL).title("Book Store"));
        frame.render_widget(header, chunks[1]);

        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(idx, item)| ListItem::new(format!("{}. {}", idx + 1, item.label())))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose one of the options below"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.menu_selected));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    fn draw_summary(&self, frame: &mut Frame, area: Rect, summary: &SummaryScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let count_text = if summary.loaded {
            format!("{} books", summary.books.len())
        } else {
            "not loaded".to_string()
        };
        let header = Paragraph::new(Line::from(vec![
            Span::raw("Book shop name: "),
            Span::styled(
                summary.store_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  •  {count_text}")),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(header, chunks[0]);

        if !summary.loaded || summary.books.is_empty() {
            let text = if summary.loaded {
                "The book file contained no books."
            } else {
                "There is no information on books yet. Use option 2 to read in the file."
            };
            let message = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = summary
            .books
            .iter()
            .map(|book| ListItem::new(book.to_string()))
            .collect();
        let title = summary
            .current_book()
            .map(|book| format!("Books ({} of {}: {})", summary.selected + 1, summary.books.len(), book.id()))
            .unwrap_or_else(|| "Books".to_string());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().fg(Color::Yellow));
        let mut state = ListState::default().with_selected(Some(summary.selected));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    fn draw_stats(&self, frame: &mut Frame, area: Rect, stats: &StatsScreen) {
        let lines: Vec<Line> = stats
            .report_lines()
            .into_iter()
            .map(Line::from)
            .collect();
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Statistics • {}", stats.store_name)),
            );
        frame.render_widget(paragraph, area);
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
        match (&self.screen, &self.mode) {
            (_, Mode::NamingStore(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Menu, _) => Line::from(vec![
                Span::styled("[1-5]", key_style),
                Span::raw(" Choose   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Select   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Summary(_), _) => Line::from(vec![
                Span::styled("[↑↓/PgUp/PgDn]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Stats(_), _) => Line::from(vec![
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_name_form(&self, frame: &mut Frame, area: Rect, form: &NameForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Name the Book Store")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if self.session.is_loaded() {
            lines.push(Line::from(Span::styled(
                "Renaming starts a new store; loaded books will be cleared.",
                Style::default().fg(Color::Gray),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        frame.set_cursor_position((form.cursor_x(inner), inner.y));
    }
}

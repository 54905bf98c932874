//! Interactive review session: page navigation, document upload and the review queue.
//!
//! The screen borrows the caller's [`UploadQueue`] for its whole lifetime and
//! mutates it only through the session page handlers.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    constants::UI_NAME_TRUNCATE_LEN,
    session::{
        pages::{self, QUICK_START, VERSION},
        Page, UploadLimits, UploadQueue, UploadRecord,
    },
    tui::{
        event::TuiEvent,
        widgets::{ActionMenu, ActionMenuResult, MenuItem, SelectAction, SelectList, TextInput},
        AppResult, TuiApp,
    },
    ui::{format_bytes, pad_to_width, truncate},
};

/// Entries of the per-document popup, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueAction {
    Process,
    Remove,
    Cancel,
}

const QUEUE_ACTIONS: [QueueAction; 3] = [QueueAction::Process, QueueAction::Remove, QueueAction::Cancel];

/// Which pane receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Navigation,
    Content,
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Screen state.
enum ScreenState {
    Browsing,
    /// Action popup for the queued document at `index`.
    ShowingPopup { index: usize, menu: ActionMenu },
}

/// The four-page session shell.
pub struct SessionScreen<'q> {
    queue: &'q mut UploadQueue,
    limits: UploadLimits,
    page: Page,
    focus: Focus,
    navigation: SelectList,
    path_input: TextInput,
    queue_list: SelectList,
    status: Option<(StatusKind, String)>,
    state: ScreenState,
}

impl<'q> SessionScreen<'q> {
    pub fn new(queue: &'q mut UploadQueue) -> Self {
        let mut screen = Self {
            queue,
            limits: UploadLimits::default(),
            page: Page::default(),
            focus: Focus::Navigation,
            navigation: SelectList::new(Page::ALL.iter().map(|p| p.label()).collect())
                .with_title("Navigation"),
            path_input: TextInput::new("Document path")
                .with_placeholder("Enter a .pdf, .docx or .doc file and press Enter"),
            queue_list: SelectList::default()
                .with_title("Documents")
                .with_empty_message("No documents in queue. Upload documents to get started."),
            status: None,
            state: ScreenState::Browsing,
        };
        screen.refresh_queue();
        screen
    }

    /// Replaces the default upload limits.
    pub const fn with_limits(mut self, limits: UploadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Current page.
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Number of queued documents.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Last status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(_, text)| text.as_str())
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some((kind, text.into()));
    }

    fn refresh_queue(&mut self) {
        let rows: Vec<String> = self.queue.iter().map(queue_row).collect();
        self.queue_list.set_items(rows);
    }

    fn open_page(&mut self, page: Page) {
        self.page = page;
        self.navigation.select(page.index());
    }

    fn submit_upload(&mut self) {
        let raw = self.path_input.content().trim();
        if raw.is_empty() {
            return;
        }
        let path = PathBuf::from(unquote(raw));
        match pages::upload(self.queue, &path, &self.limits) {
            Ok(record) => {
                let message = format!(
                    "Added {} to review queue ({}, {})",
                    record.name,
                    format_bytes(record.size),
                    record.mime_type
                );
                self.path_input.take();
                self.refresh_queue();
                self.set_status(StatusKind::Success, message);
            }
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn open_popup(&mut self) {
        let Some(index) = self.queue_list.selected_index() else {
            return;
        };
        let Ok(record) = self.queue.get(index) else {
            return;
        };
        let items = vec![
            MenuItem::new("Process", "run review"),
            MenuItem::new("Remove", "drop from queue").colored(Color::Red),
            MenuItem::new("Cancel", "ESC"),
        ];
        let menu = ActionMenu::new(truncate(&record.name, UI_NAME_TRUNCATE_LEN), items);
        self.state = ScreenState::ShowingPopup { index, menu };
    }

    fn run_action(&mut self, action: QueueAction, index: usize) {
        match action {
            QueueAction::Process => match pages::process(self.queue, index) {
                Ok(outcome) => self.set_status(StatusKind::Info, outcome.message()),
                Err(err) => self.set_status(StatusKind::Error, err.to_string()),
            },
            QueueAction::Remove => match pages::remove(self.queue, index) {
                Ok(record) => {
                    self.refresh_queue();
                    self.set_status(StatusKind::Success, format!("Removed {}", record.name));
                }
                Err(err) => self.set_status(StatusKind::Error, err.to_string()),
            },
            QueueAction::Cancel => {}
        }
    }

    fn handle_navigation(&mut self, key: KeyEvent) -> Option<AppResult<()>> {
        match key.code {
            KeyCode::Char('q') => return Some(AppResult::Done(())),
            KeyCode::Tab | KeyCode::Right => {
                self.focus = Focus::Content;
                return None;
            }
            _ => {}
        }
        match self.navigation.handle_key(key) {
            SelectAction::Confirm => self.focus = Focus::Content,
            SelectAction::Cancel => return Some(AppResult::Done(())),
            SelectAction::None => {}
        }
        if let Some(page) = self.navigation.selected_index().and_then(|i| Page::ALL.get(i)) {
            self.page = *page;
        }
        None
    }

    fn handle_content(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::BackTab) {
            self.focus = Focus::Navigation;
            return;
        }
        match self.page {
            Page::Upload => {
                if key.code == KeyCode::Enter {
                    self.submit_upload();
                } else {
                    self.path_input.handle_key(key);
                }
            }
            Page::Queue => match key.code {
                KeyCode::Delete | KeyCode::Char('d') => {
                    if let Some(index) = self.queue_list.selected_index() {
                        self.run_action(QueueAction::Remove, index);
                    }
                }
                KeyCode::Char('p') => {
                    if let Some(index) = self.queue_list.selected_index() {
                        self.run_action(QueueAction::Process, index);
                    }
                }
                _ => {
                    if self.queue_list.handle_key(key) == SelectAction::Confirm {
                        self.open_popup();
                    }
                }
            },
            Page::Home | Page::Settings => {
                if key.code == KeyCode::Tab {
                    self.focus = Focus::Navigation;
                }
            }
        }
    }

    fn handle_popup(&mut self, key: KeyEvent) {
        let ScreenState::ShowingPopup { index, menu } = &mut self.state else {
            return;
        };
        let index = *index;
        match menu.handle_key(key) {
            Some(ActionMenuResult::Selected(i)) => {
                self.state = ScreenState::Browsing;
                if let Some(action) = QUEUE_ACTIONS.get(i) {
                    self.run_action(*action, index);
                }
            }
            Some(ActionMenuResult::Cancelled) => self.state = ScreenState::Browsing,
            None => {}
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        let summary = pages::home(self.queue);
        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(Span::styled(
                "Welcome to the review desk",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("System Status       ", label),
                Span::styled(summary.status, Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::styled("Documents Uploaded  ", label),
                Span::raw(summary.documents.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Version             ", label),
                Span::raw(summary.version),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Quick Start",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(
            QUICK_START
                .iter()
                .enumerate()
                .map(|(i, step)| Line::from(format!("{}. {step}", i + 1))),
        );
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(self.content_block(Page::Home)),
            area,
        );
    }

    fn render_upload(&self, frame: &mut Frame, area: Rect) {
        let block = self.content_block(Page::Upload);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [input_area, help_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);
        self.path_input
            .render(input_area, frame.buffer_mut(), self.focus == Focus::Content);

        let help = Paragraph::new(vec![
            Line::from("Upload PDF or Word documents for review."),
            Line::from(format!(
                "Up to {} MB per document, {} documents per session.",
                self.limits.max_file_size_mb, self.limits.max_documents
            )),
            Line::from(Span::styled(
                "Documents are kept in memory for this session only.",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(help, help_area);
    }

    fn render_queue(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!("{} Document(s) in Queue", self.queue.len());
        let [list_area, detail_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(5)]).areas(area);

        let focused = self.focus == Focus::Content;
        let mut list = std::mem::take(&mut self.queue_list);
        list = list.with_title(title);
        list.render(list_area, frame.buffer_mut(), focused);
        self.queue_list = list;

        let detail: Vec<Line> = self
            .queue_list
            .selected_index()
            .and_then(|i| self.queue.get(i).ok())
            .map(record_detail)
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(detail).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Details "),
            ),
            detail_area,
        );
    }

    fn render_settings(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = pages::settings(&self.limits)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(pad_to_width(label, 10), Style::default().fg(Color::DarkGray)),
                    Span::raw(value),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(self.content_block(Page::Settings)),
            area,
        );
    }

    fn content_block(&self, page: Page) -> Block<'static> {
        let color = if self.focus == Focus::Content {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", page.label()))
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some((kind, text)) = &self.status {
            let status = Paragraph::new(Span::styled(text.as_str(), Style::default().fg(kind.color())));
            frame.render_widget(status, inner);
            return;
        }

        let keys: &[(&str, &str)] = match (self.focus, self.page) {
            (Focus::Navigation, _) => &[("↑↓", "Page"), ("Enter", "Open"), ("q", "Quit")],
            (Focus::Content, Page::Upload) => &[("Enter", "Add to queue"), ("Esc", "Back")],
            (Focus::Content, Page::Queue) => &[
                ("Enter", "Actions"),
                ("p", "Process"),
                ("d", "Remove"),
                ("Esc", "Back"),
            ],
            (Focus::Content, _) => &[("Esc", "Back")],
        };
        let spans: Vec<Span> = keys
            .iter()
            .flat_map(|(key, text)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Cyan)),
                    Span::raw(format!(" {text}  ")),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}

impl TuiApp for SessionScreen<'_> {
    type Output = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Some(AppResult::Cancelled);
                }
                self.status = None;
                if matches!(self.state, ScreenState::ShowingPopup { .. }) {
                    self.handle_popup(*key);
                    return None;
                }
                match self.focus {
                    Focus::Navigation => self.handle_navigation(*key),
                    Focus::Content => {
                        self.handle_content(*key);
                        None
                    }
                }
            }
            TuiEvent::Paste(text) => {
                if self.page != Page::Upload {
                    self.open_page(Page::Upload);
                }
                self.focus = Focus::Content;
                self.path_input.insert_text(text);
                None
            }
            TuiEvent::Resize(..) | TuiEvent::Tick => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header, body, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let title = Paragraph::new(Line::from(vec![
            Span::styled("reviewdesk", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" v{VERSION}"), Style::default().fg(Color::DarkGray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(title, header);

        let [nav, content] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(20)]).areas(body);
        self.navigation
            .render(nav, frame.buffer_mut(), self.focus == Focus::Navigation);

        match self.page {
            Page::Home => self.render_home(frame, content),
            Page::Upload => self.render_upload(frame, content),
            Page::Queue => self.render_queue(frame, content),
            Page::Settings => self.render_settings(frame, content),
        }

        self.render_help(frame, help);

        if let ScreenState::ShowingPopup { menu, .. } = &self.state {
            menu.render(frame.area(), frame.buffer_mut());
        }
    }
}

/// One list row: name, size and type.
fn queue_row(record: &UploadRecord) -> String {
    format!(
        "{}  {:>14}  {}",
        pad_to_width(&truncate(&record.name, UI_NAME_TRUNCATE_LEN), UI_NAME_TRUNCATE_LEN),
        format_bytes(record.size),
        record.mime_type
    )
}

fn record_detail(record: &UploadRecord) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(vec![Span::styled("Name      ", label), Span::raw(record.name.clone())]),
        Line::from(vec![Span::styled("Size      ", label), Span::raw(format_bytes(record.size))]),
        Line::from(vec![Span::styled("Uploaded  ", label), Span::raw(record.uploaded_at_display())]),
    ]
}

/// Strips the quotes terminals add around dropped or pasted paths.
fn unquote(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && matches!(bytes[0], b'"' | b'\'') && bytes[0] == bytes[bytes.len() - 1] {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// Runs the session shell against the caller's queue until the user quits.
pub fn run_session(queue: &mut UploadQueue, limits: UploadLimits) -> anyhow::Result<()> {
    crate::tui::run(SessionScreen::new(queue).with_limits(limits))?;
    Ok(())
}

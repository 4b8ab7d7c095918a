//! Browse TUI application
//!
//! Shows a story row in the terminal and hosts the player overlay on top of
//! it. The terminal plays the part of the host page: it owns the
//! `MemoryDocument`, turns key presses into document input and redraws
//! whatever the SDK rendered.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use super::ui;
use crate::document::{ContainerId, MemoryDocument, RowView};
use crate::player::input::key_from_crossterm;

/// Footer hints while browsing the row.
const ROW_FOOTER: &str = "←/→: select | Enter: open | q: quit";
/// Footer hints while the player is open.
const PLAYER_FOOTER: &str = "←/→: page | Esc: close | q: quit";

/// Terminal host for one story row.
pub struct BrowseApp {
    document: Arc<MemoryDocument>,
    container: ContainerId,
    selected: usize,
    /// Quit once no player is shown (used by `open`)
    quit_on_close: bool,
    should_quit: bool,
}

impl BrowseApp {
    /// Browse the row rendered into `container`.
    pub fn new(document: Arc<MemoryDocument>, container: ContainerId) -> Self {
        Self {
            document,
            container,
            selected: 0,
            quit_on_close: false,
            should_quit: false,
        }
    }

    /// Host only the player; the app exits when the player closes.
    pub fn player_only(document: Arc<MemoryDocument>) -> Self {
        Self {
            quit_on_close: true,
            ..Self::new(document, ContainerId::new("ministories-row"))
        }
    }

    /// Index of the selected card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the app wants to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit || (self.quit_on_close && self.document.player().is_none())
    }

    /// Run the application until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    #[cfg(not(tarpaulin_include))]
    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit() {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
            // Let spawned opens and analytics make progress between frames.
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Handle one key press.
    ///
    /// While the player is shown, keys go to the document's key listeners;
    /// otherwise they move the row selection.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.document.player().is_some() {
            self.document.press_key(key_from_crossterm(key));
            return;
        }

        let count = self.card_count();
        match key.code {
            KeyCode::Left => self.selected = self.selected.saturating_sub(1),
            KeyCode::Right if self.selected + 1 < count => self.selected += 1,
            KeyCode::Enter => {
                if !self.document.click_card(&self.container, self.selected) {
                    tracing::debug!("No card to open at {}", self.selected);
                }
            }
            _ => {}
        }
    }

    fn card_count(&self) -> usize {
        match self.document.row(&self.container) {
            Some(RowView::Cards(cards)) => cards.len(),
            _ => 0,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let row = self.document.row(&self.container);
        ui::render_row(frame, chunks[0], row.as_ref(), self.selected);

        let player = self.document.player();
        let footer = match &player {
            Some(view) => {
                ui::render_player(frame, area, view);
                PLAYER_FOOTER
            }
            None => ROW_FOOTER,
        };
        ui::render_footer_text(frame, chunks[2], footer);

        if let Some(node) = self.document.debug_overlay() {
            ui::render_debug_overlay(frame, area, &node);
        }
    }
}

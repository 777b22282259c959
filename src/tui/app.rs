use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Config;
use crate::ops::controller::{Command, Controller, Outcome};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into a text field (see `App::edit_target`)
    Edit,
}

/// Which text field is receiving keystrokes in Edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// The "Enter a task" field above the list
    NewTask,
    /// The edit field of the row at this index
    Row(usize),
    /// The Load File path prompt
    LoadPath,
}

/// Main application state
pub struct App {
    pub controller: Controller,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor row in the task list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Contents of the new-task field while it is not focused
    pub entry_draft: String,
    /// Buffer of the field being typed into
    pub edit_buffer: String,
    /// Byte offset of the caret in `edit_buffer`
    pub edit_cursor: usize,
    pub edit_target: Option<EditTarget>,
    /// Last path typed into the Load File prompt
    pub last_load_path: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            controller: Controller::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            entry_draft: String::new(),
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            last_load_path: None,
        }
    }

    pub fn task_count(&self) -> usize {
        self.controller.tasks().len()
    }

    /// Run a command and keep the cursor on a row that exists
    pub fn execute(&mut self, command: Command) -> Outcome {
        let outcome = self.controller.execute(command);
        self.clamp_cursor();
        outcome
    }

    /// Replace the list with the tasks in `path`, as the Load File action does
    pub fn load_file(&mut self, path: PathBuf) {
        self.execute(Command::Load(path));
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.task_count();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Focus a text field with the given starting text, caret at the end
    pub fn start_editing(&mut self, target: EditTarget, text: String) {
        self.edit_cursor = text.len();
        self.edit_buffer = text;
        self.edit_target = Some(target);
        self.mode = Mode::Edit;
    }

    /// Leave Edit mode, returning the buffer contents
    pub fn stop_editing(&mut self) -> String {
        self.mode = Mode::Navigate;
        self.edit_target = None;
        self.edit_cursor = 0;
        std::mem::take(&mut self.edit_buffer)
    }

    /// The row index whose edit field currently has focus, if any
    pub fn focused_row(&self) -> Option<usize> {
        match self.edit_target {
            Some(EditTarget::Row(index)) => Some(index),
            _ => None,
        }
    }
}

/// Run the TUI application, optionally preloading a task file
pub fn run(config: &Config, preload: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    if let Some(path) = preload {
        app.load_file(path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("jot"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!(tasks = app.task_count(), "tui exited");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

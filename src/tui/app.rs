//! Main TUI application state machine.
//!
//! Handles screen navigation, input events and the prediction service call.
//! One prediction runs to completion inside the event loop; inference here
//! is a dot product, so there is nothing worth moving off the UI thread.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::csvlog::CsvLog;
use crate::adapters::linear::DiskModelLoader;
use crate::application::{ModelRegistry, PredictionService};
use crate::domain::Disease;

use super::ui::{
    form::{render_form, DiseaseFormState},
    render_disclaimer,
    result::{render_result, ResultState},
    select::render_select,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Select,
    Form,
    Result,
}

/// Main application state
pub struct App {
    screen: Screen,
    should_quit: bool,
    service: PredictionService<DiskModelLoader, CsvLog>,
    selected_disease: usize,
    form: DiseaseFormState,
    result: Option<ResultState>,
}

impl App {
    /// Create a new application instance using default adapters.
    ///
    /// Model directory and prediction log path come from
    /// `CHRONICA_MODEL_DIR` (default `models`) and
    /// `CHRONICA_PREDICTIONS_FILE` (default `user_inputs.csv`).
    ///
    /// # Errors
    /// Returns error if the model directory does not exist. Individual
    /// models load lazily on first prediction for their disease.
    pub fn new() -> Result<Self> {
        let model_dir =
            std::env::var("CHRONICA_MODEL_DIR").unwrap_or_else(|_| "models".to_string());
        let model_dir = std::path::PathBuf::from(model_dir);
        if !model_dir.is_dir() {
            return Err(anyhow!(
                "Model directory not found at {:?}. Set CHRONICA_MODEL_DIR to a directory containing <disease>_model.json artifacts.",
                model_dir
            ));
        }

        let log_path = std::env::var("CHRONICA_PREDICTIONS_FILE")
            .unwrap_or_else(|_| "user_inputs.csv".to_string());

        let service = PredictionService::new(
            Arc::new(ModelRegistry::new(DiskModelLoader::new(model_dir))),
            Arc::new(CsvLog::new(log_path)),
        );

        Ok(Self::with_service(service))
    }

    /// Create application with an injected service (Composition Root pattern).
    #[must_use]
    pub fn with_service(service: PredictionService<DiskModelLoader, CsvLog>) -> Self {
        Self {
            screen: Screen::Select,
            should_quit: false,
            service,
            selected_disease: 0,
            form: DiseaseFormState::new(Disease::Liver),
            result: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                match self.screen {
                    Screen::Select => render_select(f, chunks[0], self.selected_disease),
                    Screen::Form => render_form(f, chunks[0], &self.form),
                    Screen::Result => {
                        if let Some(result) = &self.result {
                            render_result(f, chunks[0], result);
                        }
                    }
                }

                render_disclaimer(f, chunks[1]);
            })?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Select => self.handle_select_key(key),
            Screen::Form => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_select_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                self.selected_disease =
                    (self.selected_disease + Disease::ALL.len() - 1) % Disease::ALL.len();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected_disease = (self.selected_disease + 1) % Disease::ALL.len();
            }
            KeyCode::Enter => {
                self.form = DiseaseFormState::new(Disease::ALL[self.selected_disease]);
                self.screen = Screen::Form;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Select;
            }
            KeyCode::Up => {
                self.form.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form.next_field();
            }
            KeyCode::Left => {
                self.form.cycle_choice(false);
            }
            KeyCode::Right => {
                self.form.cycle_choice(true);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.form.load_sample_data();
            }
            KeyCode::Char(c) => {
                self.form.input_char(c);
            }
            KeyCode::Backspace => {
                self.form.delete_char();
            }
            KeyCode::Delete => {
                self.form.clear_field();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.screen = Screen::Select;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form = DiseaseFormState::new(self.form.disease);
                self.screen = Screen::Form;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let raw = match self.form.to_raw_inputs() {
            Ok(raw) => raw,
            Err(message) => {
                self.form.error_message = Some(message);
                return;
            }
        };

        match self.service.predict_raw(self.form.disease, &raw) {
            Ok(outcome) => {
                self.result = Some(ResultState {
                    label: outcome.prediction.label,
                    positive: outcome.prediction.positive,
                    log_error: outcome.log_error.map(|e| e.to_string()),
                });
                self.screen = Screen::Result;
            }
            Err(e) => {
                tracing::error!("Prediction failed: {e}");
                self.form.error_message = Some(e.to_string());
            }
        }
    }
}

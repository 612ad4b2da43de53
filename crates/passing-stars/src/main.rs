mod logging;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use passing_stars_config::Config;
use passing_stars_core::params::LOOP_PERIOD;
use passing_stars_field::StarFieldView;
use ratatui::{DefaultTerminal, Frame};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Started before the config is read so its load is logged too.
    let logger = logging::init()?;
    let config = Config::load()?;
    logging::apply_level(&logger, &config.log_level)?;
    log::info!(
        "starting at {} quality, playback speed {}",
        config.quality.display_name(),
        config.playback_speed
    );

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    config: Config,
    /// Star field renderer.
    view: StarFieldView,
    /// When the animation started.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let view = StarFieldView::new(config.quality, config.keep_aspect_ratio);
        Self {
            running: false,
            config,
            view,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        log::info!("exiting after {:.1}s", self.started.elapsed().as_secs_f32());
        Ok(())
    }

    /// Renders the star field for the current time.
    fn render(&mut self, frame: &mut Frame) {
        let time = field_time(self.started.elapsed(), self.config.playback_speed);
        self.view.render(frame, time);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polling doubles as the frame delay.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.frame_interval_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                // the view picks up new dimensions on the next draw
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Field time for a wall clock `elapsed`, wrapped into one loop period.
///
/// The field is periodic in time, so wrapping is invisible and keeps the
/// `f32` evaluation away from large, imprecise values.
fn field_time(elapsed: Duration, playback_speed: f32) -> f32 {
    let seconds = elapsed.as_secs_f64() * f64::from(playback_speed);
    seconds.rem_euclid(f64::from(LOOP_PERIOD)) as f32
}

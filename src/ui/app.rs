//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as FeedEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub connected: bool,
    pub initial_net_flow_pol: f64,
}

impl UIConfig {
    pub fn new(with_background_color: bool, connected: bool, initial_net_flow_pol: f64) -> Self {
        Self {
            with_background_color,
            connected,
            initial_net_flow_pol,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the simulated transfer activity.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The network environment the dashboard points at.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the feed workers.
    event_receiver: mpsc::Receiver<FeedEvent>,

    /// Requests an immediate net-flow sample from the sampler.
    refresh_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to the feed workers.
    shutdown_sender: broadcast::Sender<()>,

    /// Display configuration for dashboard construction.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<FeedEvent>,
        refresh_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            refresh_sender,
            shutdown_sender,
            ui_config,
        }
    }

    /// Transition to the dashboard screen.
    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(self.environment, self.start_time, self.ui_config.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming feed events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply queued events to the dashboard state
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for terminal events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    // Handle exit events
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        // Send shutdown signal to the feed workers
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }

                    // Any other key press skips the splash screen
                    if let Screen::Splash = app.current_screen {
                        app.enter_dashboard();
                    }
                }
                Event::FocusGained => {
                    // Catch the net-flow metric up without waiting for the
                    // next activity tick; no transfer is appended
                    if let Screen::Dashboard(_) = app.current_screen {
                        let _ = app.refresh_sender.try_send(());
                    }
                }
                _ => {}
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

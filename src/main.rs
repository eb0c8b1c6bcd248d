//! skywatch - terminal weather widget

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::error;
use tracing_subscriber::EnvFilter;

use skywatch::action::Action;
use skywatch::api::{ApiConfig, FetchFailure, WeatherApi};
use skywatch::components::search_bar::SEARCH_BAR_HEIGHT;
use skywatch::components::{
    Component, SearchBar, SearchBarProps, WeatherPanel, WeatherPanelProps,
};
use skywatch::dispatch::EffectStore;
use skywatch::effect::Effect;
use skywatch::reducer::reducer;
use skywatch::state::{AppState, Unit};

/// Terminal weather widget
#[derive(Parser, Debug)]
#[command(name = "skywatch")]
#[command(about = "Look up current conditions for a city")]
struct Args {
    /// City fetched on startup
    #[arg(long, short, default_value = "New York City")]
    city: String,

    /// Unit system
    #[arg(long, short, value_enum, default_value = "imperial")]
    unit: Unit,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let api = WeatherApi::new(ApiConfig::new(args.api_key.clone()))
        .context("failed to build HTTP client")?;

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, api, args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

struct WidgetUi {
    search: SearchBar,
    panel: WeatherPanel,
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    api: WeatherApi,
    args: Args,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut store = EffectStore::new(AppState::new(args.unit), reducer);
    let mut ui = WidgetUi {
        search: SearchBar::new(),
        panel: WeatherPanel::default(),
    };

    // Mount-time fetch for the configured city
    dispatch_action(
        &mut store,
        Action::SearchSubmit {
            query: args.city,
            clear_input: false,
        },
        &api,
        &tx,
    );

    loop {
        terminal.draw(|frame| {
            let chunks = Layout::vertical([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
            ])
            .split(frame.area());

            let state = store.state();
            ui.search.render(
                frame,
                chunks[0],
                SearchBarProps {
                    input: &state.input,
                    cursor: state.cursor,
                    unit: state.unit,
                },
            );
            ui.panel.render(frame, chunks[1], WeatherPanelProps { state });
        })?;

        // Terminal input; the poll timeout keeps completed fetches draining
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;
            let actions = {
                let state = store.state();
                ui.search.handle_event(
                    &ev,
                    SearchBarProps {
                        input: &state.input,
                        cursor: state.cursor,
                        unit: state.unit,
                    },
                )
            };
            for action in actions {
                if matches!(action, Action::Quit) {
                    return Ok(());
                }
                dispatch_action(&mut store, action, &api, &tx);
            }
        }

        while let Ok(action) = rx.try_recv() {
            dispatch_action(&mut store, action, &api, &tx);
        }
    }
}

fn dispatch_action(
    store: &mut EffectStore<AppState, Action, Effect>,
    action: Action,
    api: &WeatherApi,
    tx: &mpsc::UnboundedSender<Action>,
) {
    let result = store.dispatch(action);
    for effect in result.effects {
        handle_effect(effect, api, tx);
    }
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, api: &WeatherApi, tx: &mpsc::UnboundedSender<Action>) {
    match effect {
        Effect::FetchWeather { city, unit, seq } => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = match api.current_weather(&city, unit).await {
                    Ok(report) => Ok(report),
                    Err(err) => {
                        let failure = FetchFailure::from(&err);
                        if failure == FetchFailure::Silent {
                            error!(error = %err, city = %city, "weather fetch failed");
                        }
                        Err(failure)
                    }
                };
                let _ = tx.send(Action::FetchCompleted { seq, result });
            });
        }
    }
}

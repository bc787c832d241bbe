//! CelestaClima - city weather lookup TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use clima::action::Action;
use clima::api::DEFAULT_ENDPOINT;
use clima::components::{Component, WeatherDisplay, WeatherDisplayProps};
use clima::config::Config;
use clima::effect::Effect;
use clima::logging;
use clima::reducer::reducer;
use clima::state::{AppState, DEFAULT_ERROR_TIMEOUT_MS, TAGLINE_TICK_MS, Units};
use clima::tasks::{self, Fetcher};
use clima::view;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// CelestaClima - current weather for any city
#[derive(Parser, Debug)]
#[command(name = "clima")]
#[command(about = "Look up current weather by city name")]
struct Args {
    /// City to look up on startup (empty: wait for a search)
    #[arg(long, short, default_value = "")]
    city: String,

    /// Unit system requested from the API
    #[arg(long, short, value_enum, default_value = "metric")]
    units: Units,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Current-weather endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// How long an error banner stays up, in milliseconds (minimum 1)
    #[arg(long, default_value_t = DEFAULT_ERROR_TIMEOUT_MS, value_parser = clap::value_parser!(u64).range(1..))]
    error_timeout_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ClimaComponentId {
    Display,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ClimaContext {
    Main,
}

impl EventRoutingState<ClimaComponentId, ClimaContext> for AppState {
    fn focused(&self) -> Option<ClimaComponentId> {
        Some(ClimaComponentId::Display)
    }

    fn modal(&self) -> Option<ClimaComponentId> {
        None
    }

    fn binding_context(&self, _id: ClimaComponentId) -> ClimaContext {
        ClimaContext::Main
    }

    fn default_context(&self) -> ClimaContext {
        ClimaContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        units,
        api_key,
        endpoint,
        error_timeout_ms,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let config = Config::new(city, units, api_key, endpoint, error_timeout_ms, log_file)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    if let Some(path) = config.log_file.as_deref() {
        logging::init_file_logging(path)?;
    }

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial = config.clone();
    let mut state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(
                initial.city,
                initial.units,
                initial.error_timeout_ms,
            ))
        })
        .await
        .map_err(debug_error)?;

    // Snapshots keep their data but follow the current flags
    state.units = config.units;
    state.error_timeout_ms = config.error_timeout_ms;

    tracing::info!(city = %state.search_term, units = ?state.units, "starting");

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let fetcher = Arc::new(Fetcher::new(config.api.clone()));

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, fetcher, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct ClimaUi {
    display: WeatherDisplay,
}

impl ClimaUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ClimaComponentId>,
    ) {
        event_ctx.set_component_area(ClimaComponentId::Display, area);

        let date = view::format_date(chrono::Utc::now().date_naive());
        let props = WeatherDisplayProps {
            state,
            date: &date,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            date: "",
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    fetcher: Arc<Fetcher>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(ClimaUi::new()));
    let mut bus: EventBus<AppState, Action, ClimaComponentId, ClimaContext> = EventBus::new();
    let keybindings: Keybindings<ClimaContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(ClimaComponentId::Display, move |event, state| {
        ui_display.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(TAGLINE_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| tasks::handle_effect(effect, ctx.tasks(), Arc::clone(&fetcher)),
        )
        .await
}

//! src/main.rs
//! Terminal file/directory picker. Prints the outcome on stdout once the
//! terminal has been restored.

use std::{
    io::{self, Stderr},
    panic::PanicHookInfo,
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::sync::{Notify, mpsc};
use tracing::{debug, error, info, warn};

use picker_core::{
    Logger,
    config::Config,
    controller::{
        event_loop::{EventLoop, MetricsSnap, TaskResult},
        picker::PickerController,
    },
    model::{
        outcome::{PickerOutcome, ReportFormat},
        picker_mode::{LaunchConfig, PickerMode},
    },
    view::ui::UIRenderer,
};

/// The UI goes to stderr so stdout carries only the result.
type AppTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Exit status when the picker cannot start.
const EXIT_STARTUP_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "fpick", version, about = "Pick a file or directory from the terminal")]
struct Args {
    /// What may be picked. Defaults from the request code.
    #[arg(long, value_enum)]
    mode: Option<PickerMode>,

    /// Opaque integer echoed back with the result.
    #[arg(long)]
    request_code: Option<i32>,

    /// Directory the picker may not go above.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    format: ReportFormat,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<ExitCode> {
    setup_panic_handler();
    let args = Args::parse();

    let (config, config_status) = match Config::load_for_launch(args.config.as_deref()).await {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("fpick: {e}");
            return Ok(ExitCode::from(EXIT_STARTUP_FAILURE));
        }
    };

    let _log_guard = match Logger::init_tracing(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("fpick: {e}");
            None
        }
    };
    info!("Starting fpick");

    match config_status {
        Ok(origin) => info!("Config {}", origin),
        Err(e) => warn!("Failed to load config, using defaults: {}", e),
    }

    let root = match config.resolve_root(args.root).await {
        Ok(root) => root,
        Err(e) => {
            error!("{}", e);
            eprintln!("fpick: {e}");
            return Ok(ExitCode::from(EXIT_STARTUP_FAILURE));
        }
    };

    let launch = LaunchConfig::resolve(args.mode, args.request_code);

    let outcome = App::new(launch, root, &config)
        .context("Failed to initialize picker")?
        .run()
        .await
        .context("Picker runtime error")?;

    outcome
        .report(args.format, &mut io::stdout().lock())
        .context("Failed to report result")?;

    info!(status = ?outcome.status(), "fpick exited cleanly");
    Ok(outcome.exit_code())
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop<EventStream>,
    picker: PickerController,
    ui_renderer: UIRenderer,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(launch: LaunchConfig, root: PathBuf, config: &Config) -> Result<Self> {
        let (task_tx, task_rx) = mpsc::unbounded_channel::<TaskResult>();
        let shutdown = Arc::new(Notify::new());

        let picker = PickerController::new(launch, root, task_tx).with_config(config);
        let event_loop = EventLoop::new(EventStream::new(), task_rx, shutdown.clone());

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        Ok(Self {
            terminal,
            event_loop,
            picker,
            ui_renderer: UIRenderer::new(),
            shutdown,
        })
    }

    async fn run(mut self) -> Result<PickerOutcome> {
        self.setup_shutdown_handler();
        self.picker.start();

        let outcome = loop {
            self.render()?;

            let Some(action) = self.event_loop.next_action().await else {
                info!("Input closed, cancelling");
                break PickerOutcome::Cancelled {
                    request_code: self.picker.launch().request_code,
                };
            };

            if let Some(outcome) = self.picker.dispatch(action) {
                break outcome;
            }
        };

        self.log_final_metrics();
        Ok(outcome)
    }

    fn render(&mut self) -> Result<()> {
        if !self.picker.ui().needs_redraw() {
            return Ok(());
        }

        let start = Instant::now();
        self.terminal
            .draw(|frame: &mut Frame<'_>| {
                self.ui_renderer.render(frame, &self.picker);
            })
            .context("Failed to draw terminal")?;
        self.picker.ui_mut().clear_redraw();

        let duration = start.elapsed();
        if duration.as_millis() > 16 {
            debug!("Slow render: {}ms", duration.as_millis());
        }
        Ok(())
    }

    fn log_final_metrics(&self) {
        let metrics: MetricsSnap = self.event_loop.snapshot_metrics();
        let render = self.ui_renderer.stats();

        info!(
            uptime = ?self.event_loop.uptime(),
            terminal_events = metrics.terminal_events,
            tasks = metrics.tasks,
            ticks = metrics.ticks,
            frames = render.frames,
            slow_frames = render.slow,
            "Final metrics, {:.1} fps",
            render.fps()
        );
    }

    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let (mut sigterm, mut sigint) =
                    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                        (Ok(term), Ok(int)) => (term, int),
                        (Err(e), _) | (_, Err(e)) => {
                            warn!("Failed to install signal handlers: {}", e);
                            return;
                        }
                    };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = sigint.recv() => info!("Received SIGINT"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("fpick panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}

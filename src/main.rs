use anyhow::{Context, Result};
use clap::Parser;
use explore_nepal::app::App;
use explore_nepal::cli::Cli;
use explore_nepal::config::Config;
use explore_nepal::styles::{init_theme, ThemeType};
use explore_nepal::utils::{get_log_dir, get_log_path};
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.execute_non_interactive()? {
        return Ok(());
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_file = get_log_path();
    let file_name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "explore-nepal.log".into());
    let file_appender = tracing_appender::rolling::never(&log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    let no_color = cli.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let theme_type = if no_color {
        ThemeType::NoColor
    } else {
        config.theme_type()
    };
    init_theme(theme_type);

    let topic = cli.command.as_ref().and_then(|c| c.topic());
    info!(
        "Starting explore-nepal {} ({})",
        env!("CARGO_PKG_VERSION"),
        topic.map_or("main menu", |t| t.as_str())
    );

    let mut app = App::new(&config, topic)?;
    let result = app.run();

    // Flush buffered log lines
    drop(guard);

    result
}

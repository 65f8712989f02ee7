//! Debug Noises - Entry Point
//!
//! Loads the noise bank, then runs a terminal harness with one button per
//! debugger event.

use std::io;
use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use debug_noises::audio::{config_path, default_base_path, KiraBackend, NoiseBank, NoiseConfig, RandomPicker};
use debug_noises::ui::{Action, App};

fn main() -> Result<()> {
    // Initialize logging to file (to avoid interfering with TUI)
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("debug-noises.log")
        .context("could not open debug-noises.log")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Pipe(Box::new(log_file)))
    .init();

    log::info!("Starting Debug Noises v{}", env!("CARGO_PKG_VERSION"));

    // Load every clip before touching the terminal so load errors print normally
    let config = config_path()
        .map(|path| NoiseConfig::load_or_default(&path))
        .unwrap_or_default();
    let base_path = default_base_path().context("could not locate executable directory")?;
    let bank = NoiseBank::with_config(&base_path, &config, KiraBackend::new(), RandomPicker::from_entropy())
        .inspect_err(|e| log::error!("Could not load noises: {}", e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_harness(&mut terminal, &mut app, &bank);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Harness exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Debug Noises shut down cleanly");
    result
}

/// Redraw and dispatch key presses until the user quits
fn run_harness(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    bank: &NoiseBank,
) -> Result<()> {
    let mut play = |category| bank.play(category);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only handle key press events, not releases
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_input(key, &mut play) {
            Action::Continue => {}
            Action::Quit => break,
            Action::ExportConfig => export_config(app),
        }
    }

    Ok(())
}

/// Write the default noise table where the next run will pick it up
fn export_config(app: &mut App) {
    let Some(path) = config_path() else {
        app.set_status("No config directory on this platform");
        return;
    };

    match NoiseConfig::default().export(&path) {
        Ok(()) => {
            log::info!("Wrote default noise config to {}", path.display());
            app.set_status(format!("Wrote {}", path.display()));
        }
        Err(e) => {
            log::warn!("Could not export noise config: {}", e);
            app.set_status(format!("Export failed: {}", e));
        }
    }
}

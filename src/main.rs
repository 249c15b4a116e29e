use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use hovertip::config::{Page, load_page};
use hovertip::document::Viewport;

mod demo;

use demo::{DemoApp, Host};

const DEFAULT_LOG_FILE: &str = "hovertip.log";

/// Hover the boxes to see their tooltips
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Page file (defaults to ~/.config/hovertip/page.toml, then a built-in page)
    page: Option<PathBuf>,

    /// Load and bind the page, print a summary and exit
    #[arg(long)]
    check: bool,

    /// Log file (defaults to hovertip.log in the temp directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.log_file)?;

    let page = load_page(cli.page.as_deref())?;

    if cli.check {
        let host = Host::build(&page, Viewport::default())?;
        println!(
            "{} of {} targets bound",
            host.bound_count(),
            host.targets.len()
        );
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &page);

    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {err}");
    }
    ratatui::restore();

    result
}

/// Send logs to a file; the terminal belongs to the UI
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));
    let file = File::create(&path)
        .wrap_err_with(|| format!("could not open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(mut terminal: DefaultTerminal, page: &Page) -> Result<()> {
    let size = terminal.size()?;
    let host = Host::build(page, demo::viewport(size.width, size.height))?;
    let mut app = DemoApp::new(host);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

// tracetty: step-by-step playback of instrumented algorithms

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use tracetty::algorithms::Algorithm;
use tracetty::playback::Workbench;
use tracetty::ui::App;

/// Replay classic algorithms one recorded step at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Algorithm to trace
    #[arg(value_enum, required_unless_present = "list")]
    algorithm: Option<Algorithm>,

    /// Input text (defaults to the algorithm's sample)
    #[arg(short, long, value_name = "TEXT")]
    input: Option<String>,

    /// Parameter text, such as a target or an edge list
    #[arg(short, long, value_name = "TEXT")]
    param: Option<String>,

    /// Auto-play delay in milliseconds (clamped to the supported range)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Number of log entries kept (clamped to the supported range)
    #[arg(long, value_name = "N")]
    log_cap: Option<usize>,

    /// Print every step to stdout instead of starting the TUI
    #[arg(long)]
    dump: bool,

    /// Write diagnostics to this file, filtered by RUST_LOG
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// List the available algorithms and exit
    #[arg(long)]
    list: bool,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn print_list() {
    for algorithm in Algorithm::ALL {
        let spec = algorithm.spec();
        println!("{:<24} {:<24} {}", spec.name, spec.family, spec.title);
    }
}

fn dump(workbench: &Workbench) {
    let session = workbench.session();
    println!("{} ({} steps)", session.algorithm(), session.len());
    let views = session.views();
    for view in &views {
        println!("#{:<4} {:<18} {}", view.index, view.kind, view.description);
    }
    if let Some(last) = views.last() {
        println!();
        for line in &last.lines {
            println!("{}", line);
        }
        println!("{}", last.answer);
    }
}

fn run_tui(workbench: Workbench) -> Result<(), Box<dyn std::error::Error>> {
    // Leave the alternate screen before the panic message is printed
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(workbench);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    if cli.list {
        print_list();
        return Ok(());
    }

    let Some(algorithm) = cli.algorithm else {
        eprintln!("Error: no algorithm given (try --list)");
        std::process::exit(1);
    };

    let spec = algorithm.spec();
    let input = cli.input.as_deref().unwrap_or(spec.sample_input);
    let param = cli.param.as_deref().unwrap_or(spec.sample_param);

    let mut config = algorithm.config();
    if let Some(ms) = cli.delay_ms {
        config = config.with_delay(Duration::from_millis(ms));
    }
    if let Some(cap) = cli.log_cap {
        config = config.with_log_capacity(cap);
    }

    let workbench = match Workbench::new(algorithm, input, param, config) {
        Ok(workbench) => workbench,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.dump {
        dump(&workbench);
        return Ok(());
    }

    run_tui(workbench)
}

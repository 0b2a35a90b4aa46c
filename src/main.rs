// prefixer: arithmetic expressions to prefix notation

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser as ClapParser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use prefixer::batch::{self, BatchConfig, DEFAULT_PLACEHOLDER};
use prefixer::logging::init_logging;
use prefixer::parser::Parser;
use prefixer::ui::App;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log at trace level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints one expression in prefix notation
    Parse {
        /// Expression to parse; read from stdin when omitted
        expression: Option<String>,
    },
    /// Converts a file of expressions, one per line
    Batch {
        /// Input file with one expression per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output file, overwritten
        #[arg(short, long)]
        output: PathBuf,

        /// Text written for lines that fail to parse
        #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
        placeholder: String,
    },
    /// Opens the interactive terminal UI
    Tui,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Parse { expression } => {
            init_logging(if args.verbose { "trace" } else { "warn" });
            let expression = match expression {
                Some(expression) => expression,
                None => read_stdin_line()?,
            };

            match Parser::new().parse(&expression) {
                Ok(tree) => println!("{}", tree),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Batch {
            input,
            output,
            placeholder,
        } => {
            init_logging(if args.verbose { "trace" } else { "info" });
            let config = BatchConfig { placeholder };
            let report = batch::run_batch(&input, &output, &config)
                .with_context(|| format!("batch run over {} failed", input.display()))?;
            eprintln!(
                "Processed {} lines: {} accepted, {} rejected.",
                report.lines,
                report.accepted,
                report.rejected()
            );
        }
        Commands::Tui => {
            // Anything on stderr would tear through the alternate screen
            init_logging("off");
            run_tui()?;
        }
    }

    Ok(())
}

fn read_stdin_line() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read expression from stdin")?;
    Ok(line)
}

fn run_tui() -> anyhow::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new();
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}

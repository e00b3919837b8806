use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use go_sessions::config::DemoConfig;
use go_sessions::logging::init_tracing;
use go_sessions::output::{Output, Stdout};
use go_sessions::session7::{run_counter, run_ticker, run_worker_pool, Program};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(name = "session_07_concurrency", about = "Ticker, worker pool and mutex counter demos")]
struct Cli {
    /// TOML file with [ticker], [workers] and [counter] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Spawn a producer on every tick until the timeout fires
    Ticker {
        #[arg(long)]
        interval_ms: Option<u64>,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Run a fixed number of workers and wait for all of them
    Workers {
        #[arg(long)]
        workers: Option<usize>,
        #[arg(long)]
        work_ms: Option<u64>,
    },
    /// Increment a shared counter from N tasks
    Counter {
        #[arg(short = 'n', long)]
        increments: Option<u64>,
    },
    /// Run all three demos in turn
    All,
}

fn banner(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

fn run_program(program: Program, config: &DemoConfig, runtime: &Runtime) -> Result<()> {
    let out: Arc<dyn Output> = Arc::new(Stdout);
    match program {
        Program::Ticker => {
            banner("Goroutine and Ticker Example");
            runtime
                .block_on(run_ticker(&config.ticker, out))
                .context("ticker demo failed")?;
        }
        Program::Workers => {
            banner("Wait Group Example");
            run_worker_pool(&config.workers, out).context("worker pool demo failed")?;
        }
        Program::Counter => {
            banner("Mutex Example");
            runtime
                .block_on(run_counter(config.counter.increments, out))
                .context("counter demo failed")?;
        }
        Program::Exit => {}
    }
    Ok(())
}

fn menu(config: &DemoConfig, runtime: &Runtime) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{}", "Session 7 Menu:".bold());
        for entry in Program::MENU {
            println!("{entry}");
        }
        print!("Enter your choice (1-4): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.parse::<Program>() {
            Ok(Program::Exit) => {
                println!("Goodbye!");
                return Ok(());
            }
            Ok(program) => run_program(program, config, runtime)?,
            Err(msg) => println!("{}", msg.yellow()),
        }
        println!();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = DemoConfig::load(cli.config.as_deref()).context("loading config")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("session7-worker")
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let Some(command) = cli.command else {
        return menu(&config, &runtime);
    };

    match command {
        Command::Ticker {
            interval_ms,
            timeout_ms,
        } => {
            config.ticker.interval_ms = interval_ms.unwrap_or(config.ticker.interval_ms);
            config.ticker.timeout_ms = timeout_ms.unwrap_or(config.ticker.timeout_ms);
            config.validate()?;
            run_program(Program::Ticker, &config, &runtime)
        }
        Command::Workers { workers, work_ms } => {
            config.workers.count = workers.unwrap_or(config.workers.count);
            config.workers.work_ms = work_ms.unwrap_or(config.workers.work_ms);
            run_program(Program::Workers, &config, &runtime)
        }
        Command::Counter { increments } => {
            config.counter.increments = increments.unwrap_or(config.counter.increments);
            run_program(Program::Counter, &config, &runtime)
        }
        Command::All => {
            for program in [Program::Ticker, Program::Workers, Program::Counter] {
                run_program(program, &config, &runtime)?;
            }
            Ok(())
        }
    }
}

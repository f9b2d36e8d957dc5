use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use crossterm::{
    queue,
    style::{Color, PrintStyledContent, Stylize},
};
use mazeseed::{
    config::{Config, RenderStyle},
    generate_maze_with,
    generators::resolve_seed,
    render::{render_ascii, render_unicode},
    walls_of,
};
use tracing_appender::non_blocking::WorkerGuard;

/// Install a file-backed subscriber. The returned guard must stay alive so buffered log lines
/// are flushed on exit.
fn init_logging(config: &Config) -> WorkerGuard {
    let log_file = config.log_file.as_path();
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = log_file
        .file_name()
        .unwrap_or(OsStr::new("mazeseed.log"));
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    guard
}

fn main() -> ExitCode {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let args = args.collect::<Vec<_>>();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", Config::USAGE);
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", Config::USAGE);
            return ExitCode::from(2);
        }
    };
    let _guard = init_logging(&config);

    // Pin the seed here so it can be printed for reproduction
    let seed = resolve_seed(config.seed);

    let graph = match generate_maze_with(config.generator, config.size, Some(seed)) {
        Ok(graph) => graph,
        Err(err) => {
            tracing::error!("[main] generation failed: {err}");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let walls = walls_of(config.size, &graph);
    let rendered = match config.style {
        RenderStyle::Ascii => render_ascii(&walls),
        RenderStyle::Unicode => render_unicode(&walls),
    };

    let footer = format!("\n{} | seed {}\n", config.generator, seed);
    let mut stdout = std::io::stdout();
    let printed = queue!(
        stdout,
        PrintStyledContent(rendered.with(Color::White)),
        PrintStyledContent(footer.with(Color::DarkGrey)),
    )
    .and_then(|_| stdout.flush());
    if let Err(err) = printed {
        eprintln!("failed to write maze: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

//! CLI entry point for replant

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use replant::{
    RewriteReport, RuleSet, WalkConfig, print_report, print_report_json, rewrite_file,
    source_files,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "replant")]
#[command(about = "Fixes path-alias imports after moving flat modules into per-name folders")]
#[command(version)]
struct Args {
    /// Root directory to rewrite
    #[arg(default_value = "src")]
    path: PathBuf,

    /// Visit all files (ignore hidden-file and .gitignore filtering)
    #[arg(short, long)]
    all: bool,

    /// Skip files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output the run report in JSON format
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        eprintln!(
            "replant: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    let walk_config = WalkConfig {
        show_all: args.all,
        ignore_patterns: args.ignore.clone(),
    };

    let rules = RuleSet::standard();
    let mut report = RewriteReport::new();

    // One file at a time: read, transform, conditionally write. The first
    // I/O failure aborts the run; files already rewritten stay rewritten.
    for path in source_files(&root, &walk_config) {
        match rewrite_file(&path, &rules) {
            Ok(outcome) => {
                let display = path
                    .strip_prefix(&root)
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|_| path.clone());
                report.record(display, outcome);
            }
            Err(e) => {
                eprintln!("replant: cannot rewrite '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    let result = if args.json {
        print_report_json(&report)
    } else {
        print_report(&report, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("replant: error writing output: {}", e);
        process::exit(1);
    }
}

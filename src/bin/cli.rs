//! Command-line interface for tabcanvas
//!
//! Basic CLI tool for exercising theme extraction and contribution
//! analytics against real inputs.

use chrono::NaiveDate;
use std::{env, path::Path, process};
use tabcanvas::{
    compute_streak, extract_theme, extract_theme_from_url, image_loader, parse_contributions,
    rolling_total, total_for_year, RawContributionDay, ThemeResult,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("theme") => run_theme(&args[2..]).await,
        Some("contrib") => run_contrib(&args[2..]),
        Some("--help") | Some("-h") => {
            print_help(&args[0]);
        }
        _ => {
            print_help(&args[0]);
            process::exit(1);
        }
    }
}

async fn run_theme(args: &[String]) {
    let mut url_mode = false;
    let mut source = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--url" => url_mode = true,
            arg if !arg.starts_with("--") => {
                if source.is_none() {
                    source = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image sources provided");
                    process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let source = match source {
        Some(source) => source,
        None => {
            eprintln!("Error: No image source provided");
            process::exit(1);
        }
    };

    let result = if url_mode {
        extract_theme_from_url(&source).await
    } else {
        let path = Path::new(&source);
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if !image_loader::is_supported_extension(ext) {
                eprintln!("Error: Unsupported image format: .{}", ext);
                eprintln!(
                    "Supported: {}",
                    image_loader::supported_extensions().join(", ")
                );
                process::exit(1);
            }
        }
        extract_theme(path)
    };

    match result {
        Ok(theme) => print_theme(&theme),
        Err(error) => {
            eprintln!("Theme extraction failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn run_contrib(args: &[String]) {
    let mut year = None;
    let mut reference_date = None;
    let mut file = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--year" => {
                i += 1;
                year = args.get(i).and_then(|v| v.parse::<i32>().ok());
                if year.is_none() {
                    eprintln!("Error: --year expects an integer");
                    process::exit(1);
                }
            }
            "--date" => {
                i += 1;
                reference_date = args
                    .get(i)
                    .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok());
                if reference_date.is_none() {
                    eprintln!("Error: --date expects YYYY-MM-DD");
                    process::exit(1);
                }
            }
            arg if !arg.starts_with("--") => file = Some(arg.to_string()),
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let file = match file {
        Some(file) => file,
        None => {
            eprintln!("Error: No contribution file provided");
            process::exit(1);
        }
    };

    let content = match std::fs::read_to_string(&file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Failed to read {}: {}", file, e);
            process::exit(1);
        }
    };

    let raw: Vec<RawContributionDay> = match serde_json::from_str(&content) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: Failed to parse {}: {}", file, e);
            process::exit(1);
        }
    };

    let days = match parse_contributions(&raw) {
        Ok(days) => days,
        Err(error) => {
            eprintln!("Contribution parsing failed: {}", error);
            process::exit(1);
        }
    };

    let reference_date = reference_date
        .or_else(|| days.last().map(|day| day.date))
        .unwrap_or_default();

    match compute_streak(&days, reference_date) {
        Ok(streak) => {
            eprintln!("Contribution Summary:");
            eprintln!("  Days recorded: {}", days.len());
            eprintln!("  Rolling total (365d): {}", rolling_total(&days));
            if let Some(year) = year {
                eprintln!("  Total for {}: {}", year, total_for_year(&days, year));
            }
            eprintln!("  Current streak: {} day(s)", streak);
        }
        Err(error) => {
            eprintln!("Streak computation failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <COMMAND> [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  theme [--url] <image>      Extract a dashboard theme from an image");
    eprintln!("                             (path by default, URL with --url)");
    eprintln!("  contrib <file.json>        Compute contribution analytics");
    eprintln!("          [--year YYYY]      Add a calendar-year total");
    eprintln!("          [--date YYYY-MM-DD] Reference date (default: newest entry)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} theme wallpaper.jpg", program_name);
    eprintln!("  {} theme --url https://example.com/bg.png", program_name);
    eprintln!("  {} contrib contributions.json --year 2024", program_name);
}

fn print_theme(result: &ThemeResult) {
    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Theme Extraction Summary:");
    eprintln!("  Primary:   {}", result.colors.primary);
    eprintln!("  Secondary: {}", result.colors.secondary);
    eprintln!("  Accent:    {}", result.colors.accent);
    eprintln!(
        "  Gradient:  {} -> {}",
        result.colors.bg_gradient_start, result.colors.bg_gradient_end
    );
    eprintln!("  Palette entries: {}", result.palette.len());

    if result.degraded {
        eprintln!("  Note: too few distinct colors; fallback theme in use.");
    }
}

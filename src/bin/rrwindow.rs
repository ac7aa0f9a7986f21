use std::process;

use clap::Parser;
use rrwindow::{CalendarTime, OptionValue, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rrwindow",
    about = "Step or jump a date through recurrence windows",
    version
)]
struct Cli {
    /// Anchor date (ISO 8601 date or datetime, e.g. 2012-07-18)
    start: Option<String>,

    /// Recurrence frequency: yearly, monthly, weekly or daily
    #[arg(short, long)]
    frequency: String,

    /// Number of frequency units per window (ignored unless a positive integer)
    #[arg(short, long)]
    interval: Option<String>,

    /// Week start day number (1 = Monday .. 7 = Sunday)
    #[arg(short, long)]
    week_start: Option<String>,

    /// Number of window boundaries to show
    #[arg(short, long, default_value = "1")]
    n: u32,

    /// Jump to the nearest window boundary at or before this date
    #[arg(long, conflicts_with = "n")]
    target: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Validate the window options without computing
    #[arg(long)]
    check: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn options(cli: &Cli) -> WindowOptions {
    let mut options = WindowOptions::new(cli.frequency.as_str());
    if let Some(ref interval) = cli.interval {
        options = options.with_interval(interval.as_str());
    }
    if let Some(ref week_start) = cli.week_start {
        let value = match week_start.trim().parse::<i64>() {
            Ok(n) => OptionValue::Integer(n),
            Err(_) => OptionValue::Text(week_start.clone()),
        };
        options = options.with_week_start(value);
    }
    options
}

fn parse_time(s: &str) -> CalendarTime {
    match s.parse() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}

fn print_times(times: &[CalendarTime], json: bool) {
    if json {
        let iso: Vec<String> = times.iter().map(|t| t.to_string()).collect();
        match serde_json::to_string(&iso) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    } else {
        for t in times {
            println!("{t}");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let window = match Window::from_options(&options(&cli)) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    let mut time = match cli.start {
        Some(ref start) => parse_time(start),
        None => {
            eprintln!("error: no start date provided");
            process::exit(2);
        }
    };

    if let Some(ref target) = cli.target {
        let target = parse_time(target);
        if let Err(e) = window.move_to_nearest_date(&target, &mut time) {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
        print_times(&[time], cli.json);
        return;
    }

    let mut n = cli.n;
    if n > 1000 {
        eprintln!("warning: capped at 1000 window boundaries");
        n = 1000;
    }

    let mut results = Vec::with_capacity(n as usize);
    for _ in 0..n {
        if let Err(e) = window.increment(&mut time) {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
        results.push(time);
    }
    print_times(&results, cli.json);
}

use dilemmo_core::{App, Card, DrawEngine, DrawOutcome, Event, EventBus, Mode, ResetReason, RngState};
use dilemmo_data::{load_catalog_from_path, FeedClient};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
struct CliOptions {
    file: Option<PathBuf>,
    url: Option<String>,
    seed: Option<u64>,
    timeout_secs: Option<u64>,
}

const USAGE: &str = "\
usage: dilemmo (--file <path> | --url <url>) [--seed <u64>] [--timeout <secs>]

  --file <path>     load the feed from a local CSV file
  --url <url>       fetch the feed from a remote CSV endpoint
  --seed <u64>      fix the draw order (default: random seed)
  --timeout <secs>  fetch timeout in seconds (default: 10)
";

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => {
                let value = args.next().ok_or("--file needs a path")?;
                options.file = Some(PathBuf::from(value));
            }
            "--url" => {
                options.url = Some(args.next().ok_or("--url needs a url")?);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                options.seed = Some(value.parse().map_err(|_| "invalid --seed value")?);
            }
            "--timeout" => {
                let value = args.next().ok_or("--timeout needs a number")?;
                options.timeout_secs = Some(value.parse().map_err(|_| "invalid --timeout value")?);
            }
            "--help" | "-h" => return Err(String::new()),
            other => return Err(format!("unknown argument {other}")),
        }
    }
    if options.file.is_none() && options.url.is_none() {
        return Err("one of --file or --url is required".to_string());
    }
    Ok(options)
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    println!("seed: {}", rng.seed());

    let mut app = App::new();
    if !load_feed(&mut app, &options, rng) {
        return ExitCode::FAILURE;
    }
    print_events(&mut app);

    repl(&mut app);
    ExitCode::SUCCESS
}

/// Loads the feed into the app. On fetch failure the app moves to its
/// failed state and the user is offered a retry.
fn load_feed(app: &mut App, options: &CliOptions, rng: RngState) -> bool {
    if let Some(path) = &options.file {
        match load_catalog_from_path(path) {
            Ok(report) => {
                app.catalog_ready(report, rng);
                return true;
            }
            Err(err) => {
                app.load_failed(err.to_string());
                eprintln!("load failed: {err:#}");
                return false;
            }
        }
    }

    let url = options.url.as_deref().unwrap_or_default();
    let mut client = FeedClient::new(url);
    if let Some(secs) = options.timeout_secs {
        client = client.with_timeout(Duration::from_secs(secs));
    }
    loop {
        app.begin_reload();
        println!("fetching {} ...", client.url());
        match client.fetch() {
            Ok(report) => {
                app.catalog_ready(report, rng.clone());
                return true;
            }
            Err(err) => {
                app.load_failed(err.to_string());
                eprintln!("load failed: {err}");
                if !confirm("retry? [y/N] ") {
                    return false;
                }
            }
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}

fn repl(app: &mut App) {
    println!("type 'help' for commands");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let rest: Vec<&str> = parts.collect();
        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" | "x" => break,
            "draw" | "d" => run_draw(app),
            "guide" | "g" => run_guide(app),
            "reset" | "r" => run_reset(app),
            "mode" | "m" => run_mode(app, &rest),
            "categories" | "cat" => run_categories(app),
            "select" | "s" => run_select(app, &rest, &line),
            "clear" => run_clear(app),
            "progress" | "p" => run_progress(app),
            "show" => run_show(app),
            "state" => run_state(app),
            other => println!("unknown command '{other}', try 'help'"),
        }
        print_events(app);
    }
}

fn print_help() {
    println!(
        "\
  draw | d          draw a random unplayed card from the active pool
  guide | g         reveal the discussion guide of the current card
  show              print the current card again
  reset | r         restart the session (same mode and filter)
  mode | m [auto|info|dilemme]   show or change the mode
  categories | cat  list categories with played/total progress
  select | s <category>          toggle a category filter
  clear             clear the category filter
  progress | p      per-category progress table
  state             dump catalog and session snapshots as JSON
  quit | q          leave"
    );
}

fn with_engine(app: &mut App, action: impl FnOnce(&mut DrawEngine)) {
    match app.engine() {
        Ok(engine) => action(engine),
        Err(err) => println!("{err}"),
    }
}

fn run_draw(app: &mut App) {
    let mut bus = EventBus::default();
    with_engine(app, |engine| match engine.draw(&mut bus) {
        DrawOutcome::Drawn(card) => print_card(&card, false),
        DrawOutcome::Exhausted => {
            println!("pool exhausted: every card has been drawn. 'reset' to start over")
        }
    });
    forward_events(app, bus);
}

fn run_guide(app: &mut App) {
    with_engine(app, |engine| {
        engine.reveal_guide();
        match &engine.session().current {
            Some(card) if !card.guide.is_empty() => println!("guide: {}", card.guide),
            Some(_) => println!("this card has no guide"),
            None => println!("no card drawn yet"),
        }
    });
}

fn run_reset(app: &mut App) {
    let mut bus = EventBus::default();
    with_engine(app, |engine| engine.reset(&mut bus));
    forward_events(app, bus);
}

fn run_mode(app: &mut App, rest: &[&str]) {
    let mut bus = EventBus::default();
    with_engine(app, |engine| match rest.first() {
        None => println!("mode: {}", mode_label(engine.mode())),
        Some(&"auto") => engine.set_mode(Mode::Auto, &mut bus),
        Some(&"info") => engine.set_mode(Mode::Info, &mut bus),
        Some(&"dilemme") => engine.set_mode(Mode::Dilemma, &mut bus),
        Some(other) => println!("unknown mode '{other}' (auto, info, dilemme)"),
    });
    forward_events(app, bus);
}

fn run_categories(app: &mut App) {
    with_engine(app, |engine| {
        let selected = engine.selected_categories().clone();
        for line in engine.progress() {
            let marker = if selected.contains(&line.category) {
                "*"
            } else {
                " "
            };
            println!(
                "{} {}  {}/{}",
                marker, line.category, line.played, line.total
            );
        }
    });
}

fn run_select(app: &mut App, rest: &[&str], line: &str) {
    if rest.is_empty() {
        println!("select needs a category name");
        return;
    }
    // Category names may contain spaces; take everything after the command.
    let name = line
        .trim()
        .splitn(2, char::is_whitespace)
        .nth(1)
        .unwrap_or_default()
        .trim()
        .to_string();
    let mut bus = EventBus::default();
    with_engine(app, |engine| {
        if !engine.catalog().categories().contains(&name) {
            println!("unknown category '{name}'");
            return;
        }
        engine.toggle_category(&name, &mut bus);
        println!("filter: {:?}", engine.selected_categories());
    });
    forward_events(app, bus);
}

fn run_clear(app: &mut App) {
    let mut bus = EventBus::default();
    with_engine(app, |engine| {
        engine.set_categories(BTreeSet::new(), &mut bus);
    });
    forward_events(app, bus);
}

fn run_progress(app: &mut App) {
    with_engine(app, |engine| {
        for line in engine.progress() {
            println!("{}  {}/{}", line.category, line.played, line.total);
        }
    });
}

fn run_show(app: &mut App) {
    with_engine(app, |engine| match &engine.session().current {
        Some(card) => {
            let guide_visible = engine.session().guide_visible;
            print_card(card, guide_visible);
        }
        None => println!("no card drawn yet"),
    });
}

fn run_state(app: &mut App) {
    with_engine(app, |engine| {
        let catalog = serde_json::to_string_pretty(&engine.catalog().snapshot())
            .unwrap_or_else(|err| err.to_string());
        let session = serde_json::to_string_pretty(&engine.session().snapshot())
            .unwrap_or_else(|err| err.to_string());
        let progress = serde_json::to_string_pretty(&engine.progress())
            .unwrap_or_else(|err| err.to_string());
        println!("catalog: {catalog}");
        println!("session: {session}");
        println!("progress: {progress}");
    });
}

fn print_card(card: &Card, guide_visible: bool) {
    println!("[{} | {}] {}", card.id, card.category, card.prompt);
    if !card.question.is_empty() {
        println!("question: {}", card.question);
    }
    if guide_visible && !card.guide.is_empty() {
        println!("guide: {}", card.guide);
    }
    if !card.source_refs.is_empty() {
        println!("sources: {}", card.source_refs);
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Auto => "auto",
        Mode::Info => "info",
        Mode::Dilemma => "dilemme",
    }
}

fn forward_events(app: &mut App, mut bus: EventBus) {
    for event in bus.drain() {
        app.events.push(event);
    }
}

fn print_events(app: &mut App) {
    for event in app.events.drain() {
        match event {
            Event::CatalogLoaded {
                info,
                dilemmas,
                categories,
                skipped,
            } => println!(
                "catalog ready: {info} info, {dilemmas} dilemme, {categories} categories ({skipped} rows skipped)"
            ),
            Event::CardDrawn { remaining, .. } => {
                println!("({remaining} cards left in the pool)")
            }
            Event::PoolExhausted { played, pool } => {
                println!("(played {played} of {pool})")
            }
            Event::SessionReset { reason } => {
                let reason = match reason {
                    ResetReason::Manual => "restart",
                    ResetReason::ModeChanged => "mode changed",
                    ResetReason::FilterChanged => "filter changed",
                };
                println!("(session reset: {reason})");
            }
        }
    }
}

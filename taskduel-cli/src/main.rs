mod config;
mod output;
mod store;

use chrono::Utc;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use taskduel_core::{
    add_working_days, select_next_pair, should_continue_session, ItemId, Timestamp,
};

use crate::store::Store;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "taskduel", version, about = "Rank your todo list with pairwise comparisons")]
struct Cli {
    /// Path to the store file (default: ~/.local/share/taskduel/store.json)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Path to config file (default: ~/.config/taskduel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description
        text: String,
    },
    /// Show the single most important task
    Focus,
    /// List tasks by section, strongest first
    List {
        /// Include completed and removed tasks
        #[arg(long)]
        all: bool,
    },
    /// Run a comparison session: answer "which matters more?" until the
    /// top spot is settled
    Rank,
    /// Review tasks that haven't been touched in a while
    Checkin,
    /// Mark a task as done
    Done { id: ItemId },
    /// Snooze a task for a number of working days (weekends don't count)
    Snooze {
        id: ItemId,
        /// Working days to snooze for
        #[arg(long)]
        days: Option<u32>,
    },
    /// Wake a snoozed task early
    Wake { id: ItemId },
    /// Bring a completed or removed task back into play
    Restore { id: ItemId },
    /// Remove a task. Its past comparisons still inform the ranking
    /// unless --purge is given.
    Rm {
        id: ItemId,
        /// Also erase every comparison the task appears in
        #[arg(long)]
        purge: bool,
    },
    /// Create a default config file at ~/.config/taskduel/config.toml
    Init,
}

fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}

fn load_store(path: &Path) -> Store {
    Store::load(path).unwrap_or_else(|e| bail(e))
}

fn save_store(store: &Store, path: &Path) {
    store.save(path).unwrap_or_else(|e| bail(e));
}

fn main() {
    let cli = Cli::parse();

    // Resolve store path: CLI flag > config file > default location
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    let store_path = cli
        .store
        .clone()
        .or_else(|| cfg.store_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(config::default_store_path);

    match cli.command {
        Commands::Add { text } => run_add(&store_path, &text),
        Commands::Focus => run_focus(&store_path),
        Commands::List { all } => run_list(&store_path, all),
        Commands::Rank => run_rank(&store_path),
        Commands::Checkin => run_checkin(&store_path),
        Commands::Done { id } => run_done(&store_path, id),
        Commands::Snooze { id, days } => {
            run_snooze(&store_path, id, days.or(cfg.snooze_days).unwrap_or(1))
        }
        Commands::Wake { id } => run_wake(&store_path, id),
        Commands::Restore { id } => run_restore(&store_path, id),
        Commands::Rm { id, purge } => run_rm(&store_path, id, purge),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
        }
    }
}

fn run_add(store_path: &Path, text: &str) {
    if text.trim().is_empty() {
        bail("Task text must not be empty");
    }
    let mut store = load_store(store_path);
    let id = store.add_task(text.trim(), now_millis()).id;
    save_store(&store, store_path);
    println!("Added task #{id}: {}", text.trim());
}

fn run_focus(store_path: &Path) {
    let store = load_store(store_path);
    let now = now_millis();
    match store.top_task(now) {
        Some(task) => output::print_focus(task),
        None => println!("No eligible tasks. Add some with `taskduel add`."),
    }
    if let Some(stale) = store.stale_task(now) {
        println!(
            "\"{}\" hasn't been touched in a while — run `taskduel checkin`.",
            stale.text
        );
    }
    if store.needs_prioritization(now) {
        println!("The ranking is out of date — run `taskduel rank`.");
    }
}

fn run_list(store_path: &Path, all: bool) {
    let store = load_store(store_path);
    let now = now_millis();
    let sections = store.sections(now);

    output::print_section("Active", &sections.active, now);
    output::print_section("Snoozed", &sections.snoozed, now);
    if all {
        output::print_section("Completed", &sections.completed, now);
        output::print_section("No longer required", &sections.removed, now);
    }

    let shown = sections.active.len()
        + sections.snoozed.len()
        + if all { sections.completed.len() + sections.removed.len() } else { 0 };
    if shown == 0 {
        println!("No tasks.");
    }
    if store.needs_prioritization(now) {
        println!();
        println!("The ranking is out of date — run `taskduel rank`.");
    }
}

fn run_done(store_path: &Path, id: ItemId) {
    let mut store = load_store(store_path);
    let now = now_millis();
    let task = store
        .find_task_mut(id)
        .unwrap_or_else(|| bail(format!("No task with ID {id}")));
    task.completed_at = Some(now);
    let text = task.text.clone();
    save_store(&store, store_path);
    println!("Done: {text}");
}

fn run_snooze(store_path: &Path, id: ItemId, days: u32) {
    if days == 0 {
        bail("--days must be at least 1");
    }
    let mut store = load_store(store_path);
    let until = add_working_days(Utc::now(), days).timestamp_millis();
    let task = store
        .find_task_mut(id)
        .unwrap_or_else(|| bail(format!("No task with ID {id}")));
    task.deferred_until = Some(until);
    task.last_checked_at = Some(now_millis());
    let text = task.text.clone();
    save_store(&store, store_path);
    println!("Snoozed \"{text}\" until {}", output::format_day(until));
}

fn run_wake(store_path: &Path, id: ItemId) {
    let mut store = load_store(store_path);
    let task = store
        .find_task_mut(id)
        .unwrap_or_else(|| bail(format!("No task with ID {id}")));
    if task.deferred_until.is_none() {
        bail(format!("Task #{id} is not snoozed"));
    }
    task.deferred_until = None;
    let text = task.text.clone();
    save_store(&store, store_path);
    println!("Woke \"{text}\" — back in the ranking.");
}

fn run_restore(store_path: &Path, id: ItemId) {
    let mut store = load_store(store_path);
    let task = store
        .find_task_mut(id)
        .unwrap_or_else(|| bail(format!("No task with ID {id}")));
    if task.completed_at.is_none() && task.removed_at.is_none() {
        bail(format!("Task #{id} is neither completed nor removed"));
    }
    task.completed_at = None;
    task.removed_at = None;
    let text = task.text.clone();
    save_store(&store, store_path);
    println!("Restored \"{text}\" — back in the ranking.");
}

fn run_rm(store_path: &Path, id: ItemId, purge: bool) {
    let mut store = load_store(store_path);
    if store.find_task_mut(id).is_none() {
        bail(format!("No task with ID {id}"));
    }
    if purge {
        store.purge_task(id);
        println!("Purged task #{id} and its comparison history.");
    } else {
        store.find_task_mut(id).unwrap().removed_at = Some(now_millis());
        println!("Removed task #{id}.");
    }
    save_store(&store, store_path);
}

enum Choice {
    First,
    Second,
    Quit,
}

/// Present one pair and read the user's verdict from stdin.
fn prompt_choice(first: &str, second: &str) -> Choice {
    println!();
    println!("Which matters more?");
    println!("  [1] {first}");
    println!("  [2] {second}");
    println!("  [q] stop for now");
    print!("> ");
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return Choice::Quit, // EOF
            Ok(_) => match line.trim() {
                "1" => return Choice::First,
                "2" => return Choice::Second,
                "q" | "Q" => return Choice::Quit,
                other => {
                    println!("Unrecognized answer \"{other}\" — enter 1, 2, or q.");
                    print!("> ");
                    let _ = io::stdout().flush();
                }
            },
            Err(e) => bail(format!("Failed to read from stdin: {e}")),
        }
    }
}

/// The comparison session loop: select a pair, ask, record, repeat until the
/// engine has nothing left to ask or the top spot is settled.
fn run_rank(store_path: &Path) {
    let mut store = load_store(store_path);

    let Some(mut pair) = select_next_pair(&store.items(), &store.outcomes, now_millis()) else {
        println!("Nothing to compare — the ranking is fully settled.");
        return;
    };

    let mut asked = 0usize;
    loop {
        let (king_id, contender_id) = pair;
        let king_text = store.tasks.iter().find(|t| t.id == king_id).map(|t| t.text.clone());
        let contender_text = store.tasks.iter().find(|t| t.id == contender_id).map(|t| t.text.clone());
        let (Some(king_text), Some(contender_text)) = (king_text, contender_text) else {
            bail("Store is inconsistent: selected pair references a missing task");
        };

        let (winner_id, loser_id) = match prompt_choice(&king_text, &contender_text) {
            Choice::First => (king_id, contender_id),
            Choice::Second => (contender_id, king_id),
            Choice::Quit => break,
        };

        let now = now_millis();
        store.record_outcome(winner_id, loser_id, now);
        save_store(&store, store_path);
        asked += 1;

        let now = now_millis();
        let next = select_next_pair(&store.items(), &store.outcomes, now);
        let top = store.top_task(now).map(|t| t.id);
        if !should_continue_session(asked, next, top) {
            break;
        }
        pair = next.expect("continue decision implies a next pair");
    }

    println!();
    println!("Session over after {asked} comparison{}.", if asked == 1 { "" } else { "s" });
    if let Some(task) = store.top_task(now_millis()) {
        output::print_focus(task);
    }
}

enum CheckinChoice {
    Keep,
    Snooze(u32),
    Remove,
    Quit,
}

/// Present one stale task and read the user's verdict from stdin.
fn prompt_checkin(text: &str) -> CheckinChoice {
    println!();
    println!("You haven't touched this in a while. What's the status?");
    println!("  {text}");
    println!("  [k] still important  [3] snooze 3 days  [5] snooze 5 days  [r] remove  [q] stop");
    print!("> ");
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return CheckinChoice::Quit, // EOF
            Ok(_) => match line.trim() {
                "k" | "K" => return CheckinChoice::Keep,
                "3" => return CheckinChoice::Snooze(3),
                "5" => return CheckinChoice::Snooze(5),
                "r" | "R" => return CheckinChoice::Remove,
                "q" | "Q" => return CheckinChoice::Quit,
                other => {
                    println!("Unrecognized answer \"{other}\" — enter k, 3, 5, r, or q.");
                    print!("> ");
                    let _ = io::stdout().flush();
                }
            },
            Err(e) => bail(format!("Failed to read from stdin: {e}")),
        }
    }
}

/// The check-in loop: walk stale tasks strongest-first, asking whether each
/// is still worth tracking.
fn run_checkin(store_path: &Path) {
    let mut store = load_store(store_path);
    let mut reviewed = 0usize;

    loop {
        let now = now_millis();
        let Some(task) = store.stale_task(now) else {
            break;
        };
        let id = task.id;
        let text = task.text.clone();

        match prompt_checkin(&text) {
            CheckinChoice::Keep => {
                store.find_task_mut(id).unwrap().last_checked_at = Some(now);
                println!("Kept \"{text}\".");
            }
            CheckinChoice::Snooze(days) => {
                let until = add_working_days(Utc::now(), days).timestamp_millis();
                let task = store.find_task_mut(id).unwrap();
                task.deferred_until = Some(until);
                task.last_checked_at = Some(now);
                println!("Snoozed \"{text}\" until {}", output::format_day(until));
            }
            CheckinChoice::Remove => {
                store.find_task_mut(id).unwrap().removed_at = Some(now);
                println!("Removed \"{text}\".");
            }
            CheckinChoice::Quit => break,
        }
        save_store(&store, store_path);
        reviewed += 1;
    }

    if reviewed == 0 {
        println!("Nothing needs a check-in.");
    } else {
        println!("Checked in on {reviewed} task{}.", if reviewed == 1 { "" } else { "s" });
    }
}

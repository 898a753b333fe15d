/// JSON file store for tasks and comparison outcomes.
///
/// The store owns everything the core refuses to: IDs, timestamps, and
/// persistence. Tasks carry caller-side bookkeeping on top of the fields the
/// engine reads; outcomes are appended, never rewritten, except when a task
/// is purged outright.
use serde::{Deserialize, Serialize};
use std::path::Path;

use taskduel_core::{update_ratings, Item, ItemId, Outcome, Timestamp, INITIAL_STRENGTH};

/// A task untouched (not ranked, checked in, or snoozed) for this long is
/// offered for check-in.
pub const STALE_AFTER_MS: i64 = 3 * 24 * 60 * 60 * 1000;

/// Suggest a ranking session once this much time has passed since the last
/// resolved comparison.
pub const RANK_NAG_AFTER_MS: i64 = 60 * 60 * 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: ItemId,
    pub text: String,
    pub strength: f64,
    pub created_at: Timestamp,
    /// Set when the task is marked done; a done task is out of ranking.
    pub completed_at: Option<Timestamp>,
    /// Snoozed until this instant (working-day arithmetic, see `snooze`).
    pub deferred_until: Option<Timestamp>,
    /// Set when the task is removed. Its outcomes stay in history so that
    /// inference between surviving tasks is preserved.
    pub removed_at: Option<Timestamp>,
    pub last_ranked_at: Option<Timestamp>,
    /// Last time the user touched this task at all: ranked it, snoozed it,
    /// or confirmed it at a check-in. Drives staleness detection.
    #[serde(default)]
    pub last_checked_at: Option<Timestamp>,
}

impl Task {
    /// Snapshot for the ranking engine.
    pub fn to_item(&self) -> Item {
        Item {
            id: self.id,
            label: self.text.clone(),
            strength: self.strength,
            active: self.completed_at.is_none(),
            deferred_until: self.deferred_until,
            withdrawn_at: self.removed_at,
            last_ranked_at: self.last_ranked_at,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    pub tasks: Vec<Task>,
    pub outcomes: Vec<Outcome>,
    /// When any comparison was last resolved, across all tasks. Plain
    /// caller-level bookkeeping, stored and threaded explicitly — the
    /// engine knows nothing about it.
    #[serde(default)]
    pub last_prioritized_at: Option<Timestamp>,
}

/// Tasks partitioned for the list view, each section strongest-first.
#[derive(Default)]
pub struct Sections<'a> {
    pub active: Vec<&'a Task>,
    pub snoozed: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
    pub removed: Vec<&'a Task>,
}

impl Store {
    /// Load from `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Store, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| format!("Corrupt store at {}: {e}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Store::default()),
            Err(e) => Err(format!("Failed to read {}: {e}", path.display())),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {e}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize store: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }

    /// Create a task with the next free ID and the baseline strength.
    pub fn add_task(&mut self, text: &str, now: Timestamp) -> &Task {
        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            strength: INITIAL_STRENGTH,
            created_at: now,
            completed_at: None,
            deferred_until: None,
            removed_at: None,
            last_ranked_at: None,
            last_checked_at: None,
        });
        self.tasks.last().unwrap()
    }

    pub fn find_task_mut(&mut self, id: ItemId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Engine-ready snapshots of all tasks, in stored order.
    pub fn items(&self) -> Vec<Item> {
        self.tasks.iter().map(Task::to_item).collect()
    }

    /// Apply one resolved comparison: update both strengths, stamp both
    /// tasks, append the outcome to history.
    pub fn record_outcome(&mut self, winner_id: ItemId, loser_id: ItemId, now: Timestamp) {
        let Some(winner) = self.tasks.iter().find(|t| t.id == winner_id) else {
            return;
        };
        let Some(loser) = self.tasks.iter().find(|t| t.id == loser_id) else {
            return;
        };

        let update = update_ratings(winner.strength, loser.strength);

        for task in &mut self.tasks {
            if task.id == winner_id {
                task.strength = update.winner;
                task.last_ranked_at = Some(now);
                task.last_checked_at = Some(now);
            } else if task.id == loser_id {
                task.strength = update.loser;
                task.last_ranked_at = Some(now);
                task.last_checked_at = Some(now);
            }
        }

        self.outcomes.push(Outcome { winner_id, loser_id, timestamp: now });
        self.last_prioritized_at = Some(now);
    }

    /// Drop a task and, with it, every outcome it appears in. Used for
    /// permanent deletion; plain removal keeps history for inference.
    pub fn purge_task(&mut self, id: ItemId) {
        self.tasks.retain(|t| t.id != id);
        self.outcomes
            .retain(|o| o.winner_id != id && o.loser_id != id);
    }

    /// The strongest eligible task, with the same tiebreak the engine uses
    /// (stored order wins among equals).
    pub fn top_task(&self, now: Timestamp) -> Option<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.to_item().is_eligible(now))
            .fold(None, |best: Option<&Task>, t| match best {
                Some(b) if b.strength >= t.strength => Some(b),
                _ => Some(t),
            })
    }

    /// The strongest eligible task nobody has touched in `STALE_AFTER_MS`,
    /// if any. A task counts as touched when it was created, ranked,
    /// snoozed, or confirmed at a check-in.
    pub fn stale_task(&self, now: Timestamp) -> Option<&Task> {
        let mut eligible: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.to_item().is_eligible(now))
            .collect();
        eligible.sort_by(|a, b| {
            b.strength
                .partial_cmp(&a.strength)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        eligible
            .into_iter()
            .find(|t| t.last_checked_at.unwrap_or(t.created_at) < now - STALE_AFTER_MS)
    }

    /// Whether a ranking session is overdue: at least two eligible tasks,
    /// and either some of them have never been ranked or no comparison has
    /// been resolved in `RANK_NAG_AFTER_MS`.
    pub fn needs_prioritization(&self, now: Timestamp) -> bool {
        let eligible: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.to_item().is_eligible(now))
            .collect();
        if eligible.len() < 2 {
            return false;
        }
        eligible.iter().any(|t| t.last_ranked_at.is_none())
            || self
                .last_prioritized_at
                .map_or(true, |at| now - at > RANK_NAG_AFTER_MS)
    }

    /// Partition tasks for the list view: one pass over the tasks in
    /// strength-descending order, routed to the first matching section.
    pub fn sections(&self, now: Timestamp) -> Sections<'_> {
        let mut ordered: Vec<&Task> = self.tasks.iter().collect();
        ordered.sort_by(|a, b| {
            b.strength
                .partial_cmp(&a.strength)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut sections = Sections::default();
        for task in ordered {
            if task.removed_at.is_some() {
                sections.removed.push(task);
            } else if task.completed_at.is_some() {
                sections.completed.push(task);
            } else if task.deferred_until.map_or(false, |until| until > now) {
                sections.snoozed.push(task);
            } else {
                sections.active.push(task);
            }
        }
        sections
    }
}

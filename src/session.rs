//! Interactive menu loop.
//!
//! The session renders snapshots from the [`TaskStore`] with 1-based display
//! indices and translates a chosen index back into the stable [`TaskId`]
//! before calling a mutating store operation. Every mutation re-fetches a
//! fresh snapshot first; an index is never resolved against a snapshot
//! that predates a mutation.

use crate::error::PromptError;
use crate::format;
use crate::prompt::Prompt;
use crate::store::TaskStore;
use crate::types::{DEFAULT_PRIORITY, Priority, TaskEntry, TaskId, TaskRow};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use tracing::{debug, info, warn};

/// Menu entries, selected by a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Complete,
    UpdatePriority,
    Exit,
}

impl MenuChoice {
    /// Valid answers at the menu prompt.
    pub const KEYS: [&'static str; 5] = ["1", "2", "3", "4", "5"];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Complete),
            "4" => Some(MenuChoice::UpdatePriority),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked "Exit".
    Exited,
    /// The user interrupted a prompt.
    Interrupted,
}

/// Behaviour knobs derived from configuration.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Offered as the default at the add-task priority prompt.
    pub default_priority: Priority,
    /// Clear the terminal before each menu redraw.
    pub clear_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_priority: DEFAULT_PRIORITY,
            clear_screen: true,
        }
    }
}

/// Map a 1-based display index onto the id at that position of `snapshot`.
///
/// Returns `None` when `index` is outside `1..=snapshot.len()`.
pub fn resolve_display_index(snapshot: &[TaskEntry], index: i64) -> Option<TaskId> {
    let position = usize::try_from(index).ok()?.checked_sub(1)?;
    snapshot.get(position).map(|entry| entry.id)
}

/// Menu-driven controller owning the store for the lifetime of the process.
pub struct Session<P, W> {
    store: TaskStore,
    prompt: P,
    out: W,
    options: SessionOptions,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub fn new(store: TaskStore, prompt: P, out: W, options: SessionOptions) -> Self {
        Self {
            store,
            prompt,
            out,
            options,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Tear the session down into its store, prompt and writer.
    pub fn into_parts(self) -> (TaskStore, P, W) {
        (self.store, self.prompt, self.out)
    }

    /// Run the menu loop until the user exits or interrupts.
    ///
    /// Interrupts end the loop with a message and are not errors; only
    /// terminal I/O failures are returned as `Err`.
    pub fn run(&mut self) -> Result<SessionEnd, PromptError> {
        info!("Session started");
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!(active = self.store.len(), "Session exited");
                    return Ok(SessionEnd::Exited);
                }
                Err(PromptError::Interrupted) => {
                    writeln!(self.out, "\n{}", format::terminated_by_user())?;
                    info!(
                        error_code = %PromptError::Interrupted.code(),
                        "Session interrupted by user"
                    );
                    return Ok(SessionEnd::Interrupted);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Draw the menu, read one choice and carry it out.
    pub fn step(&mut self) -> Result<Flow, PromptError> {
        if self.options.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.out, "{}", format::render_menu())?;
        self.out.flush()?;

        let key = self.prompt.choice("\nEnter your choice", &MenuChoice::KEYS)?;
        let Some(choice) = MenuChoice::from_key(&key) else {
            warn!(key = %key, "Prompt returned an unknown menu choice");
            return Ok(Flow::Continue);
        };
        debug!(?choice, "Menu choice");

        let flow = self.handle(choice)?;
        if flow == Flow::Continue {
            self.prompt.pause("\nPress Enter to continue")?;
        }
        Ok(flow)
    }

    /// Carry out a single menu action.
    pub fn handle(&mut self, choice: MenuChoice) -> Result<Flow, PromptError> {
        match choice {
            MenuChoice::Add => self.add_task()?,
            MenuChoice::List => {
                self.list_tasks(false)?;
            }
            MenuChoice::Complete => self.complete_task()?,
            MenuChoice::UpdatePriority => self.update_priority()?,
            MenuChoice::Exit => {
                writeln!(self.out, "\n{}", format::farewell())?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn add_task(&mut self) -> Result<(), PromptError> {
        let description = self.prompt.text("\nEnter task description")?;
        let priority = self
            .prompt
            .integer("Enter priority", Some(self.options.default_priority))?;

        let id = self.store.add(description.clone(), priority);
        info!(task_id = id.0, priority, "Added task");
        writeln!(self.out, "{}", format::added_message(&description, priority))?;
        Ok(())
    }

    /// Render the current snapshot and return it so the caller can resolve
    /// indices against exactly what was shown.
    fn list_tasks(&mut self, show_indices: bool) -> Result<Vec<TaskEntry>, PromptError> {
        let snapshot = self.store.active_tasks_ordered();
        if snapshot.is_empty() {
            writeln!(self.out, "{}", format::no_tasks_message())?;
            return Ok(snapshot);
        }

        let rows = TaskRow::from_entries(&snapshot, show_indices);
        write!(self.out, "{}", format::render_task_table(&rows))?;
        writeln!(
            self.out,
            "{}",
            format::summary_line(self.store.len(), self.store.completed_count())
        )?;
        Ok(snapshot)
    }

    fn complete_task(&mut self) -> Result<(), PromptError> {
        let snapshot = self.list_tasks(true)?;
        if snapshot.is_empty() {
            return Ok(());
        }

        let index = self.prompt.integer("\nEnter task number to complete", None)?;
        let Some(id) = resolve_display_index(&snapshot, index) else {
            return self.report_invalid_index(index);
        };

        match self.store.complete_by_identity(id) {
            Ok(description) => {
                info!(task_id = id.0, "Completed task");
                writeln!(self.out, "{}", format::completed_message(&description))?;
                Ok(())
            }
            Err(e) => {
                warn!(task_id = id.0, error_code = %e.code(), error = %e, "Completion failed");
                self.report_invalid_index(index)
            }
        }
    }

    fn update_priority(&mut self) -> Result<(), PromptError> {
        let snapshot = self.list_tasks(true)?;
        if snapshot.is_empty() {
            return Ok(());
        }

        let index = self.prompt.integer("\nEnter task number to update", None)?;
        let new_priority = self.prompt.integer("Enter new priority", None)?;
        let Some(id) = resolve_display_index(&snapshot, index) else {
            return self.report_invalid_index(index);
        };

        match self.store.update_priority_by_identity(id, new_priority) {
            Ok(description) => {
                info!(task_id = id.0, new_priority, "Updated task priority");
                writeln!(
                    self.out,
                    "{}",
                    format::updated_message(&description, new_priority)
                )?;
                Ok(())
            }
            Err(e) => {
                warn!(task_id = id.0, error_code = %e.code(), error = %e, "Priority update failed");
                self.report_invalid_index(index)
            }
        }
    }

    fn report_invalid_index(&mut self, index: i64) -> Result<(), PromptError> {
        warn!(index, "Invalid task number");
        writeln!(self.out, "{}", format::invalid_task_number())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;
    use std::collections::VecDeque;

    /// Prompt that replays canned answers without validating them.
    #[derive(Default)]
    struct CannedPrompt {
        choices: VecDeque<&'static str>,
        pauses: usize,
    }

    impl Prompt for CannedPrompt {
        fn choice(&mut self, _prompt: &str, _choices: &[&str]) -> Result<String, PromptError> {
            self.choices
                .pop_front()
                .map(str::to_string)
                .ok_or(PromptError::Interrupted)
        }

        fn text(&mut self, _prompt: &str) -> Result<String, PromptError> {
            Err(PromptError::Interrupted)
        }

        fn integer(&mut self, _prompt: &str, _default: Option<i64>) -> Result<i64, PromptError> {
            Err(PromptError::Interrupted)
        }

        fn pause(&mut self, _prompt: &str) -> Result<(), PromptError> {
            self.pauses += 1;
            Ok(())
        }
    }

    fn snapshot(n: u64) -> Vec<TaskEntry> {
        (0..n)
            .map(|i| TaskEntry {
                priority: 1,
                id: TaskId(i * 10),
                task: Task::new(TaskId(i * 10), format!("task {i}"), 1),
            })
            .collect()
    }

    #[test]
    fn menu_keys_round_trip() {
        for key in MenuChoice::KEYS {
            assert!(MenuChoice::from_key(key).is_some());
        }
        assert_eq!(MenuChoice::from_key("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_key("6"), None);
    }

    #[test]
    fn unknown_menu_key_redraws_without_pausing() {
        let prompt = CannedPrompt {
            choices: VecDeque::from(["9", "2", "5"]),
            ..CannedPrompt::default()
        };
        let options = SessionOptions {
            clear_screen: false,
            ..SessionOptions::default()
        };
        let mut session = Session::new(TaskStore::new(), prompt, Vec::new(), options);

        assert_eq!(session.run().unwrap(), SessionEnd::Exited);

        let (_, prompt, out) = session.into_parts();
        assert_eq!(prompt.pauses, 1);
        let screen = String::from_utf8(out).unwrap();
        assert_eq!(screen.matches("Task Manager").count(), 3);
    }

    #[test]
    fn resolve_display_index_is_one_based() {
        let snap = snapshot(3);
        assert_eq!(resolve_display_index(&snap, 1), Some(TaskId(0)));
        assert_eq!(resolve_display_index(&snap, 3), Some(TaskId(20)));
    }

    #[test]
    fn resolve_display_index_rejects_out_of_range() {
        let snap = snapshot(2);
        assert_eq!(resolve_display_index(&snap, 0), None);
        assert_eq!(resolve_display_index(&snap, 3), None);
        assert_eq!(resolve_display_index(&snap, -1), None);
        assert_eq!(resolve_display_index(&[], 1), None);
    }
}

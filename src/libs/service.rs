//! Task service: validation, defaulting and read-modify-write orchestration
//! on top of the `Tasks` store.
//!
//! The service is synchronous and cheap to clone; every clone shares the same
//! underlying connection. Async callers are expected to move calls onto a
//! blocking thread (see `graphql::run_blocking`).
//!
//! ## Usage
//!
//! ```rust
//! use taskql::db::db::Db;
//! use taskql::libs::service::TaskService;
//! use taskql::libs::task::{NewTask, Priority};
//!
//! let service = TaskService::new(Db::in_memory()?)?;
//! let task = service.create(NewTask::new("Buy milk"))?;
//! assert_eq!(task.priority, Priority::Medium);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::error::TaskResult;
use crate::libs::messages::Message;
use crate::libs::task::{validate_title, NewTask, Priority, Task, TaskFilter, TaskStats, TaskUpdate};
use crate::{msg_debug, msg_info};

#[derive(Clone)]
pub struct TaskService {
    tasks: Tasks,
}

impl TaskService {
    /// Creates a service over `db`, making sure the tasks table exists.
    pub fn new(db: Db) -> TaskResult<TaskService> {
        Ok(TaskService { tasks: Tasks::new(db)? })
    }

    /// Creates a task.
    ///
    /// The title must not be blank. Priority defaults to `MEDIUM`; the id and
    /// both timestamps are assigned here.
    #[tracing::instrument(skip(self))]
    pub fn create(&self, input: NewTask) -> TaskResult<Task> {
        let title = validate_title(&input.title)?;
        let task = Task::new(title, input.description, input.priority.unwrap_or_default());
        self.tasks.insert(&task)?;

        msg_info!(Message::TaskCreated(task.id.clone()));
        Ok(task)
    }

    #[tracing::instrument(skip(self))]
    pub fn get(&self, id: &str) -> TaskResult<Option<Task>> {
        self.tasks.get_by_id(id)
    }

    /// Lists tasks newest first, optionally restricted by completion state.
    #[tracing::instrument(skip(self))]
    pub fn list(&self, completed: Option<bool>) -> TaskResult<Vec<Task>> {
        self.tasks.list_all(TaskFilter::from(completed))
    }

    #[tracing::instrument(skip(self))]
    pub fn list_by_priority(&self, priority: Priority) -> TaskResult<Vec<Task>> {
        self.tasks.list_by_priority(priority)
    }

    /// Substring search over title and description, ignoring ASCII case.
    #[tracing::instrument(skip(self))]
    pub fn search(&self, term: &str) -> TaskResult<Vec<Task>> {
        self.tasks.search(term)
    }

    /// Applies the fields present in `changes` and bumps `updated_at`.
    ///
    /// Validation runs before storage is touched, so a rejected update never
    /// leaves a partial write behind.
    #[tracing::instrument(skip(self))]
    pub fn update(&self, id: &str, changes: TaskUpdate) -> TaskResult<Task> {
        let changes = changes.validated()?;
        let task = self.tasks.modify(id, |task| {
            changes.apply_to(task);
            task.touch();
        })?;

        msg_info!(Message::TaskUpdated(task.id.clone()));
        Ok(task)
    }

    /// Deletes a task. Deleting an id that does not exist succeeds as well.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: &str) -> TaskResult<bool> {
        match self.tasks.delete(id)? {
            0 => msg_debug!(Message::TaskDeleteMissing(id.to_string())),
            _ => msg_info!(Message::TaskDeleted(id.to_string())),
        }
        Ok(true)
    }

    /// Flips `completed` and bumps `updated_at`.
    #[tracing::instrument(skip(self))]
    pub fn toggle_complete(&self, id: &str) -> TaskResult<Task> {
        let task = self.tasks.modify(id, |task| {
            task.completed = !task.completed;
            task.touch();
        })?;

        msg_info!(Message::TaskToggled(task.id.clone(), task.completed));
        Ok(task)
    }

    #[tracing::instrument(skip(self))]
    pub fn stats(&self) -> TaskResult<TaskStats> {
        self.tasks.count_stats()
    }
}

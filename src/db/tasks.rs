use super::db::Db;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{Priority, Task, TaskFilter, TaskStats};
use rusqlite::{ffi, params, OptionalExtension, Params, Row, TransactionBehavior};

pub(crate) const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    priority TEXT NOT NULL DEFAULT 'MEDIUM' CHECK (priority IN ('LOW', 'MEDIUM', 'HIGH')),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";
const INSERT_TASK: &str = "INSERT INTO tasks (id, title, description, completed, priority, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, completed = ?4, priority = ?5, updated_at = ?6 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, completed, priority, created_at, updated_at FROM tasks WHERE id = ?1";
// Equal timestamps fall back to insertion order, newest first.
const SELECT_ALL_TASKS: &str = "SELECT id, title, description, completed, priority, created_at, updated_at FROM tasks
    ORDER BY created_at DESC, rowid DESC";
const SELECT_TASKS_BY_COMPLETED: &str = "SELECT id, title, description, completed, priority, created_at, updated_at FROM tasks
    WHERE completed = ?1
    ORDER BY created_at DESC, rowid DESC";
const SELECT_TASKS_BY_PRIORITY: &str = "SELECT id, title, description, completed, priority, created_at, updated_at FROM tasks
    WHERE priority = ?1
    ORDER BY created_at DESC, rowid DESC";
// LIKE is case-insensitive for ASCII in SQLite.
const SEARCH_TASKS: &str = "SELECT id, title, description, completed, priority, created_at, updated_at FROM tasks
    WHERE title LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\'
    ORDER BY created_at DESC, rowid DESC";
const COUNT_STATS: &str = "SELECT
    COUNT(*),
    COALESCE(SUM(CASE WHEN completed THEN 1 ELSE 0 END), 0),
    COALESCE(SUM(CASE WHEN priority = 'HIGH' THEN 1 ELSE 0 END), 0)
    FROM tasks";

/// Persistence for `Task` rows. No business rules live here.
#[derive(Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: Db) -> TaskResult<Tasks> {
        let tasks = Tasks { db };
        tasks.create_table()?;
        Ok(tasks)
    }

    /// Ensures the tasks table exists. Safe to call any number of times.
    pub fn create_table(&self) -> TaskResult<()> {
        self.db.conn().execute(SCHEMA_TASKS, [])?;
        Ok(())
    }

    pub fn insert(&self, task: &Task) -> TaskResult<()> {
        self.db
            .conn()
            .execute(
                INSERT_TASK,
                params![task.id, task.title, task.description, task.completed, task.priority, task.created_at, task.updated_at],
            )
            .map_err(|err| match err {
                rusqlite::Error::SqliteFailure(failure, _) if failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    TaskError::ConstraintViolation(task.id.clone())
                }
                err => TaskError::Storage(err),
            })?;

        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> TaskResult<Option<Task>> {
        let task = self.db.conn().query_row(SELECT_TASK_BY_ID, params![id], task_from_row).optional()?;
        Ok(task)
    }

    pub fn list_all(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        match filter {
            TaskFilter::All => self.fetch(SELECT_ALL_TASKS, []),
            TaskFilter::Completed => self.fetch(SELECT_TASKS_BY_COMPLETED, params![true]),
            TaskFilter::Pending => self.fetch(SELECT_TASKS_BY_COMPLETED, params![false]),
        }
    }

    pub fn list_by_priority(&self, priority: Priority) -> TaskResult<Vec<Task>> {
        self.fetch(SELECT_TASKS_BY_PRIORITY, params![priority])
    }

    /// Substring search over title and description. `%`, `_` and `\` in
    /// `term` match literally.
    pub fn search(&self, term: &str) -> TaskResult<Vec<Task>> {
        let pattern = format!("%{}%", escape_like(term));
        self.fetch(SEARCH_TASKS, params![pattern])
    }

    /// Writes every mutable column of `task`. `created_at` is left alone.
    pub fn update(&self, task: &Task) -> TaskResult<()> {
        let affected = self.db.conn().execute(
            UPDATE_TASK,
            params![task.id, task.title, task.description, task.completed, task.priority, task.updated_at],
        )?;

        if affected == 0 {
            return Err(TaskError::NotFound(task.id.clone()));
        }
        Ok(())
    }

    /// Loads the task, lets `f` change it and writes it back, all inside one
    /// immediate transaction while holding the connection lock.
    pub fn modify<F>(&self, id: &str, f: F) -> TaskResult<Task>
    where
        F: FnOnce(&mut Task),
    {
        let mut conn = self.db.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut task = tx
            .query_row(SELECT_TASK_BY_ID, params![id], task_from_row)
            .optional()?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        f(&mut task);

        tx.execute(
            UPDATE_TASK,
            params![task.id, task.title, task.description, task.completed, task.priority, task.updated_at],
        )?;
        tx.commit()?;

        Ok(task)
    }

    /// Removes the task and returns the number of deleted rows (0 or 1).
    pub fn delete(&self, id: &str) -> TaskResult<usize> {
        let affected = self.db.conn().execute(DELETE_TASK, params![id])?;
        Ok(affected)
    }

    pub fn count_stats(&self) -> TaskResult<TaskStats> {
        let (total, completed, high_priority): (i64, i64, i64) = self
            .db
            .conn()
            .query_row(COUNT_STATS, [], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

        Ok(TaskStats {
            total,
            completed,
            pending: total - completed,
            high_priority,
        })
    }

    fn fetch<P: Params>(&self, sql: &str, params: P) -> TaskResult<Vec<Task>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(sql)?;
        let tasks = stmt.query_map(params, task_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        priority: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

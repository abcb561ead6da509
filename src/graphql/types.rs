//! GraphQL-facing shapes and their conversions from and to the domain types.

use crate::libs::task::{NewTask, Priority, Task, TaskStats, TaskUpdate};
use async_graphql::{Enum, InputObject, MaybeUndefined, SimpleObject, ID};

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "Priority")]
pub enum PriorityEnum {
    Low,
    Medium,
    High,
}

impl From<Priority> for PriorityEnum {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityEnum::Low,
            Priority::Medium => PriorityEnum::Medium,
            Priority::High => PriorityEnum::High,
        }
    }
}

impl From<PriorityEnum> for Priority {
    fn from(priority: PriorityEnum) -> Self {
        match priority {
            PriorityEnum::Low => Priority::Low,
            PriorityEnum::Medium => Priority::Medium,
            PriorityEnum::High => Priority::High,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Task")]
pub struct TaskObject {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: PriorityEnum,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskObject {
    fn from(task: Task) -> Self {
        Self {
            id: ID(task.id),
            title: task.title,
            description: task.description,
            completed: task.completed,
            priority: task.priority.into(),
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[derive(SimpleObject, Debug, Clone, Copy)]
#[graphql(name = "TaskStats")]
pub struct TaskStatsObject {
    pub total: i32,
    pub completed: i32,
    pub pending: i32,
    pub high_priority: i32,
}

impl From<TaskStats> for TaskStatsObject {
    fn from(stats: TaskStats) -> Self {
        let clamp = |count: i64| i32::try_from(count).unwrap_or(i32::MAX);
        Self {
            total: clamp(stats.total),
            completed: clamp(stats.completed),
            pending: clamp(stats.pending),
            high_priority: clamp(stats.high_priority),
        }
    }
}

#[derive(InputObject, Debug)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<PriorityEnum>,
}

impl From<CreateTaskInput> for NewTask {
    fn from(input: CreateTaskInput) -> Self {
        NewTask {
            title: input.title,
            description: input.description,
            priority: input.priority.map(Priority::from),
        }
    }
}

/// Every field is optional. An explicit `description: null` clears the
/// description; leaving it out keeps the current one.
#[derive(InputObject, Debug, Default)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: MaybeUndefined<String>,
    pub completed: Option<bool>,
    pub priority: Option<PriorityEnum>,
}

impl From<UpdateTaskInput> for TaskUpdate {
    fn from(input: UpdateTaskInput) -> Self {
        let description = match input.description {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(text) => Some(Some(text)),
        };
        TaskUpdate {
            title: input.title,
            description,
            completed: input.completed,
            priority: input.priority.map(Priority::from),
        }
    }
}

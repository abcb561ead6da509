use super::error::run_blocking;
use super::types::{PriorityEnum, TaskObject, TaskStatsObject};
use crate::libs::task::Priority;
use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All tasks, newest first, optionally filtered by completion state.
    async fn tasks(&self, ctx: &Context<'_>, completed: Option<bool>) -> Result<Vec<TaskObject>> {
        let tasks = run_blocking(ctx, move |service| service.list(completed)).await?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }

    /// A single task, or null when the id is unknown.
    async fn task(&self, ctx: &Context<'_>, id: ID) -> Result<Option<TaskObject>> {
        let task = run_blocking(ctx, move |service| service.get(&id)).await?;
        Ok(task.map(TaskObject::from))
    }

    async fn tasks_by_priority(&self, ctx: &Context<'_>, priority: PriorityEnum) -> Result<Vec<TaskObject>> {
        let priority = Priority::from(priority);
        let tasks = run_blocking(ctx, move |service| service.list_by_priority(priority)).await?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }

    /// Substring match on title or description, ignoring ASCII case.
    async fn search_tasks(&self, ctx: &Context<'_>, query: String) -> Result<Vec<TaskObject>> {
        let tasks = run_blocking(ctx, move |service| service.search(&query)).await?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }

    async fn task_stats(&self, ctx: &Context<'_>) -> Result<TaskStatsObject> {
        let stats = run_blocking(ctx, |service| service.stats()).await?;
        Ok(stats.into())
    }
}

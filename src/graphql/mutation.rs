use super::error::run_blocking;
use super::types::{CreateTaskInput, TaskObject, UpdateTaskInput};
use crate::libs::task::{NewTask, TaskUpdate};
use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_task(&self, ctx: &Context<'_>, input: CreateTaskInput) -> Result<TaskObject> {
        let input = NewTask::from(input);
        let task = run_blocking(ctx, move |service| service.create(input)).await?;
        Ok(task.into())
    }

    /// Partial update: only the fields present in `input` change.
    async fn update_task(&self, ctx: &Context<'_>, id: ID, input: UpdateTaskInput) -> Result<TaskObject> {
        let changes = TaskUpdate::from(input);
        let task = run_blocking(ctx, move |service| service.update(&id, changes)).await?;
        Ok(task.into())
    }

    /// Always true once the task is gone, including when it never existed.
    async fn delete_task(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        run_blocking(ctx, move |service| service.delete(&id)).await
    }

    async fn toggle_task_complete(&self, ctx: &Context<'_>, id: ID) -> Result<TaskObject> {
        let task = run_blocking(ctx, move |service| service.toggle_complete(&id)).await?;
        Ok(task.into())
    }
}

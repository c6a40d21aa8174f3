//! Repository for the `tasks` table.

use planner_core::status::{or_default, TASK_PENDING, TASK_PRIORITY_MEDIUM};
use planner_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, event_id, title, description, status, priority, assigned_to, \
    due_date, category, created_at, updated_at";

/// Provides CRUD operations for an event's tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Status defaults to `pending` and priority to `medium`.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (event_id, title, description, status, priority, assigned_to, due_date, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(event_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(or_default(input.status.as_deref(), TASK_PENDING))
            .bind(or_default(input.priority.as_deref(), TASK_PRIORITY_MEDIUM))
            .bind(&input.assigned_to)
            .bind(input.due_date)
            .bind(&input.category)
            .fetch_one(pool)
            .await?;
        tracing::debug!(event_id, task_id = task.id, "Task created");
        Ok(task)
    }

    /// List all tasks for an event, most recently created first.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE event_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied and
    /// `updated_at` is stamped with the current time.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                assigned_to = COALESCE($6, assigned_to),
                due_date = COALESCE($7, due_date),
                category = COALESCE($8, category),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.assigned_to)
            .bind(input.due_date)
            .bind(&input.category)
            .fetch_optional(pool)
            .await?;
        tracing::debug!(task_id = id, found = task.is_some(), "Task updated");
        Ok(task)
    }

    /// Delete a task by ID. Deleting a missing task is not an error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(task_id = id, rows = result.rows_affected(), "Task deleted");
        Ok(())
    }
}

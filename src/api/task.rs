//! Task Endpoints

use serde::Serialize;

use super::{expect_result, read_ok, ApiClient, ApiError, ApiResult};
use crate::models::Board;

// Creation uses snake_case field names; everything the service returns is
// camelCase. The asymmetry is the backend's, not ours.
#[derive(Serialize)]
struct CreateTaskBody<'a> {
    task_name: &'a str,
    task_description: &'a str,
}

#[derive(Serialize)]
struct UpdateStatusBody<'a> {
    status: &'a str,
}

/// Fetch the whole board, grouped by status.
pub async fn get_tasks(api: &ApiClient) -> ApiResult<Board> {
    let response = api.get("/task/getTasks").send().await?;
    expect_result::<Board>(response).await
}

pub async fn create_task(api: &ApiClient, name: &str, description: &str) -> ApiResult<()> {
    let response = api
        .post("/task/createTask")
        .json(&CreateTaskBody {
            task_name: name,
            task_description: description,
        })
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    read_ok(response).await
}

pub async fn delete_task(api: &ApiClient, task_id: &str) -> ApiResult<()> {
    let response = api.delete(&format!("/task/deleteTask/{task_id}")).send().await?;
    read_ok(response).await
}

/// Persist a drag move: the destination column's label becomes the task's
/// status.
pub async fn update_task_status(api: &ApiClient, task_id: &str, status: &str) -> ApiResult<()> {
    let response = api
        .put(&format!("/task/updateTaskStatus/{task_id}"))
        .json(&UpdateStatusBody { status })
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    read_ok(response).await
}

//! Feed Endpoints

use super::{expect_result, read_ok, ApiClient, ApiError, ApiResult};
use crate::models::Post;

/// Posts authored by the current user.
pub async fn get_posts(api: &ApiClient) -> ApiResult<Vec<Post>> {
    let response = api.get("/feed/getPosts").send().await?;
    expect_result::<Vec<Post>>(response).await
}

/// Posts authored by everyone else; disjoint from `get_posts` by
/// construction of the two endpoints.
pub async fn all_posts(api: &ApiClient) -> ApiResult<Vec<Post>> {
    let response = api.get("/feed/allPosts").send().await?;
    expect_result::<Vec<Post>>(response).await
}

/// Upload a new post as multipart form data: `caption` + `file`.
pub async fn create_post(api: &ApiClient, caption: &str, file: &web_sys::File) -> ApiResult<()> {
    let form = web_sys::FormData::new()
        .map_err(|err| ApiError::Network(format!("{err:?}")))?;
    form.append_with_str("caption", caption)
        .map_err(|err| ApiError::Network(format!("{err:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|err| ApiError::Network(format!("{err:?}")))?;

    let response = api
        .post("/feed/createPost")
        .body(form)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await?;
    read_ok(response).await
}

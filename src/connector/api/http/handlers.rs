//! Request handlers for the REST surface.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Multipart, Query, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::Deserialize;
use tracing::debug;

use super::error::ApiError;
use super::server::AppState;
use crate::domain::{ChatMessage, ResultRecord};

const EMPTY_UPLOAD_MESSAGE: &str = "Please select a file to upload";

/// Parameters of an image prompt, read from a form body or the query string.
#[derive(Debug, Deserialize)]
pub struct ImagePromptParams {
    text: String,
    #[serde(rename = "imgUrl")]
    img_url: String,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn model_list(State(state): State<AppState>) -> Result<Json<Vec<ResultRecord>>, ApiError> {
    let models = state.list_models_use_case().execute().await?;
    Ok(Json(models))
}

/// Complete a conversation given as a JSON array of turns.
pub async fn prompt(
    State(state): State<AppState>,
    body: Result<Json<Vec<ChatMessage>>, JsonRejection>,
) -> Result<Json<Vec<ResultRecord>>, ApiError> {
    let Json(turns) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let choices = state.prompt_text_use_case().execute(turns).await?;
    Ok(Json(choices))
}

/// Accept a multipart upload with an `image` part and answer with the hosted URL.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("image").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        upload = Some((bytes.to_vec(), filename));
        break;
    }

    let (bytes, filename) = upload.ok_or_else(|| ApiError::bad_request(EMPTY_UPLOAD_MESSAGE))?;
    let use_case = state.upload_image_use_case()?;
    Ok(use_case.execute(bytes, &filename).await?)
}

/// Read `text` and `imgUrl` from multipart form fields.
async fn multipart_params(request: Request) -> Result<ImagePromptParams, ApiError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?;

    let (mut text, mut img_url) = (None, None);
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        let slot = match field.name() {
            Some("text") => &mut text,
            Some("imgUrl") => &mut img_url,
            _ => continue,
        };
        *slot = Some(
            field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?,
        );
    }

    Ok(ImagePromptParams {
        text: text.ok_or_else(|| ApiError::bad_request("missing field `text`"))?,
        img_url: img_url.ok_or_else(|| ApiError::bad_request("missing field `imgUrl`"))?,
    })
}

/// Prompt with `text` and `imgUrl`, sent url-encoded or as multipart fields in
/// the body, or in the query string.
pub async fn prompt_image(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<Vec<ResultRecord>>, ApiError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.as_bytes().to_vec())
        .unwrap_or_default();

    let params = if content_type.starts_with(b"application/x-www-form-urlencoded") {
        let Form(params) = Form::<ImagePromptParams>::from_request(request, &())
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        params
    } else if content_type.starts_with(b"multipart/form-data") {
        multipart_params(request).await?
    } else {
        let Query(params) = Query::<ImagePromptParams>::try_from_uri(request.uri())
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        params
    };

    debug!("Image prompt for {}", params.img_url);
    let choices = state
        .prompt_image_use_case()
        .execute(&params.text, &params.img_url)
        .await?;
    Ok(Json(choices))
}

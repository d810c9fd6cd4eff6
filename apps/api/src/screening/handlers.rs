//! Axum route handlers for the screening API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_text_blocking, DocumentFormat};
use crate::llm_client::InferenceService;
use crate::models::screening::{Upload, Verdict};
use crate::screening::prompts::build_screening_prompt;
use crate::state::AppState;

/// Multipart field that carries the résumé.
pub const FILE_FIELD: &str = "file";
pub const NO_FILE_PART: &str = "No file part";
pub const NO_SELECTED_FILE: &str = "No selected file";

/// POST /upload
///
/// Screens an uploaded résumé against the configured job description and returns
/// the model's verdict. A missing file or empty filename is a 400; any failure
/// after that is a 500.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Verdict>, AppError> {
    // A body that is not multipart carries no file part at all.
    let multipart = multipart.map_err(|_| AppError::Validation(NO_FILE_PART.to_string()))?;

    let upload = read_upload(multipart).await?;
    let verdict = screen_resume(&state.config.job_description, state.llm.as_ref(), upload).await?;

    Ok(Json(verdict))
}

/// Pulls the first `file` field that carries a filename out of the form.
/// Fields without a filename are plain form values, not files.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::Validation(NO_SELECTED_FILE.to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        return Ok(Upload { filename, bytes });
    }

    Err(AppError::Validation(NO_FILE_PART.to_string()))
}

/// Extract → prompt → inference → trim. The model's reply is passed through
/// without checking it against the expected verdict words.
pub async fn screen_resume(
    job_description: &str,
    llm: &dyn InferenceService,
    upload: Upload,
) -> Result<Verdict, AppError> {
    if DocumentFormat::detect(&upload.filename).is_none() {
        warn!(
            filename = %upload.filename,
            "Unsupported document format; screening with empty résumé text"
        );
    }

    let filename = upload.filename.clone();
    let resume_text = extract_text_blocking(upload.filename, upload.bytes).await?;

    let prompt = build_screening_prompt(job_description, &resume_text);
    let reply = llm.generate(&prompt).await?;
    let result = reply.trim().to_string();

    info!(
        filename = %filename,
        model = llm.model(),
        verdict = %result,
        "Screened résumé"
    );

    Ok(Verdict { result })
}

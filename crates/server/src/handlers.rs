//! # Route Handlers
//!
//! Axum handlers for the `casegen-server`: the HTML form, a health check,
//! the generation endpoint, and the preview lookup.

use crate::{errors::AppError, state::AppState};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use casegen::{CaseStudyDocument, CaseStudyInput};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The minimal web form. It posts the input as JSON to `/generate` and links
/// to the returned preview.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Case Study Generator</title>
<style>
body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; }
label { display: block; margin-top: 1rem; }
input, textarea { width: 100%; box-sizing: border-box; }
#result { margin-top: 1.5rem; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Case Study Generator</h1>
<form id="form">
  <label>Client/Company Name <input name="client_name" required></label>
  <label>Industry/Sector <input name="industry" required></label>
  <label>Main Challenge <textarea name="main_challenge" rows="3" required></textarea></label>
  <label>Solution Provided <textarea name="solution_provided" rows="3" required></textarea></label>
  <label>Location (optional) <input name="location"></label>
  <label>Project Scale (optional) <input name="project_scale"></label>
  <label>Technologies Used (optional, comma-separated) <input name="technologies_used"></label>
  <label>Additional Context (optional) <textarea name="additional_context" rows="2"></textarea></label>
  <button type="submit" style="margin-top:1rem">Generate Case Study</button>
</form>
<div id="result"></div>
<script>
const form = document.getElementById('form');
const result = document.getElementById('result');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  result.textContent = 'Generating…';
  const data = Object.fromEntries(new FormData(form));
  const payload = {};
  for (const [key, value] of Object.entries(data)) {
    if (value.trim() === '') continue;
    payload[key] = key === 'technologies_used'
      ? value.split(',').map(t => t.trim()).filter(Boolean)
      : value;
  }
  const response = await fetch('/generate', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(payload),
  });
  const body = await response.json();
  if (!response.ok) {
    result.textContent = 'Error: ' + body.error;
    return;
  }
  result.innerHTML = '<a href="/preview/' + body.id + '">Preview: ' + body.document.title + '</a>';
});
</script>
</body>
</html>
"#;

// --- API Payloads ---

/// The response body for the `/generate` endpoint.
#[derive(Serialize, Deserialize)]
pub struct GenerateResponse {
    pub id: String,
    pub document: CaseStudyDocument,
}

// --- Handlers ---

/// The handler for the root (`/`) endpoint: the case study form.
pub async fn root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for the `/generate` endpoint.
///
/// Runs the full generation pipeline for the submitted input and stores the
/// resulting document in the preview store.
pub async fn generate_handler(
    State(app_state): State<AppState>,
    Json(input): Json<CaseStudyInput>,
) -> Result<Json<GenerateResponse>, AppError> {
    info!("Received generate request for '{}'", input.client_name);

    let document = app_state.generator.generate_document(&input).await?;
    let id = app_state.preview_store.save(&document)?;
    info!(%id, "Stored case study preview");

    Ok(Json(GenerateResponse { id, document }))
}

/// The handler for the `/preview/{id}` endpoint.
pub async fn preview_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CaseStudyDocument>, AppError> {
    let document = app_state
        .preview_store
        .load(&id)?
        .ok_or_else(|| AppError::NotFound(format!("No preview found for id '{id}'")))?;
    Ok(Json(document))
}

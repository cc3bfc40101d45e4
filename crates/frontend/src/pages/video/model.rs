//! Video page - model (API functions)

use contracts::domain::video_generation::{GenerateVideoRequest, GenerateVideoResponse};
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_base;

/// Submit a prompt to the generation endpoint and return the locator of
/// the produced video.
///
/// A 2xx response whose collection is empty carries nothing to show and is
/// reported as malformed, like any other undecodable body.
pub async fn generate_video(prompt: String) -> Result<String, ApiError> {
    let request = GenerateVideoRequest { prompt };

    let response = Request::post(&format!("{}/api/video", api_base()))
        .json(&request)
        .map_err(|e| ApiError::Malformed(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body = response
        .json::<GenerateVideoResponse>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    body.into_first()
        .ok_or_else(|| ApiError::Malformed("empty result collection".to_string()))
}

use contracts::system::usage::UsageInfo;
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_base;

/// Get the current generation-quota snapshot
pub async fn get_usage() -> Result<UsageInfo, ApiError> {
    let response = Request::get(&format!("{}/api/system/usage", api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<UsageInfo>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

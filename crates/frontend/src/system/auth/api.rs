use contracts::system::auth::UserInfo;
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_base;

/// Get the current session's user record
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    let response = Request::get(&format!("{}/api/system/auth/me", api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

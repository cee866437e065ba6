use axum::Json;
use serde::Serialize;

use crate::profile::formatter::format_profile;
use crate::profile::models::UserProfile;

#[derive(Debug, Serialize)]
pub struct FormattedProfileResponse {
    pub text: String,
}

/// POST /api/v1/profile/format
///
/// Previews the profile text exactly as it is embedded in the recommendation prompt.
pub async fn handle_format(Json(profile): Json<UserProfile>) -> Json<FormattedProfileResponse> {
    Json(FormattedProfileResponse {
        text: format_profile(&profile),
    })
}

use rocket::serde::json::Json;
use serde::Serialize;
use trailhead_result::Result;

/// # Server Configuration
#[derive(Serialize, Debug)]
pub struct ApiInfo {
    /// Trailhead API version
    pub trailhead: String,
}

/// # Query Node
///
/// Fetch the configuration of this Trailhead instance.
#[get("/")]
pub async fn root() -> Result<Json<ApiInfo>> {
    Ok(Json(ApiInfo {
        trailhead: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

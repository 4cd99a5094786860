use rocket::serde::json::Json;
use rocket::State;
use trailhead_database::{Database, User};
use trailhead_models::v0;
use trailhead_result::Result;

/// # Clear Favorites
///
/// Delete the current user's favorites document, returning it.
/// Deleting when no document exists is reported as a success.
#[delete("/")]
pub async fn clear(db: &State<Database>, user: User) -> Result<ClearResponse> {
    if let Some(favorite) = db.delete_favorite(&user.id).await? {
        Ok(ClearResponse::Deleted(Json(favorite.into())))
    } else {
        Ok(ClearResponse::NoFavorites(
            "You do not have any favorites to delete.",
        ))
    }
}

#[derive(Responder)]
pub enum ClearResponse {
    #[response(status = 200, content_type = "json")]
    Deleted(Json<v0::Favorite>),
    #[response(status = 200, content_type = "plain")]
    NoFavorites(&'static str),
}

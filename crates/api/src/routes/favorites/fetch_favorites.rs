use rocket::serde::json::Json;
use rocket::State;
use trailhead_database::{Database, User};
use trailhead_models::v0;
use trailhead_result::Result;

/// # Fetch Favorites
///
/// Fetch the current user's favorites document, with the user and
/// campsite references resolved to full entities.
#[get("/")]
pub async fn fetch(
    db: &State<Database>,
    user: User,
) -> Result<Json<Option<v0::FavoriteResolved>>> {
    if let Some(favorite) = db.fetch_favorite(&user.id).await? {
        Ok(Json(Some(favorite.into_resolved(db).await?)))
    } else {
        Ok(Json(None))
    }
}

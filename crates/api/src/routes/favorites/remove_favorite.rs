use rocket::serde::json::Json;
use rocket::State;
use trailhead_database::{Database, User};
use trailhead_models::v0;
use trailhead_result::Result;

/// # Remove Favorite
///
/// Remove a single campsite from the current user's favorites.
/// Removing the last campsite leaves an empty document behind;
/// only `DELETE /favorites` removes the document itself.
#[delete("/<campsite_id>")]
pub async fn remove(
    db: &State<Database>,
    user: User,
    campsite_id: &str,
) -> Result<RemoveResponse> {
    if let Some(mut favorite) = db.fetch_favorite(&user.id).await? {
        if favorite.remove_campsite(campsite_id) {
            db.save_favorite(&favorite).await?;
            Ok(RemoveResponse::Updated(Json(favorite.into())))
        } else {
            Ok(RemoveResponse::NotFavorite(
                "That campsite is not in your list of favorites.",
            ))
        }
    } else {
        Ok(RemoveResponse::NoFavorites(
            "You do not have any favorites to delete.",
        ))
    }
}

#[derive(Responder)]
pub enum RemoveResponse {
    #[response(status = 200, content_type = "json")]
    Updated(Json<v0::Favorite>),
    #[response(status = 200, content_type = "plain")]
    NotFavorite(&'static str),
    #[response(status = 400, content_type = "plain")]
    NoFavorites(&'static str),
}

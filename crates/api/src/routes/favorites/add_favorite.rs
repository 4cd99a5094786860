use rocket::serde::json::Json;
use rocket::State;
use trailhead_database::{Database, Favorite, User};
use trailhead_models::v0;
use trailhead_result::Result;

/// # Add Favorite
///
/// Add a single campsite to the current user's favorites.
/// The document is created if the user does not have one yet.
#[post("/<campsite_id>")]
pub async fn add(db: &State<Database>, user: User, campsite_id: &str) -> Result<AddResponse> {
    let favorite = if let Some(mut favorite) = db.fetch_favorite(&user.id).await? {
        if !favorite.push_campsite(campsite_id) {
            return Ok(AddResponse::AlreadyFavorite(
                "That campsite is already in your list of favorites!",
            ));
        }

        db.save_favorite(&favorite).await?;
        favorite
    } else {
        Favorite::create(db, &user.id, vec![campsite_id.to_string()]).await?
    };

    Ok(AddResponse::Updated(Json(favorite.into())))
}

#[derive(Responder)]
pub enum AddResponse {
    #[response(status = 200, content_type = "json")]
    Updated(Json<v0::Favorite>),
    #[response(status = 200, content_type = "plain")]
    AlreadyFavorite(&'static str),
}

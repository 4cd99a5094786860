use rocket::serde::json::Json;
use rocket::State;
use trailhead_database::{Database, Favorite, User};
use trailhead_models::v0;
use trailhead_result::Result;

/// # Add Favorites
///
/// Add a list of campsites to the current user's favorites.
/// Campsites that are already favorited are silently skipped.
/// The document is created if the user does not have one yet.
#[post("/", data = "<data>")]
pub async fn add(
    db: &State<Database>,
    user: User,
    data: Json<Vec<v0::CampsiteRef>>,
) -> Result<Json<v0::Favorite>> {
    let data = data.into_inner();

    let favorite = if let Some(mut favorite) = db.fetch_favorite(&user.id).await? {
        for campsite in &data {
            favorite.push_campsite(&campsite.id);
        }

        db.save_favorite(&favorite).await?;
        favorite
    } else {
        let mut favorite = Favorite {
            id: user.id.to_string(),
            campsites: vec![],
        };

        for campsite in &data {
            favorite.push_campsite(&campsite.id);
        }

        db.insert_favorite(&favorite).await?;
        favorite
    };

    Ok(Json(favorite.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Header, Status};
    use trailhead_models::v0;

    #[rocket::async_test]
    async fn fail_no_session() {
        let harness = TestHarness::new().await;

        let response = harness
            .post("/favorites")
            .header(ContentType::JSON)
            .body(r#"[{"_id":"c1"}]"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[rocket::async_test]
    async fn success_create_document_deduplicated() {
        let harness = TestHarness::new().await;
        let (_user, session) = harness.new_user().await;

        let response = harness
            .post("/favorites")
            .header(ContentType::JSON)
            .header(Header::new("x-session-token", session.token.to_string()))
            .body(r#"[{"_id":"c1"},{"_id":"c2"},{"_id":"c1"}]"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let favorite = response.into_json::<v0::Favorite>().await.expect("json");
        assert_eq!(favorite.campsites, vec!["c1", "c2"]);
    }

    #[rocket::async_test]
    async fn success_append_skips_existing() {
        let harness = TestHarness::new().await;
        let (_user, session) = harness.new_user().await;
        let auth = || Header::new("x-session-token", session.token.to_string());

        let response = harness
            .post("/favorites")
            .header(ContentType::JSON)
            .header(auth())
            .body(r#"[{"_id":"c1"},{"_id":"c2"}]"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        drop(response);

        let response = harness
            .post("/favorites")
            .header(ContentType::JSON)
            .header(auth())
            .body(r#"[{"_id":"c2"},{"_id":"c3"}]"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let favorite = response.into_json::<v0::Favorite>().await.expect("json");
        assert_eq!(favorite.campsites, vec!["c1", "c2", "c3"]);
    }
}

use rocket::Route;

mod add_favorite;
mod add_favorites;
mod clear_favorites;
mod fetch_favorite;
mod fetch_favorites;
mod put_favorite;
mod put_favorites;
mod remove_favorite;

pub fn routes() -> Vec<Route> {
    routes![
        fetch_favorites::fetch,
        add_favorites::add,
        put_favorites::put,
        clear_favorites::clear,
        fetch_favorite::fetch,
        add_favorite::add,
        put_favorite::put,
        remove_favorite::remove,
    ]
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Header, Status};
    use trailhead_models::v0;

    #[rocket::async_test]
    async fn success_favorites_lifecycle() {
        let harness = TestHarness::new().await;
        let (_user, session) = harness.new_user().await;
        let auth = || Header::new("x-session-token", session.token.to_string());

        // add two campsites in one request
        let response = harness
            .post("/favorites")
            .header(ContentType::JSON)
            .header(auth())
            .body(r#"[{"_id":"c1"},{"_id":"c2"}]"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let favorite = response.into_json::<v0::Favorite>().await.expect("json");
        assert_eq!(favorite.campsites, vec!["c1", "c2"]);

        // re-adding one of them is a no-op
        let response = harness
            .post("/favorites/c1")
            .header(auth())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("That campsite is already in your list of favorites!")
        );

        // remove one
        let response = harness
            .delete("/favorites/c2")
            .header(auth())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let favorite = response.into_json::<v0::Favorite>().await.expect("json");
        assert_eq!(favorite.campsites, vec!["c1"]);

        // delete the whole document
        let response = harness.delete("/favorites").header(auth()).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let favorite = response.into_json::<v0::Favorite>().await.expect("json");
        assert_eq!(favorite.campsites, vec!["c1"]);

        // nothing left to delete
        let response = harness.delete("/favorites").header(auth()).dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("You do not have any favorites to delete.")
        );
    }

    #[rocket::async_test]
    async fn success_options_probe() {
        let harness = TestHarness::new().await;

        for uri in ["/favorites", "/favorites/c1"] {
            let response = harness
                .options(uri)
                .header(Header::new("Origin", "https://example.com"))
                .header(Header::new("Access-Control-Request-Method", "POST"))
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Ok);
        }
    }
}

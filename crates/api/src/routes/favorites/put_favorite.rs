use trailhead_database::User;

/// # Replace Favorite
///
/// Individual favorites cannot be replaced.
#[put("/<_campsite_id>")]
pub async fn put(_user: User, _campsite_id: &str) -> NotSupported {
    NotSupported("PUT is not supported on /favorites/<campsite_id>")
}

#[derive(Responder)]
#[response(status = 403, content_type = "plain")]
pub struct NotSupported(&'static str);

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{Header, Status};

    #[rocket::async_test]
    async fn fail_no_session() {
        let harness = TestHarness::new().await;

        let response = harness.put("/favorites/c1").dispatch().await;
        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[rocket::async_test]
    async fn fail_not_supported() {
        let harness = TestHarness::new().await;
        let (_user, session) = harness.new_user().await;

        let response = harness
            .put("/favorites/c1")
            .header(Header::new("x-session-token", session.token.to_string()))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("PUT is not supported on /favorites/<campsite_id>")
        );
    }
}

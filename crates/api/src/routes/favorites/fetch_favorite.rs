/// # Fetch Favorite
///
/// Individual favorites cannot be fetched; favorites are only
/// exposed as a whole document.
#[get("/<_campsite_id>")]
pub async fn fetch(_campsite_id: &str) -> NotSupported {
    NotSupported("GET is not supported on /favorites/<campsite_id>")
}

#[derive(Responder)]
#[response(status = 403, content_type = "plain")]
pub struct NotSupported(&'static str);

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fail_not_supported_without_session() {
        let harness = TestHarness::new().await;

        // no authentication required to hit the rejection
        let response = harness.get("/favorites/c1").dispatch().await;

        assert_eq!(response.status(), Status::Forbidden);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("GET is not supported on /favorites/<campsite_id>")
        );
    }
}

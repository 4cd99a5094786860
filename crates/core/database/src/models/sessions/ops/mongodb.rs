use trailhead_result::Result;

use crate::MongoDb;
use crate::Session;

use super::AbstractSessions;

static COL: &str = "sessions";

#[async_trait]
impl AbstractSessions for MongoDb {
    /// Find a session by its token
    async fn fetch_session_by_token(&self, token: &str) -> Result<Session> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "token": token
            }
        )?
        .ok_or_else(|| create_error!(InvalidSession))
    }

    /// Insert a new session into the database
    async fn insert_session(&self, session: &Session) -> Result<()> {
        query!(self, insert_one, COL, session).map(|_| ())
    }
}

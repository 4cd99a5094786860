use trailhead_result::Result;

use crate::Session;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractSessions: Sync + Send {
    /// Find a session by its token
    async fn fetch_session_by_token(&self, token: &str) -> Result<Session>;

    /// Insert a new session into the database
    async fn insert_session(&self, session: &Session) -> Result<()>;
}

use trailhead_result::Result;

use crate::Campsite;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractCampsites: Sync + Send {
    /// Fetch a campsite from the database
    async fn fetch_campsite(&self, id: &str) -> Result<Campsite>;

    /// Fetch multiple campsites by their ids
    ///
    /// Ids that do not resolve to a campsite are omitted from the
    /// result; no ordering is guaranteed.
    async fn fetch_campsites(&self, ids: &[String]) -> Result<Vec<Campsite>>;

    /// Insert a new campsite into the database
    async fn insert_campsite(&self, campsite: &Campsite) -> Result<()>;
}

use trailhead_result::Result;

use crate::Campsite;
use crate::MongoDb;

use super::AbstractCampsites;

static COL: &str = "campsites";

#[async_trait]
impl AbstractCampsites for MongoDb {
    /// Fetch a campsite from the database
    async fn fetch_campsite(&self, id: &str) -> Result<Campsite> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownCampsite))
    }

    /// Fetch multiple campsites by their ids
    async fn fetch_campsites(&self, ids: &[String]) -> Result<Vec<Campsite>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "_id": {
                    "$in": ids
                }
            }
        )
    }

    /// Insert a new campsite into the database
    async fn insert_campsite(&self, campsite: &Campsite) -> Result<()> {
        query!(self, insert_one, COL, campsite).map(|_| ())
    }
}

use bson::Document;
use trailhead_result::Result;

use crate::Favorite;
use crate::MongoDb;

use super::AbstractFavorites;

static COL: &str = "favorites";

#[async_trait]
impl AbstractFavorites for MongoDb {
    /// Fetch a user's favorites document, if one exists
    async fn fetch_favorite(&self, user_id: &str) -> Result<Option<Favorite>> {
        query!(self, find_one_by_id, COL, user_id)
    }

    /// Insert a new favorites document
    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()> {
        query!(self, insert_one, COL, favorite).map(|_| ())
    }

    /// Persist the campsite list of an existing favorites document
    async fn save_favorite(&self, favorite: &Favorite) -> Result<()> {
        self.col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": &favorite.id
                },
                doc! {
                    "$set": {
                        "campsites": favorite.campsites.clone()
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    /// Delete a user's favorites document, returning it if one existed
    async fn delete_favorite(&self, user_id: &str) -> Result<Option<Favorite>> {
        query!(
            self,
            find_one_and_delete,
            COL,
            doc! {
                "_id": user_id
            }
        )
    }
}

use trailhead_result::Result;

use crate::Favorite;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractFavorites: Sync + Send {
    /// Fetch a user's favorites document, if one exists
    async fn fetch_favorite(&self, user_id: &str) -> Result<Option<Favorite>>;

    /// Insert a new favorites document
    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()>;

    /// Persist the campsite list of an existing favorites document
    ///
    /// This is a whole-list replace; two concurrent writers for the
    /// same user can lose updates.
    async fn save_favorite(&self, favorite: &Favorite) -> Result<()>;

    /// Delete a user's favorites document, returning it if one existed
    async fn delete_favorite(&self, user_id: &str) -> Result<Option<Favorite>>;
}

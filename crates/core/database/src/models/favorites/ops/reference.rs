use trailhead_result::Result;

use crate::Favorite;
use crate::ReferenceDb;

use super::AbstractFavorites;

#[async_trait]
impl AbstractFavorites for ReferenceDb {
    /// Fetch a user's favorites document, if one exists
    async fn fetch_favorite(&self, user_id: &str) -> Result<Option<Favorite>> {
        let favorites = self.favorites.lock().await;
        Ok(favorites.get(user_id).cloned())
    }

    /// Insert a new favorites document
    async fn insert_favorite(&self, favorite: &Favorite) -> Result<()> {
        let mut favorites = self.favorites.lock().await;
        if favorites.contains_key(&favorite.id) {
            return Err(create_database_error!("insert_one", "favorites"));
        }

        favorites.insert(favorite.id.to_string(), favorite.clone());
        Ok(())
    }

    /// Persist the campsite list of an existing favorites document
    async fn save_favorite(&self, favorite: &Favorite) -> Result<()> {
        let mut favorites = self.favorites.lock().await;
        if let Some(entry) = favorites.get_mut(&favorite.id) {
            *entry = favorite.clone();
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Delete a user's favorites document, returning it if one existed
    async fn delete_favorite(&self, user_id: &str) -> Result<Option<Favorite>> {
        let mut favorites = self.favorites.lock().await;
        Ok(favorites.remove(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::AbstractFavorites;
    use crate::{Favorite, ReferenceDb};

    fn favorite(user_id: &str, campsites: &[&str]) -> Favorite {
        Favorite {
            id: user_id.to_string(),
            campsites: campsites.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn favorites_document_lifecycle() {
        let db = ReferenceDb::default();

        assert_eq!(db.fetch_favorite("user").await.unwrap(), None);

        let mut doc = favorite("user", &["c1", "c2"]);
        db.insert_favorite(&doc).await.unwrap();
        assert!(db.insert_favorite(&doc).await.is_err());

        doc.campsites.pop();
        db.save_favorite(&doc).await.unwrap();
        assert_eq!(
            db.fetch_favorite("user").await.unwrap().unwrap().campsites,
            vec!["c1"]
        );

        let deleted = db.delete_favorite("user").await.unwrap();
        assert_eq!(deleted.unwrap().campsites, vec!["c1"]);
        assert_eq!(db.delete_favorite("user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_requires_existing_document() {
        let db = ReferenceDb::default();
        assert!(db.save_favorite(&favorite("user", &["c1"])).await.is_err());
    }
}

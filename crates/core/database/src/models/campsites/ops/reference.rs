use trailhead_result::Result;

use crate::Campsite;
use crate::ReferenceDb;

use super::AbstractCampsites;

#[async_trait]
impl AbstractCampsites for ReferenceDb {
    /// Fetch a campsite from the database
    async fn fetch_campsite(&self, id: &str) -> Result<Campsite> {
        let campsites = self.campsites.lock().await;
        campsites
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownCampsite))
    }

    /// Fetch multiple campsites by their ids
    async fn fetch_campsites(&self, ids: &[String]) -> Result<Vec<Campsite>> {
        let campsites = self.campsites.lock().await;
        Ok(ids
            .iter()
            .filter_map(|id| campsites.get(id).cloned())
            .collect())
    }

    /// Insert a new campsite into the database
    async fn insert_campsite(&self, campsite: &Campsite) -> Result<()> {
        let mut campsites = self.campsites.lock().await;
        if campsites.contains_key(&campsite.id) {
            return Err(create_database_error!("insert_one", "campsites"));
        }

        campsites.insert(campsite.id.to_string(), campsite.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AbstractCampsites;
    use crate::{Campsite, ReferenceDb};

    fn campsite(id: &str, name: &str) -> Campsite {
        Campsite {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            image: None,
            elevation: None,
            featured: false,
        }
    }

    #[tokio::test]
    async fn insert_and_fetch_campsites() {
        let db = ReferenceDb::default();
        db.insert_campsite(&campsite("c1", "React Lake"))
            .await
            .unwrap();
        db.insert_campsite(&campsite("c2", "Chrome River"))
            .await
            .unwrap();

        let fetched = db.fetch_campsite("c1").await.unwrap();
        assert_eq!(fetched.name, "React Lake");

        // unknown ids are omitted
        let many = db
            .fetch_campsites(&[
                "c2".to_string(),
                "missing".to_string(),
                "c1".to_string(),
            ])
            .await
            .unwrap();
        assert_eq!(many.len(), 2);

        assert!(db.fetch_campsite("missing").await.is_err());
    }
}

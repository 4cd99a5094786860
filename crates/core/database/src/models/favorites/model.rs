use trailhead_result::Result;

use crate::Database;

auto_derived!(
    /// # Favorite
    ///
    /// Per-user list of favorited campsites.
    /// Keyed by the owning user's id; at most one document per user.
    pub struct Favorite {
        /// Owning user's id
        #[serde(rename = "_id")]
        pub id: String,
        /// Campsite ids in the order they were favorited
        pub campsites: Vec<String>,
    }
);

impl Favorite {
    /// Create a favorites document for a user
    pub async fn create(db: &Database, user_id: &str, campsites: Vec<String>) -> Result<Favorite> {
        let favorite = Favorite {
            id: user_id.to_string(),
            campsites,
        };

        db.insert_favorite(&favorite).await?;
        Ok(favorite)
    }

    /// Whether a campsite is already favorited
    pub fn contains(&self, campsite_id: &str) -> bool {
        self.campsites.iter().any(|id| id == campsite_id)
    }

    /// Append a campsite if it is not already present,
    /// returning whether the list changed
    pub fn push_campsite(&mut self, campsite_id: &str) -> bool {
        if self.contains(campsite_id) {
            return false;
        }

        self.campsites.push(campsite_id.to_string());
        true
    }

    /// Remove a campsite from the list,
    /// returning whether it was present
    pub fn remove_campsite(&mut self, campsite_id: &str) -> bool {
        if let Some(index) = self.campsites.iter().position(|id| id == campsite_id) {
            self.campsites.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Favorite;

    fn favorite(campsites: &[&str]) -> Favorite {
        Favorite {
            id: "user".to_string(),
            campsites: campsites.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn push_campsite_skips_duplicates() {
        let mut favorite = favorite(&["c1"]);

        assert!(favorite.push_campsite("c2"));
        assert!(!favorite.push_campsite("c1"));
        assert!(!favorite.push_campsite("c2"));

        assert_eq!(favorite.campsites, vec!["c1", "c2"]);
    }

    #[test]
    fn remove_campsite_removes_only_the_match() {
        let mut favorite = favorite(&["c1", "c2", "c3"]);

        assert!(favorite.remove_campsite("c2"));
        assert!(!favorite.remove_campsite("c2"));

        assert_eq!(favorite.campsites, vec!["c1", "c3"]);
    }

    #[test]
    fn remove_last_campsite_leaves_empty_list() {
        let mut favorite = favorite(&["c1"]);

        assert!(favorite.remove_campsite("c1"));
        assert!(favorite.campsites.is_empty());
    }
}

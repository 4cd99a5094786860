use std::collections::HashMap;

use trailhead_models::v0::*;
use trailhead_result::Result;

use crate::Database;

impl From<crate::User> for User {
    fn from(value: crate::User) -> Self {
        User {
            id: value.id,
            username: value.username,
            privileged: value.privileged,
        }
    }
}

impl From<crate::Campsite> for Campsite {
    fn from(value: crate::Campsite) -> Self {
        Campsite {
            id: value.id,
            name: value.name,
            description: value.description,
            image: value.image,
            elevation: value.elevation,
            featured: value.featured,
        }
    }
}

impl From<crate::Favorite> for Favorite {
    fn from(value: crate::Favorite) -> Self {
        Favorite {
            id: value.id,
            campsites: value.campsites,
        }
    }
}

impl crate::Favorite {
    /// Resolve the user and campsite references to full entities.
    ///
    /// Campsites keep their favorited order; ids that no longer
    /// resolve to a campsite are omitted.
    pub async fn into_resolved(self, db: &Database) -> Result<FavoriteResolved> {
        let user = db.fetch_user(&self.id).await?;

        // `$in` does not guarantee order, re-apply it here
        let mut by_id: HashMap<String, crate::Campsite> = db
            .fetch_campsites(&self.campsites)
            .await?
            .into_iter()
            .map(|campsite| (campsite.id.to_string(), campsite))
            .collect();

        let campsites = self
            .campsites
            .iter()
            .filter_map(|id| by_id.remove(id))
            .map(Into::into)
            .collect();

        Ok(FavoriteResolved {
            id: self.id,
            user: user.into(),
            campsites,
        })
    }
}

use super::{Campsite, User};

auto_derived!(
    /// # Favorite
    ///
    /// Per-user list of favorited campsites.
    /// The document id is the owning user's id.
    pub struct Favorite {
        /// Owning user's id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Campsite ids in the order they were favorited
        pub campsites: Vec<String>,
    }

    /// # Resolved Favorite
    ///
    /// Favorites document with the user and campsite
    /// references resolved to full entities.
    pub struct FavoriteResolved {
        /// Owning user's id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Owning user
        pub user: User,
        /// Favorited campsites, in the order they were favorited
        pub campsites: Vec<Campsite>,
    }
);

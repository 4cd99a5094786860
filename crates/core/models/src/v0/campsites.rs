auto_derived!(
    /// # Campsite
    pub struct Campsite {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Campsite name
        pub name: String,
        /// Description shown on the campsite page
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "String::is_empty", default)
        )]
        pub description: String,
        /// URL to the campsite's image
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub image: Option<String>,
        /// Elevation in feet
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub elevation: Option<i32>,
        /// Whether this campsite is featured on the front page
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub featured: bool,
    }

    /// Reference to a campsite by id, as submitted in favorites payloads
    pub struct CampsiteRef {
        /// Campsite id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
    }
);

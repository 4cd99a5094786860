auto_derived!(
    /// # Campsite
    pub struct Campsite {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Campsite name
        pub name: String,
        /// Description shown on the campsite page
        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub description: String,
        /// URL to the campsite's image
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,
        /// Elevation in feet
        #[serde(skip_serializing_if = "Option::is_none")]
        pub elevation: Option<i32>,
        /// Whether this campsite is featured on the front page
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub featured: bool,
    }
);

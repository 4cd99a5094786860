auto_derived!(
    /// # Session
    ///
    /// Login session, presented by clients in the `x-session-token` header.
    pub struct Session {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Session token
        pub token: String,
        /// Id of the user this session belongs to
        pub user_id: String,
    }
);

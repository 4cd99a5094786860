use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Campsite, Favorite, Session, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub sessions: Arc<Mutex<HashMap<String, Session>>>,
        pub campsites: Arc<Mutex<HashMap<String, Campsite>>>,
        pub favorites: Arc<Mutex<HashMap<String, Favorite>>>,
    }
);

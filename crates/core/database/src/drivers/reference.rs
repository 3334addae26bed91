use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{AbuseReport, Addon, RatelimitEvent, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub addons: Arc<Mutex<HashMap<String, Addon>>>,
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub abuse_reports: Arc<Mutex<HashMap<String, AbuseReport>>>,
        pub ratelimit_events: Arc<Mutex<HashMap<String, RatelimitEvent>>>,
    }
);

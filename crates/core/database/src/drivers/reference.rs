use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Event, Guest, Penalty, Report, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub event_guests: Arc<Mutex<HashMap<String, Guest>>>,
        pub safety_reports: Arc<Mutex<HashMap<String, Report>>>,
        pub penalties: Arc<Mutex<HashMap<String, Penalty>>>,
    }
);

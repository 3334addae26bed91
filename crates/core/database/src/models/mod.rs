mod abuse_reports;
mod addons;
mod ratelimit_events;
mod users;

pub use abuse_reports::*;
pub use addons::*;
pub use ratelimit_events::*;
pub use users::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + abuse_reports::AbstractAbuseReports
    + addons::AbstractAddons
    + ratelimit_events::AbstractRatelimitEvents
    + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}

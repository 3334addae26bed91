mod abuse_reports;
mod addons;
mod users;

pub use abuse_reports::*;
pub use addons::*;
pub use users::*;

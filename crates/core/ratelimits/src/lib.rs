pub mod ratelimiter;

#[cfg(feature = "rocket")]
pub mod rocket;

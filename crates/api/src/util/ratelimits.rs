use bazaar_ratelimits::ratelimiter::{Limit, RatelimitResolver};
use rocket::Request;

pub struct ApiRatelimits;

impl<'a> RatelimitResolver<Request<'a>> for ApiRatelimits {
    fn resolve_bucket<'r>(&self, request: &'r Request<'_>) -> (&'r str, Option<&'r str>) {
        let (segment, resource) = (request.routed_segment(0), request.routed_segment(1));

        if let Some(segment) = segment {
            match (segment, resource) {
                ("abuse", _) => ("abuse", None),
                ("addons", Some(id)) => ("addons", Some(id)),
                ("users", Some(id)) => ("users", Some(id)),
                ("auth", _) => ("auth", None),
                ("swagger", _) => ("swagger", None),
                _ => ("any", None),
            }
        } else {
            ("any", None)
        }
    }

    fn resolve_bucket_limit(&self, bucket: &str) -> Limit {
        match bucket {
            "abuse" => Limit::per_10s(10),
            "addons" => Limit::per_10s(20),
            "users" => Limit::per_10s(20),
            "auth" => Limit::per_10s(15),
            "swagger" => Limit::per_10s(100),
            _ => Limit::per_10s(20),
        }
    }
}

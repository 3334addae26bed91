#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod routes;
pub mod util;

use bazaar_database::DatabaseInfo;
use bazaar_ratelimits::rocket::{RatelimitFairing, RatelimitStorage};
use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;
use std::str::FromStr;

use util::ratelimits::ApiRatelimits;

/// Build the Rocket application
pub async fn web() -> Rocket<Build> {
    // Setup database
    let db = DatabaseInfo::Auto.connect().await.expect("`Database`");

    // Setup Authifier for account and session management
    let authifier = db.clone().to_authifier().await;

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Post", "Options", "Head", "Delete"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    let rocket = rocket::build();
    routes::mount(rocket)
        .mount("/", rocket_cors::catch_all_options_routes())
        .mount("/", bazaar_ratelimits::rocket::routes())
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .register("/", util::catchers::all_catchers())
        .manage(authifier)
        .manage(db)
        .manage(RatelimitStorage::new(ApiRatelimits))
        .manage(cors.clone())
        .attach(RatelimitFairing)
        .attach(cors)
}

#[launch]
async fn rocket() -> _ {
    pretty_env_logger::init();

    info!(
        "Starting Bazaar API server. [version {}]",
        env!("CARGO_PKG_VERSION")
    );

    bazaar_config::init().await;

    web().await
}

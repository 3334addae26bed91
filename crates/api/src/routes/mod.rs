use rocket::{Build, Rocket};
use rocket_okapi::okapi::openapi3::OpenApi;
use rocket_okapi::settings::OpenApiSettings;

mod abuse;
mod addons;
mod root;
mod users;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/abuse" => abuse::routes(),
        "/addons" => addons::routes(),
        "/users" => users::routes(),
        "/auth/account" => rocket_authifier::routes::account::routes(),
        "/auth/session" => rocket_authifier::routes::session::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Bazaar API".to_string(),
            description: Some("Abuse reporting and catalog lookup API".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

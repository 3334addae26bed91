use bazaar_database::{util::reference::Reference, Database};
use bazaar_models::v0;
use bazaar_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch User
///
/// Retrieve a user's public information by their id or username.
#[openapi(tag = "Users")]
#[get("/<target>")]
pub async fn fetch_user(db: &State<Database>, target: Reference<'_>) -> Result<Json<v0::User>> {
    let user = target.as_user(db).await?;
    Ok(Json(user.into_public()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use bazaar_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn success_fetch_user_by_username() {
        let harness = TestHarness::new().await;
        let (_, _, user) = harness.new_user().await;

        let response = harness
            .client
            .get(format!("/users/{}", user.username))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let public: v0::User = response.into_json().await.expect("`User`");
        assert_eq!(public.id, user.id);
    }

    #[rocket::async_test]
    async fn fails_fetch_unknown_user() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/users/nobody-here").dispatch().await;

        assert_eq!(response.status(), Status::NotFound);
    }
}

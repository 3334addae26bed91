use authifier::models::{Account, Session};
use authifier::Authifier;
use bazaar_database::{Addon, AddonStatus, Database, User};
use rocket::local::asynchronous::Client;
use ulid::Ulid;

pub struct TestHarness {
    pub client: Client,
    pub authifier: Authifier,
    pub db: Database,
}

impl TestHarness {
    pub async fn new() -> TestHarness {
        dotenv::dotenv().ok();

        let client = Client::tracked(crate::web().await)
            .await
            .expect("valid rocket instance");

        let authifier = client
            .rocket()
            .state::<Authifier>()
            .expect("`Authifier`")
            .clone();

        let db = client
            .rocket()
            .state::<Database>()
            .expect("`Database`")
            .clone();

        TestHarness {
            client,
            authifier,
            db,
        }
    }

    pub fn rand_string() -> String {
        Ulid::new().to_string().to_lowercase()
    }

    pub async fn new_user(&self) -> (Account, Session, User) {
        let account = Account::new(
            &self.authifier,
            format!("{}@bazaar.dev", TestHarness::rand_string()),
            "jdNuRgJGpPqm2E".to_string(),
            false,
        )
        .await
        .expect("`Account`");

        let session = account
            .create_session(&self.authifier, String::new())
            .await
            .expect("`Session`");

        let user = User::create(
            &self.db,
            TestHarness::rand_string(),
            account.id.to_string(),
        )
        .await
        .expect("`User`");

        (account, session, user)
    }

    pub async fn new_addon(&self, status: AddonStatus) -> Addon {
        let slug = TestHarness::rand_string();
        let addon = Addon {
            id: Ulid::new().to_string(),
            guid: format!("{slug}@bazaar.dev"),
            slug,
            name: "Test Add-on".to_string(),
            status,
            disabled_by_user: false,
        };

        self.db.insert_addon(&addon).await.expect("`Addon`");
        addon
    }
}

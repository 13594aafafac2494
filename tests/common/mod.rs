use actix_web::{get, web, App, HttpRequest, HttpServer, Responder};
use devmatch::configuration::{get_configuration, DatabaseSettings, Settings};
use devmatch::forms;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

impl TestApp {
    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    pub async fn swipe(
        &self,
        token: &str,
        project_id: i32,
        interested: bool,
    ) -> serde_json::Value {
        let response = self
            .client()
            .post(format!("{}/swipe", self.address))
            .bearer_auth(token)
            .json(&json!({ "projectId": project_id, "interested": interested }))
            .send()
            .await
            .expect("Failed to execute swipe request.");

        assert!(
            response.status().is_success(),
            "swipe failed with {}",
            response.status()
        );
        response.json().await.expect("swipe response is not json")
    }

    /// Creates a listing owned by `token`'s user and returns its id.
    pub async fn create_project(&self, token: &str, title: &str) -> i32 {
        let body = json!({
            "title": title,
            "description": "A collaborative side project used by the integration tests, \
                            described at sufficient length to pass validation.",
            "techStack": ["rust", "actix-web", "postgres"],
            "category": "fullstack",
            "difficulty": "intermediate",
        });

        let response = self
            .client()
            .post(format!("{}/projects", self.address))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute create-project request.");

        assert_eq!(201, response.status().as_u16());
        let body: serde_json::Value = response
            .json()
            .await
            .expect("create-project response is not json");
        body["id"].as_i64().expect("missing project id") as i32
    }

    pub async fn count_matches(&self, project_id: i32) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM project_match WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count matches")
    }

    pub async fn count_interests(&self, project_id: i32) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM project_interest WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count interests")
    }
}

/// The identity provider double: any bearer token resolves to an
/// identity derived from the token itself, so each distinct token is a
/// distinct user.
#[get("")]
async fn mock_identity(req: HttpRequest) -> actix_web::Result<impl Responder> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("anonymous")
        .to_string();

    Ok(web::Json(forms::IdentityForm {
        email: format!("{token}@example.com"),
        name: token,
        email_confirmed: true,
        image: None,
    }))
}

fn mock_identity_server(listener: TcpListener) -> actix_web::dev::Server {
    HttpServer::new(|| App::new().service(web::scope("/me").service(mock_identity)))
        .listen(listener)
        .unwrap()
        .run()
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = devmatch::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let listener =
        TcpListener::bind("127.0.0.1:0").expect("Failed to bind port for the identity double");

    configuration.auth_url = format!(
        "http://127.0.0.1:{}/me",
        listener.local_addr().unwrap().port()
    );

    let _ = tokio::spawn(mock_identity_server(listener));

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

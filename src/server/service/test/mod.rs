use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

use crate::server::{config::Config, service::DiscordClient, startup};


/// Local stand-in for the Discord API, recording what it receives.
#[derive(Clone)]
struct FakeDiscord {
    token_status: StatusCode,
    token_body: String,
    guilds_status: StatusCode,
    guilds_body: String,
    token_forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    authorizations: Arc<Mutex<Vec<String>>>,
}

impl FakeDiscord {
    fn new() -> Self {
        Self {
            token_status: StatusCode::OK,
            token_body: r#"{
                "access_token": "user-token",
                "token_type": "Bearer",
                "expires_in": 604800,
                "refresh_token": "refresh",
                "scope": "identify guilds"
            }"#
            .to_string(),
            guilds_status: StatusCode::OK,
            guilds_body: "[]".to_string(),
            token_forms: Arc::default(),
            authorizations: Arc::default(),
        }
    }

    fn token_response(mut self, status: StatusCode, body: &str) -> Self {
        self.token_status = status;
        self.token_body = body.to_string();
        self
    }

    fn guilds_response(mut self, status: StatusCode, body: String) -> Self {
        self.guilds_status = status;
        self.guilds_body = body;
        self
    }

    fn token_forms(&self) -> Vec<HashMap<String, String>> {
        self.token_forms.lock().unwrap().clone()
    }

    fn authorizations(&self) -> Vec<String> {
        self.authorizations.lock().unwrap().clone()
    }

    /// Serves the fake on a random local port.
    ///
    /// # Returns
    /// API base URL, as `DISCORD_API_URL` would hold it
    async fn serve(&self) -> String {
        let app = Router::new()
            .route("/api/oauth2/token", post(token))
            .route("/api/users/@me/guilds", get(guilds))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/api", addr)
    }
}

async fn token(
    State(fake): State<FakeDiscord>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    fake.token_forms.lock().unwrap().push(form);

    (
        fake.token_status,
        [(header::CONTENT_TYPE, "application/json")],
        fake.token_body.clone(),
    )
        .into_response()
}

async fn guilds(State(fake): State<FakeDiscord>, headers: HeaderMap) -> Response {
    if let Some(authorization) = headers.get(header::AUTHORIZATION) {
        fake.authorizations
            .lock()
            .unwrap()
            .push(authorization.to_str().unwrap().to_string());
    }

    (
        fake.guilds_status,
        [(header::CONTENT_TYPE, "application/json")],
        fake.guilds_body.clone(),
    )
        .into_response()
}

/// Live client pointed at `api_url`, built the way startup builds it.
fn client(api_url: &str) -> DiscordClient {
    let config = Config {
        discord_client_id: "1234".to_string(),
        discord_client_secret: "client-secret".to_string(),
        discord_bot_token: "bot-token".to_string(),
        redirect_uri: "http://localhost:5000/callback".to_string(),
        discord_api_url: api_url.to_string(),
        guild_config_path: PathBuf::from("guild_config.json"),
        bind_address: "127.0.0.1:0".to_string(),
        session_secret: None,
    };

    let http_client = startup::setup_reqwest_client().unwrap();
    let oauth_client = startup::setup_oauth_client(&config).unwrap();

    DiscordClient::new(&config, http_client, oauth_client).unwrap()
}

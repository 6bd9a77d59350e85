//! Test helpers for integration tests
//!
//! Spawns the real application on an ephemeral port, backed by the
//! in-memory store, and wraps the HTTP calls the tests make.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use roomescape_api::{create_app, create_memory_app_state};
use roomescape_common::{
    hash_password, AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    ServerConfig,
};
use roomescape_core::entities::{Member, NewMember};
use roomescape_core::traits::MemberRepository;
use roomescape_core::value_objects::Role;
use roomescape_db::MemoryStore;
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: MemoryStore,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a fresh in-memory store
    pub async fn start() -> Result<Self> {
        let store = MemoryStore::new();
        let state = create_memory_app_state(test_config(), &store)?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn with_token(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header(header::COOKIE, format!("token={token}"))
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// GET with the session cookie
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::with_token(self.client.get(self.url(path)), token)
            .send()
            .await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// POST with the session cookie
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::with_token(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Log in and return the session token from the `token` cookie
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let response = self
            .post(
                "/login",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            anyhow::bail!("Login failed with status {status}");
        }
        token_cookie(&response).ok_or_else(|| anyhow::anyhow!("No token cookie in login response"))
    }

    /// Insert a member directly into the store, bypassing signup
    pub async fn seed_member(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Member> {
        let hash = hash_password(password)?;
        let member = self
            .store
            .member_repository()
            .create(&NewMember::member(name, email).with_role(role), &hash)
            .await?;
        Ok(member)
    }
}

/// Configuration for a test server; the database section is unused by the memory store
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "roomescape-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            token_expiry: 3600,
        },
        cors: CorsConfig::default(),
    }
}

/// Value of the `token` cookie set by a response, if any
pub fn token_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let pair = cookie.split(';').next()?.trim();
            pair.strip_prefix("token=").map(str::to_string)
        })
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Missing error code in {body}"))
}

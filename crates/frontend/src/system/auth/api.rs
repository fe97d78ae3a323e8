use crate::shared::config::Config;
use crate::shared::http::{ApiClient, ApiError, HttpTransport};
use contracts::system::auth::{LoginRequest, LoginResponse};

pub const LOGIN_PATH: &str = "/admin/login";

pub fn login_url(config: &Config) -> String {
    config.endpoint("auth", LOGIN_PATH)
}

/// Login with email and password, returns the bearer token
pub async fn login<T: HttpTransport>(
    client: &ApiClient<T>,
    url: &str,
    email: String,
    password: String,
) -> Result<String, String> {
    let request = LoginRequest { email, password };
    client
        .post_json::<_, LoginResponse>(url, &request)
        .await
        .map(|response| response.token)
        .map_err(|e: ApiError| {
            log::warn!("login failed: {}", e);
            e.message_or("Login failed")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::{FakeTransport, RecordedBody};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn returns_token_on_success() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"token": "jwt"}));
        let client = ApiClient::new(transport.clone());

        let token = block_on(login(&client, "http://api/admin/login", "a@b.c".into(), "pw".into()));
        assert_eq!(token, Ok("jwt".to_string()));
        assert_eq!(
            transport.last_request().unwrap().body,
            RecordedBody::Json(json!({"email": "a@b.c", "password": "pw"}))
        );
    }

    #[test]
    fn server_message_or_fallback() {
        let transport = FakeTransport::new();
        transport.reply_json(401, json!({"message": "Invalid credentials"}));
        transport.fail_network("offline");
        let client = ApiClient::new(transport);

        let first = block_on(login(&client, "u", "a".into(), "b".into()));
        assert_eq!(first, Err("Invalid credentials".to_string()));
        let second = block_on(login(&client, "u", "a".into(), "b".into()));
        assert_eq!(second, Err("Login failed".to_string()));
    }
}

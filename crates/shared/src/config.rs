use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub client_id: String,
    pub client_secret: String,
    pub ip_lookup_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            client_id: env::var("CLIENT_ID").unwrap_or_else(|_| "todo-client".to_string()),
            client_secret: env::var("CLIENT_SECRET")
                .unwrap_or_else(|_| "todo-secret".to_string()),
            ip_lookup_url: env::var("IP_LOOKUP_URL")
                .unwrap_or_else(|_| "http://ip-api.com/json".to_string()),
        }
    }
}

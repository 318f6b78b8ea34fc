use dotenvy::dotenv;
use std::env;
use url::Url;

pub struct Config {
    pub proxy_base_url: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment (and a `.env` file when
    /// present). Invalid values abort startup.
    pub fn new() -> Self {
        dotenv().ok();

        let proxy_base_url = env::var("PROXY_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let proxy_base_url = validate_base_url(&proxy_base_url);

        let port = env::var("PORT")
            .map(|val| val.parse::<u16>().expect("PORT must be a valid port number"))
            .unwrap_or(3000);

        Self {
            proxy_base_url,
            port,
        }
    }
}

fn validate_base_url(input: &str) -> String {
    let parsed = Url::parse(input).expect("PROXY_BASE_URL must be a valid URL");
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        panic!("PROXY_BASE_URL must start with 'http://' or 'https://'");
    }

    // Keep the `base + "/proxy/" + agent_id + path` concatenation sound even
    // when the configured value ends with '/'.
    input.trim_end_matches('/').to_string()
}

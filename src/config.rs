use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub groq_model: String,
    pub unsplash_access_key: String,
    pub unsplash_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let groq_api_key = env::var("GROQ_API_KEY")?;
        let unsplash_access_key = env::var("UNSPLASH_ACCESS_KEY")?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());

        let groq_base_url =
            env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_GROQ_BASE_URL.to_string());
        let groq_model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string());
        let unsplash_base_url =
            env::var("UNSPLASH_BASE_URL").unwrap_or_else(|_| DEFAULT_UNSPLASH_BASE_URL.to_string());

        Ok(Config {
            server_addr: parse_server_addr(&host, &port)?,
            groq_api_key,
            groq_base_url,
            groq_model,
            unsplash_access_key,
            unsplash_base_url,
        })
    }
}

fn parse_server_addr(host: &str, port: &str) -> Result<SocketAddr> {
    let port = port
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
    let ip = IpAddr::from_str(host)
        .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

    Ok(SocketAddr::new(ip, port))
}

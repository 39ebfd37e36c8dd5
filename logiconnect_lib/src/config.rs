use url::Url;

use crate::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Where the backend lives. Set `BACKEND_URL` at build time to point a
/// release build somewhere other than the local development server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute url for `path`, with the query values percent-encoded.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<String, Error> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| Error::Config(format!("{}: {err}", self.base_url)))?;
        url.set_path(path);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_with_encoded_query() {
        let config = ApiConfig::new(DEFAULT_BACKEND_URL);

        assert_eq!(
            config.url("/user/login", &[]).unwrap(),
            "http://localhost:3001/user/login"
        );
        assert_eq!(
            config.url("/booking/", &[("user_id", "u-1")]).unwrap(),
            "http://localhost:3001/booking/?user_id=u-1"
        );
        assert_eq!(
            config
                .url("/booking/coordinates", &[("pickup_address", "12 Main St & 3rd")])
                .unwrap(),
            "http://localhost:3001/booking/coordinates?pickup_address=12+Main+St+%26+3rd"
        );
    }

    #[test]
    fn rejects_a_malformed_base_url() {
        let config = ApiConfig::new("localhost without scheme");
        assert!(matches!(config.url("/user/login", &[]), Err(Error::Config(_))));
    }
}

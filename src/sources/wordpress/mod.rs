pub mod transform;
pub mod types;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{Article, Category};
use crate::errors::{NewsError, NewsResult};
use crate::sources::query::ArticleQuery;
use crate::sources::traits::ContentSource;
use crate::sources::wordpress::types::{RemoteCategory, RemotePost};

/// REST route prefix of the WordPress core API.
const API_PREFIX: &str = "wp-json/wp/v2";

/// Categories are fetched in a single page of this size.
const CATEGORY_PAGE_SIZE: u32 = 100;

/// Blocking client for a WordPress install's REST API. Requests always ask
/// for embedded resources so featured media, terms and authors arrive
/// inline. No timeout is configured; a hung request blocks until the
/// transport gives up.
pub struct WordPressClient {
    client: Client,
    config: Config,
}

impl WordPressClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(String, String)]) -> NewsResult<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/{}/{}", base, API_PREFIX, endpoint))
            .map_err(|e| NewsError::InvalidUrl(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("_embed", "true");
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// A GET request for the given URL, with the JSON accept header and,
    /// when an API key is configured, a bearer authorization header.
    fn build_request(&self, url: Url) -> reqwest::blocking::RequestBuilder {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        request
    }

    /// Issue a GET and return the raw body, mapping a non-2xx status to
    /// [`NewsError::Remote`].
    fn get(&self, url: Url) -> NewsResult<Vec<u8>> {
        debug!(%url, "wordpress request");

        let response = self.build_request(url).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(NewsError::Remote {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> NewsResult<T> {
        let url = self.endpoint_url(endpoint, params)?;
        let body = self.get(url)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl ContentSource for WordPressClient {
    fn list_articles(&self, query: &ArticleQuery) -> NewsResult<Vec<Article>> {
        let posts: Vec<RemotePost> = self.fetch("posts", &query.to_params())?;
        Ok(posts.iter().map(transform::transform_post).collect())
    }

    fn get_article(&self, id: &str) -> NewsResult<Article> {
        let post: RemotePost = self.fetch(&format!("posts/{}", id), &[])?;
        Ok(transform::transform_post(&post))
    }

    fn list_categories(&self) -> NewsResult<Vec<Category>> {
        let params = vec![("per_page".to_string(), CATEGORY_PAGE_SIZE.to_string())];
        let categories: Vec<RemoteCategory> = self.fetch("categories", &params)?;
        Ok(categories.iter().map(transform::transform_category).collect())
    }

    fn get_category(&self, id: u64) -> NewsResult<Category> {
        let category: RemoteCategory = self.fetch(&format!("categories/{}", id), &[])?;
        Ok(transform::transform_category(&category))
    }
}

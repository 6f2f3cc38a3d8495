use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::errors::{StayError, StayResult};
use crate::implementations::config::ClientConfig;
use crate::models::booking::{BookingInquiry, BookingInquiryRequest};
use crate::models::contact::{Contact, ContactRequest};
use crate::models::experience::Experience;
use crate::models::filter::{PropertyQuery, SearchQuery};
use crate::models::property::{Property, PropertyPayload};
use crate::models::testimonial::{Testimonial, TestimonialRequest};
use crate::traits::StayApi;

/// `StayApi` over HTTP with JSON bodies
///
/// # Example
///
/// ```no_run
/// use vattavada::{ClientConfig, HttpStayClient, PropertyQuery, StayApi};
///
/// async fn featured() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HttpStayClient::new(&ClientConfig::default())?;
///     for property in client.list_properties(&PropertyQuery::default()).await? {
///         println!("{} - {}", property.title, property.price);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct HttpStayClient {
    base: Url,
    http_client: reqwest::Client,
}

impl HttpStayClient {
    pub fn new(config: &ClientConfig) -> StayResult<Self> {
        let base = Url::parse(&config.api_url())
            .map_err(|e| StayError::InvalidInput(format!("invalid backend URL {}: {}", config.api_url(), e)))?;
        if base.cannot_be_a_base() {
            return Err(StayError::InvalidInput(format!("{} cannot be used as a base URL", base)));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| StayError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { base, http_client })
    }

    /// Resolve path segments (and query pairs) against the API root.
    ///
    /// Segments are percent-encoded individually, so ids cannot break out of
    /// their path position. No pairs means no `?`.
    pub fn endpoint(&self, segments: &[&str], trailing_slash: bool, query: &[(&str, String)]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
            if trailing_slash {
                path.push("");
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    async fn execute(&self, method: Method, url: Url, body: Option<serde_json::Value>) -> StayResult<reqwest::Response> {
        debug!("{} {}", method, url);
        let mut request = self.http_client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            error!("API request failed: {} {}: {}", method, url, e);
            StayError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        error!("API request failed: {} {} -> {}", method, url, status);
        if status == StatusCode::NOT_FOUND {
            return Err(StayError::NotFound(url.path().to_string()));
        }
        Err(StayError::Http {
            status: status.as_u16(),
            message: if message.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                message
            },
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> StayResult<T> {
        let response = self.execute(Method::GET, url, None).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B, T>(&self, method: Method, url: Url, body: &B) -> StayResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self.execute(method, url, Some(body)).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StayApi for HttpStayClient {
    async fn list_properties(&self, query: &PropertyQuery) -> StayResult<Vec<Property>> {
        let url = self.endpoint(&["properties"], true, &query.query_pairs());
        self.get_json(url).await
    }

    async fn get_property(&self, id: &str) -> StayResult<Property> {
        self.get_json(self.endpoint(&["properties", id], false, &[])).await
    }

    async fn featured_properties(&self) -> StayResult<Vec<Property>> {
        self.get_json(self.endpoint(&["properties", "featured"], false, &[])).await
    }

    async fn search_properties(&self, query: &SearchQuery) -> StayResult<Vec<Property>> {
        let url = self.endpoint(&["properties", "search", "filter"], false, &query.query_pairs());
        self.get_json(url).await
    }

    async fn create_property(&self, payload: &PropertyPayload) -> StayResult<Property> {
        let url = self.endpoint(&["properties"], true, &[]);
        self.send_json(Method::POST, url, payload).await
    }

    async fn update_property(&self, id: &str, payload: &PropertyPayload) -> StayResult<Property> {
        let url = self.endpoint(&["properties", id], false, &[]);
        self.send_json(Method::PUT, url, payload).await
    }

    async fn delete_property(&self, id: &str) -> StayResult<()> {
        let url = self.endpoint(&["properties", id], false, &[]);
        self.execute(Method::DELETE, url, None).await?;
        Ok(())
    }

    async fn submit_inquiry(&self, inquiry: &BookingInquiryRequest) -> StayResult<BookingInquiry> {
        let url = self.endpoint(&["bookings", "inquiry"], false, &[]);
        self.send_json(Method::POST, url, inquiry).await
    }

    async fn list_inquiries(&self, limit: Option<u32>) -> StayResult<Vec<BookingInquiry>> {
        let query: Vec<(&str, String)> = limit.map(|n| ("limit", n.to_string())).into_iter().collect();
        self.get_json(self.endpoint(&["bookings", "inquiries"], false, &query)).await
    }

    async fn submit_contact(&self, contact: &ContactRequest) -> StayResult<Contact> {
        let url = self.endpoint(&["contact"], true, &[]);
        self.send_json(Method::POST, url, contact).await
    }

    async fn list_experiences(&self) -> StayResult<Vec<Experience>> {
        self.get_json(self.endpoint(&["experiences"], true, &[])).await
    }

    async fn get_experience(&self, id: &str) -> StayResult<Experience> {
        self.get_json(self.endpoint(&["experiences", id], false, &[])).await
    }

    async fn list_testimonials(&self) -> StayResult<Vec<Testimonial>> {
        self.get_json(self.endpoint(&["testimonials"], true, &[])).await
    }

    async fn submit_testimonial(&self, testimonial: &TestimonialRequest) -> StayResult<Testimonial> {
        let url = self.endpoint(&["testimonials"], true, &[]);
        self.send_json(Method::POST, url, testimonial).await
    }
}

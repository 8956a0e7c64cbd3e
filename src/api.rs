//! REST access to the book review and user services behind the API gateway.
use crate::config::ApiConfig;
use crate::error::ReviewError;
use crate::models::review::{Review, ReviewUpdate};
use crate::models::user::UserProfile;
use crate::session::Session;
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;
use urlencoding::encode;

/// Calls made by the review section. The browser implementation is
/// [`HttpGateway`]; tests drive the view logic through a fake.
#[allow(async_fn_in_trait)]
pub trait ReviewGateway {
    async fn list_reviews(&self, isbn: &str) -> Result<Vec<Review>, ReviewError>;

    async fn user_profile(&self, user_id: &str) -> Result<UserProfile, ReviewError>;

    async fn create_review(&self, session: &Session, review: &Review) -> Result<(), ReviewError>;

    async fn update_review(
        &self,
        session: &Session,
        review_id: i64,
        update: &ReviewUpdate,
    ) -> Result<(), ReviewError>;

    async fn delete_review(&self, session: &Session, review_id: i64) -> Result<(), ReviewError>;
}

/// URL layout of the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base: config.base_url().to_string(),
        }
    }

    pub fn reviews_by_isbn(&self, isbn: &str) -> String {
        format!("{}/bookreview-service/reviews/isbn/{}", self.base, encode(isbn))
    }

    pub fn user(&self, user_id: &str) -> String {
        format!("{}/user-service/users/{}", self.base, encode(user_id))
    }

    pub fn user_reviews(&self, user_id: &str) -> String {
        format!("{}/bookreview-service/{}/reviews", self.base, encode(user_id))
    }

    pub fn user_review(&self, user_id: &str, review_id: i64) -> String {
        format!("{}/{}", self.user_reviews(user_id), review_id)
    }
}

/// `gloo-net` backed gateway used in the browser.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    endpoints: Endpoints,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config),
        }
    }
}

impl ReviewGateway for HttpGateway {
    async fn list_reviews(&self, isbn: &str) -> Result<Vec<Review>, ReviewError> {
        let url = self.endpoints.reviews_by_isbn(isbn);
        let response = Request::get(&url).send().await?;
        let reviews: Vec<Review> = decode(&url, response).await?;
        log!("[API] Received {} reviews for {}", reviews.len(), isbn);
        Ok(reviews)
    }

    async fn user_profile(&self, user_id: &str) -> Result<UserProfile, ReviewError> {
        let url = self.endpoints.user(user_id);
        let response = Request::get(&url).send().await?;
        decode(&url, response).await
    }

    async fn create_review(&self, session: &Session, review: &Review) -> Result<(), ReviewError> {
        let url = self.endpoints.user_reviews(&session.user_id);
        let response = Request::post(&url)
            .header("Authorization", &session.bearer())
            .json(review)?
            .send()
            .await?;
        ensure_success(&url, &response)
    }

    async fn update_review(
        &self,
        session: &Session,
        review_id: i64,
        update: &ReviewUpdate,
    ) -> Result<(), ReviewError> {
        let url = self.endpoints.user_review(&session.user_id, review_id);
        let response = Request::put(&url)
            .header("Authorization", &session.bearer())
            .json(update)?
            .send()
            .await?;
        ensure_success(&url, &response)
    }

    async fn delete_review(&self, session: &Session, review_id: i64) -> Result<(), ReviewError> {
        let url = self.endpoints.user_review(&session.user_id, review_id);
        let response = Request::delete(&url)
            .header("Authorization", &session.bearer())
            .send()
            .await?;
        ensure_success(&url, &response)
    }
}

fn ensure_success(url: &str, response: &Response) -> Result<(), ReviewError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ReviewError::Status {
            url: url.to_string(),
            status: response.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ReviewError> {
    ensure_success(url, &response)?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ReviewError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(&ApiConfig::new("https://gw.example.com/"))
    }

    #[test]
    fn test_review_list_url() {
        assert_eq!(
            endpoints().reviews_by_isbn("9788966262472"),
            "https://gw.example.com/bookreview-service/reviews/isbn/9788966262472"
        );
    }

    #[test]
    fn test_user_urls() {
        let endpoints = endpoints();
        assert_eq!(endpoints.user("alice"), "https://gw.example.com/user-service/users/alice");
        assert_eq!(
            endpoints.user_reviews("alice"),
            "https://gw.example.com/bookreview-service/alice/reviews"
        );
        assert_eq!(
            endpoints.user_review("alice", 42),
            "https://gw.example.com/bookreview-service/alice/reviews/42"
        );
    }

    #[test]
    fn test_path_segments_are_encoded() {
        assert_eq!(
            endpoints().user("kim jisoo/1"),
            "https://gw.example.com/user-service/users/kim%20jisoo%2F1"
        );
    }
}

use std::cell::RefCell;
use std::collections::HashMap;
use bookreview::api::ReviewGateway;
use bookreview::error::ReviewError;
use bookreview::models::review::{Review, ReviewUpdate};
use bookreview::models::user::UserProfile;
use bookreview::session::{Session, SessionStore};

/// In-memory gateway that records every request it receives.
#[derive(Default)]
pub struct FakeGateway {
    pub reviews: RefCell<Result<Vec<Review>, ReviewError>>,
    pub names: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn serving(reviews: Vec<Review>, names: &[(&str, &str)]) -> Self {
        Self {
            reviews: RefCell::new(Ok(reviews)),
            names: names
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reviews: RefCell::new(Err(ReviewError::Network("connection refused".to_string()))),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ReviewGateway for FakeGateway {
    async fn list_reviews(&self, isbn: &str) -> Result<Vec<Review>, ReviewError> {
        self.requests.borrow_mut().push(format!("GET reviews {}", isbn));
        self.reviews.borrow().clone()
    }

    async fn user_profile(&self, user_id: &str) -> Result<UserProfile, ReviewError> {
        self.requests.borrow_mut().push(format!("GET user {}", user_id));
        self.names
            .get(user_id)
            .map(|name| UserProfile { name: name.clone() })
            .ok_or_else(|| ReviewError::Network("unknown user".to_string()))
    }

    async fn create_review(&self, _: &Session, review: &Review) -> Result<(), ReviewError> {
        self.requests.borrow_mut().push(format!("POST review {}", review.content));
        Ok(())
    }

    async fn update_review(&self, _: &Session, review_id: i64, _: &ReviewUpdate) -> Result<(), ReviewError> {
        self.requests.borrow_mut().push(format!("PUT review {}", review_id));
        Ok(())
    }

    async fn delete_review(&self, _: &Session, review_id: i64) -> Result<(), ReviewError> {
        self.requests.borrow_mut().push(format!("DELETE review {}", review_id));
        Ok(())
    }
}

/// Session source with fixed contents instead of local storage.
#[derive(Default)]
pub struct FixedSession {
    pub items: HashMap<String, String>,
}

impl SessionStore for FixedSession {
    fn item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

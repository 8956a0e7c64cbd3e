use thiserror::Error;

/// Errors raised while talking to the review and user services or while
/// validating an action before it reaches the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// `token` or `userId` is missing from local storage.
    #[error("login required")]
    LoginRequired,

    #[error("review content is empty")]
    EmptyContent,

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The gateway answered with a non-2xx status.
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ReviewError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ReviewError::Encode(err.to_string()),
            other => ReviewError::Network(other.to_string()),
        }
    }
}

/// The action whose failure is being reported to the user.
/// Every failure of the same action shows the same static message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedAction {
    Load,
    Create,
    Edit,
    Delete,
}

impl FailedAction {
    pub fn message(self) -> &'static str {
        match self {
            FailedAction::Load => "Failed to load reviews.",
            FailedAction::Create => "Failed to post your review.",
            FailedAction::Edit => "Failed to update your review.",
            FailedAction::Delete => "Failed to delete your review.",
        }
    }
}

pub const LOGIN_REQUIRED_MESSAGE: &str = "You need to log in first.";
pub const CONFIRM_DELETE_MESSAGE: &str = "Delete this review?";

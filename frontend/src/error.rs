use thiserror::Error;

/// Anything that can go wrong talking to the API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// The owning component went away and its request scope was cancelled.
    #[error("request was cancelled")]
    Aborted,
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    /// A 2xx response whose envelope carried `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("unable to decode response: {0}")]
    Decode(String),
    #[error("unable to build request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }

    /// The text worth showing a user, preferring whatever the server said.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } | ApiError::Rejected(message)
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            gloo_net::Error::JsError(js) => ApiError::Network(js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            gloo_net::Error::GlooError(msg) => ApiError::Request(msg),
        }
    }
}

/// Problems caught client-side before any request goes out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please fill in the {0} field")]
    MissingField(&'static str),
    #[error("please choose a {0}")]
    MissingChoice(&'static str),
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("please enter a valid date")]
    InvalidDate,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] ApiError),
    /// The mutation went through but the follow-up refetch did not.
    #[error("saved, but the list could not be refreshed: {0}")]
    Refresh(ApiError),
    /// Another mutation is still outstanding.
    #[error("another request is still in progress")]
    Busy,
}

impl AppError {
    pub fn is_aborted(&self) -> bool {
        match self {
            AppError::Request(e) | AppError::Refresh(e) => e.is_aborted(),
            _ => false,
        }
    }

    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(e) => capitalize(&e.to_string()),
            AppError::Request(e) => e.user_message(fallback),
            AppError::Refresh(_) => "The change was saved, but the list could not be refreshed".to_string(),
            AppError::Busy => "Please wait for the current request to finish".to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Server {
            status: 400,
            message: "Amount is required".to_string(),
        };
        assert_eq!(err.user_message("Error saving expense"), "Amount is required");
    }

    #[test]
    fn blank_server_message_uses_fallback() {
        let err = ApiError::Server {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message("Delete failed"), "Delete failed");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Delete failed"),
            "Delete failed"
        );
    }

    #[test]
    fn validation_messages_are_capitalized() {
        let err = AppError::from(ValidationError::MissingChoice("category"));
        assert_eq!(err.user_message("ignored"), "Please choose a category");
    }

    #[test]
    fn aborts_are_detected_through_wrappers() {
        assert!(AppError::Request(ApiError::Aborted).is_aborted());
        assert!(AppError::Refresh(ApiError::Aborted).is_aborted());
        assert!(!AppError::Busy.is_aborted());
    }
}

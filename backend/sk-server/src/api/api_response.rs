use serde::Serialize;

/// Success envelope: `{"message"?, "data"}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }

    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            message: Some(message),
            data,
        }
    }
}

/// Message-only body: `{"message"}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[schema(nullable = false)]
    pub error: Option<String>,
    /// Contract error code of a rejected call
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub code: Option<u64>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            code: None,
        }
    }

    pub fn contract_error(message: impl Into<String>, code: u64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            code: Some(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let response = ApiResponse::success(0u64);

        assert!(response.success);
        assert_eq!(response.data, Some(0));
        assert_eq!(response.code, None);
    }

    #[test]
    fn test_contract_error_serialization() {
        let response: ApiResponse<u64> = ApiResponse::contract_error("Invalid relay message", 101);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "data": null,
                "error": "Invalid relay message",
                "code": 101
            })
        );
    }

    #[test]
    fn test_plain_error_omits_code() {
        let response: ApiResponse<()> = ApiResponse::error("Bad Request: expected value");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("code").is_none());
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RelayRepoModel, RelayStatus};
use crate::models::RegistryError;
use crate::utils::{deserialize_hex_bytes, serialize_hex_bytes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RelayResponse {
    pub id: u64,
    pub destination_chain: String,
    #[serde(
        serialize_with = "serialize_hex_bytes",
        deserialize_with = "deserialize_hex_bytes"
    )]
    #[schema(value_type = String)]
    pub message_hash: Vec<u8>,
    pub payload_size: u64,
    pub status: RelayStatus,
}

impl From<RelayRepoModel> for RelayResponse {
    fn from(model: RelayRepoModel) -> Self {
        Self {
            id: model.id,
            destination_chain: model.destination_chain,
            message_hash: model.message_hash,
            payload_size: model.payload_size,
            status: model.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptType {
    Ok,
    Err,
}

/// Value carried by a receipt: a boolean flag or an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CallValue {
    Bool(bool),
    Uint(u64),
}

impl From<bool> for CallValue {
    fn from(value: bool) -> Self {
        CallValue::Bool(value)
    }
}

impl From<u64> for CallValue {
    fn from(value: u64) -> Self {
        CallValue::Uint(value)
    }
}

/// Tagged outcome of one registry call, e.g. `{"type":"ok","value":0}` or
/// `{"type":"err","value":101}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CallReceipt {
    #[serde(rename = "type")]
    pub result_type: ReceiptType,
    pub value: CallValue,
}

impl CallReceipt {
    pub fn ok(value: impl Into<CallValue>) -> Self {
        Self {
            result_type: ReceiptType::Ok,
            value: value.into(),
        }
    }

    pub fn err(code: u64) -> Self {
        Self {
            result_type: ReceiptType::Err,
            value: CallValue::Uint(code),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result_type == ReceiptType::Ok
    }
}

impl<T: Into<CallValue>> From<Result<T, RegistryError>> for CallReceipt {
    fn from(result: Result<T, RegistryError>) -> Self {
        match result {
            Ok(value) => CallReceipt::ok(value),
            Err(error) => CallReceipt::err(error.code()),
        }
    }
}

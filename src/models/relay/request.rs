use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::{deserialize_hex_bytes, deserialize_uint, serialize_hex_bytes};

/// Body of `POST /relays`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRelayRequest {
    #[schema(example = "ethereum")]
    pub destination_chain: String,
    /// Hex encoded, `0x` prefix optional.
    #[serde(
        serialize_with = "serialize_hex_bytes",
        deserialize_with = "deserialize_hex_bytes"
    )]
    #[schema(value_type = String, example = "0x746573744d65737361676548617368")]
    pub message_hash: Vec<u8>,
    #[serde(deserialize_with = "deserialize_uint")]
    #[schema(example = 256)]
    pub payload_size: u64,
}

/// A single call against the registry, tagged by the public function name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "function", rename_all = "kebab-case")]
pub enum RegistryCall {
    CreateRelay {
        destination_chain: String,
        #[serde(
            serialize_with = "serialize_hex_bytes",
            deserialize_with = "deserialize_hex_bytes"
        )]
        #[schema(value_type = String)]
        message_hash: Vec<u8>,
        #[serde(deserialize_with = "deserialize_uint")]
        payload_size: u64,
    },
    ConfirmRelay {
        #[serde(deserialize_with = "deserialize_uint")]
        id: u64,
    },
}

impl RegistryCall {
    /// Public function name, as used on the wire.
    pub fn function_name(&self) -> &'static str {
        match self {
            RegistryCall::CreateRelay { .. } => "create-relay",
            RegistryCall::ConfirmRelay { .. } => "confirm-relay",
        }
    }
}

impl From<CreateRelayRequest> for RegistryCall {
    fn from(request: CreateRelayRequest) -> Self {
        RegistryCall::CreateRelay {
            destination_chain: request.destination_chain,
            message_hash: request.message_hash,
            payload_size: request.payload_size,
        }
    }
}

/// Body of `POST /calls`. Calls run in order, each on its own.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CallBatchRequest {
    pub calls: Vec<RegistryCall>,
}

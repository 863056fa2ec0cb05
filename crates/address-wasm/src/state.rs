//! Serializable views of classification results.

use address_core::AddressResult;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Classification details handed to JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    /// The address as entered.
    pub address: String,
    /// Address type tag, e.g. "P2WPKH".
    pub address_type: String,
    /// Network name, e.g. "mainnet".
    pub network: String,
    /// Whether the address is Bech32/Bech32m encoded.
    pub is_bech32: bool,
}

impl From<&AddressResult> for AddressInfo {
    fn from(result: &AddressResult) -> Self {
        AddressInfo {
            address: result.address.clone(),
            address_type: result.address_type.name().to_string(),
            network: result.network.name().to_string(),
            is_bech32: result.is_bech32,
        }
    }
}

impl AddressInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }

    /// Convert to a JSON string.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Serialization error: {}", e))
    }
}

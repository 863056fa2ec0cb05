//! Address classification bindings.

use address_core::{AddressError, AddressResult, Network};
use wasm_bindgen::prelude::*;

use crate::state::AddressInfo;

fn parse_network(network: &str) -> Result<Network, JsValue> {
    Network::from_name(network).ok_or_else(|| JsValue::from_str("Invalid network"))
}

fn classify_logged(address: &str) -> Result<AddressResult, JsValue> {
    address_core::classify(address).map_err(|e: AddressError| {
        console_log(&format!("Rejected address {:?}: {}", address, e));
        JsValue::from_str(&format!("Invalid address: {}", e))
    })
}

/// Classify an address, returning `{ address, addressType, network, isBech32 }`.
#[wasm_bindgen]
pub fn classify(address: &str) -> Result<JsValue, JsValue> {
    let result = classify_logged(address)?;
    AddressInfo::from(&result).to_js()
}

/// Classify an address, returning the result as a JSON string.
#[wasm_bindgen]
pub fn classify_json(address: &str) -> Result<String, JsValue> {
    let result = classify_logged(address)?;
    AddressInfo::from(&result)
        .to_json()
        .map_err(|e| JsValue::from_str(&e))
}

/// Check an address, optionally against a network name.
///
/// # Arguments
/// * `address` - The Bitcoin address to check
/// * `network` - "mainnet", "testnet" or "regtest"; any network if omitted
#[wasm_bindgen]
pub fn validate(address: &str, network: Option<String>) -> Result<bool, JsValue> {
    let expected = network.as_deref().map(parse_network).transpose()?;
    Ok(address_core::validate(address, expected))
}

/// Reusable validator bound to an optional expected network.
#[wasm_bindgen]
pub struct AddressValidator {
    /// Network every checked address must belong to.
    network: Option<Network>,
}

#[wasm_bindgen]
impl AddressValidator {
    /// Create a validator, accepting any network if `network` is omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(network: Option<String>) -> Result<AddressValidator, JsValue> {
        let network = network.as_deref().map(parse_network).transpose()?;
        Ok(AddressValidator { network })
    }

    /// Whether the address is valid for this validator's network.
    #[wasm_bindgen]
    pub fn check(&self, address: &str) -> bool {
        address_core::validate(address, self.network)
    }

    /// Classify the address, rejecting it if it is on another network.
    #[wasm_bindgen]
    pub fn classify(&self, address: &str) -> Result<JsValue, JsValue> {
        let result = classify_logged(address)?;
        if let Some(expected) = self.network {
            if expected != result.network {
                return Err(JsValue::from_str(&format!(
                    "Address network mismatch: expected {}, got {}",
                    expected, result.network
                )));
            }
        }
        AddressInfo::from(&result).to_js()
    }

    /// Get the expected network, if any.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        self.network.map(|n| n.name().to_string())
    }
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_validate() {
        let address = "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx";
        assert_eq!(validate(address, None).unwrap(), true);
        assert_eq!(validate(address, Some("testnet".into())).unwrap(), true);
        assert_eq!(validate(address, Some("mainnet".into())).unwrap(), false);
        assert!(validate(address, Some("dogecoin".into())).is_err());
    }

    #[wasm_bindgen_test]
    fn test_classify_json() {
        let json = classify_json("bc1ptxs597p3fnpd8gwut5p467ulsydae3rp9z75hd99w8k3ljr9g9rqx6ynaw").unwrap();
        assert!(json.contains(r#""addressType":"P2TR""#));
        assert!(classify_json("bc1qw508d6qejxtdg4y5r3zrrvary0c5xw7kv8f3t4").is_err());
    }

    #[wasm_bindgen_test]
    fn test_validator() {
        let validator = AddressValidator::new(Some("regtest".into())).unwrap();
        assert_eq!(validator.network(), Some("regtest".to_string()));
        assert!(validator.check("bcrt1q6z64a43mjgkcq0ul2znwneq3spghrlau9slefp"));
        assert!(!validator.check("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"));
        assert!(validator.classify("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq").is_err());

        let any = AddressValidator::new(None).unwrap();
        assert_eq!(any.network(), None);
        assert!(any.classify("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy").is_ok());
    }
}

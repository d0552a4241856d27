use serde::{Deserialize, Serialize};

/// Signature scheme of an injected account's keypair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeypairType {
    Ed25519,
    Sr25519,
    Ecdsa,
    Ethereum,
}

/// One account published by a wallet extension.
///
/// Field names follow the injected provider's wire shape (camelCase keys),
/// so these records deserialize directly from the objects delivered by the
/// extension's account subscription. The app mirrors them into local state
/// but never owns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InjectedAccount {
    /// ss58-encoded address.
    pub address: String,
    /// Display name assigned inside the wallet, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Genesis hash of the chain this account is scoped to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_hash: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<KeypairType>,
}

impl InjectedAccount {
    /// Label shown in account pickers: the wallet-side name when present,
    /// the address otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_extension_wire_shape() {
        let json = r#"{
            "address": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "name": "Alice",
            "genesisHash": "0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3",
            "type": "sr25519"
        }"#;

        let account: InjectedAccount = serde_json::from_str(json).expect("valid account");
        assert_eq!(account.name.as_deref(), Some("Alice"));
        assert_eq!(account.key_type, Some(KeypairType::Sr25519));
        assert!(account.genesis_hash.as_deref().unwrap().starts_with("0x91b1"));
    }

    #[test]
    fn optional_fields_may_be_absent_or_null() {
        let json = r#"{"address": "5Addr1", "genesisHash": null}"#;
        let account: InjectedAccount = serde_json::from_str(json).expect("valid account");
        assert_eq!(account.address, "5Addr1");
        assert_eq!(account.name, None);
        assert_eq!(account.genesis_hash, None);
        assert_eq!(account.display_name(), "5Addr1");
    }
}

use serde::{Deserialize, Serialize};

/// Contract ABI metadata, either inline or referenced by string.
///
/// A reference string is usually a URL the metadata can be fetched from, but
/// raw metadata passed through as a string is accepted as well; resolution
/// happens at contract instantiation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetadataSource {
    Reference(String),
    Inline(serde_json::Value),
}

impl MetadataSource {
    /// Whether the reference points at a fetchable location rather than
    /// carrying metadata content itself.
    pub fn is_url(&self) -> bool {
        match self {
            MetadataSource::Reference(s) => {
                s.starts_with("http://") || s.starts_with("https://") || s.starts_with('/')
            }
            MetadataSource::Inline(_) => false,
        }
    }
}

/// A deployed contract instance the UI can talk to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractDeployment {
    pub id: String,
    pub metadata: MetadataSource,
    /// On-chain address of the instance.
    pub address: String,
    /// Id of the network the instance is deployed on.
    pub network: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_reference_vs_inline() {
        let hosted: MetadataSource =
            serde_json::from_str(r#""/metadata/greeter.json""#).expect("string form");
        assert!(matches!(hosted, MetadataSource::Reference(_)));
        assert!(hosted.is_url());

        let inline: MetadataSource =
            serde_json::from_str(r#"{"spec": {"messages": []}}"#).expect("object form");
        assert!(matches!(inline, MetadataSource::Inline(_)));
        assert!(!inline.is_url());
    }

    #[test]
    fn raw_metadata_string_is_not_a_url() {
        let raw = MetadataSource::Reference("{\"spec\":{}}".to_string());
        assert!(!raw.is_url());
    }
}

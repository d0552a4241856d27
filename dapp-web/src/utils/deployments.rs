//! Contract deployments
//!
//! Addresses of the contract instances the dapp talks to, one per network.
//! Metadata is served alongside the app bundle and fetched at instantiation
//! time.

use shared::{ContractDeployment, MetadataSource};

pub const GREETER_CONTRACT_ID: &str = "greeter";

pub fn deployments() -> Vec<ContractDeployment> {
    vec![
        ContractDeployment {
            id: GREETER_CONTRACT_ID.into(),
            metadata: MetadataSource::Reference("/metadata/greeter.json".into()),
            address: "16SGAneLcwMDaQ9aPvLAgcKkDmkRRkh3cs2Wcz8SGB5hNmUs".into(),
            network: "pop_testnet".into(),
        },
        ContractDeployment {
            id: GREETER_CONTRACT_ID.into(),
            metadata: MetadataSource::Reference("/metadata/greeter.json".into()),
            address: "5CYZapLt9nhpYVhvhmNbKiSHEDHPSxuzniorrp1wXu9ZLqCZ".into(),
            network: "alephzero_testnet".into(),
        },
        ContractDeployment {
            id: GREETER_CONTRACT_ID.into(),
            metadata: MetadataSource::Reference("/metadata/greeter.json".into()),
            address: "arUnVjTFog2T9enDstTrS3qTjoq1DikftZTVgY5WYTNpRHP".into(),
            network: "shibuya".into(),
        },
    ]
}

pub fn deployment_for(contract_id: &str, network_id: &str) -> Option<ContractDeployment> {
    deployments()
        .into_iter()
        .find(|d| d.id == contract_id && d.network == network_id)
}

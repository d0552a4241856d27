//! Chain client interop
//!
//! The dapp delegates all chain communication (RPC transport, ABI
//! encoding/decoding, signing payload assembly) to the client library the
//! page bundles as `window.dedot`. This module only creates and disposes
//! handles and forwards calls; it implements none of the client semantics.

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use shared::NetworkInfo;

use crate::error::{DappError, Result};
use crate::services::js_error_message;

#[wasm_bindgen(inline_js = "
function clientBundle() {
    const dedot = window.dedot;
    if (!dedot) {
        throw new Error('chain client bundle is not loaded');
    }
    return dedot;
}

export async function createChainClient(endpoint, legacyRpc) {
    const dedot = clientBundle();
    return await dedot.createClient(endpoint, { legacyRpc: !!legacyRpc });
}

export async function disconnectChainClient(client) {
    if (client && typeof client.disconnect === 'function') {
        await client.disconnect();
    }
}

export async function queryFreeBalance(client, address) {
    const account = await client.query.system.account(address);
    return account.data.free.toString();
}

export async function createContractInstance(client, metadata, address) {
    const dedot = clientBundle();
    return new dedot.Contract(client, metadata, address);
}

export async function queryContract(contract, message, args, caller) {
    const { data } = await contract.query[message](...args, { caller });
    return JSON.stringify(data);
}

export async function submitContractTx(contract, message, args, address, signer, onStatus) {
    const tx = contract.tx[message](...args);
    await tx.signAndSend(address, { signer }, (result) => onStatus(result.status));
}
")]
extern "C" {
    #[wasm_bindgen(js_name = createChainClient, catch)]
    async fn create_chain_client_js(
        endpoint: &str,
        legacy_rpc: bool,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = disconnectChainClient, catch)]
    async fn disconnect_chain_client_js(client: &JsValue) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(js_name = queryFreeBalance, catch)]
    async fn query_free_balance_js(
        client: &JsValue,
        address: &str,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = createContractInstance, catch)]
    async fn create_contract_instance_js(
        client: &JsValue,
        metadata: &str,
        address: &str,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = queryContract, catch)]
    async fn query_contract_js(
        contract: &JsValue,
        message: &str,
        args: &Array,
        caller: &str,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = submitContractTx, catch)]
    async fn submit_contract_tx_js(
        contract: &JsValue,
        message: &str,
        args: &Array,
        address: &str,
        signer: &JsValue,
        on_status: &Function,
    ) -> std::result::Result<(), JsValue>;
}

/// Live connection to one network.
#[derive(Clone)]
pub struct ChainClient {
    raw: JsValue,
    network_id: String,
}

impl ChainClient {
    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    pub async fn disconnect(&self) {
        if let Err(e) = disconnect_chain_client_js(&self.raw).await {
            log::warn!("client disconnect failed: {}", js_error_message(&e));
        }
    }
}

pub async fn create_chain_client(network: &NetworkInfo) -> Result<ChainClient> {
    let legacy = matches!(network.json_rpc_api, Some(shared::JsonRpcApi::Legacy));
    let raw = create_chain_client_js(&network.endpoint, legacy)
        .await
        .map_err(|e| DappError::Client(js_error_message(&e)))?;
    Ok(ChainClient { raw, network_id: network.id.clone() })
}

/// Free balance of `address` in the smallest indivisible unit.
pub async fn query_free_balance(client: &ChainClient, address: &str) -> Result<u128> {
    let value = query_free_balance_js(&client.raw, address)
        .await
        .map_err(|e| DappError::Client(js_error_message(&e)))?;
    let text = value
        .as_string()
        .ok_or_else(|| DappError::Client("balance is not a string".into()))?;
    text.parse()
        .map_err(|e| DappError::Client(format!("unparseable balance {text:?}: {e}")))
}

/// Instance of a deployed contract, bound to one client.
#[derive(Clone)]
pub struct ContractHandle {
    raw: JsValue,
}

pub async fn instantiate_contract(
    client: &ChainClient,
    metadata: &str,
    address: &str,
) -> Result<ContractHandle> {
    let raw = create_contract_instance_js(&client.raw, metadata, address)
        .await
        .map_err(|e| DappError::Client(js_error_message(&e)))?;
    Ok(ContractHandle { raw })
}

/// Dry-run a contract message and return the decoded result as JSON.
pub async fn query_contract(
    contract: &ContractHandle,
    message: &str,
    args: &Array,
    caller: &str,
) -> Result<String> {
    let value = query_contract_js(&contract.raw, message, args, caller)
        .await
        .map_err(|e| DappError::Client(js_error_message(&e)))?;
    value
        .as_string()
        .ok_or_else(|| DappError::Client("contract query returned no data".into()))
}

/// Sign and submit a contract transaction. Status updates stream into
/// `on_status` until finalization; the returned future resolves when the
/// submission itself settles and fails if signing is refused.
pub async fn submit_contract_tx(
    contract: &ContractHandle,
    message: &str,
    args: &Array,
    address: &str,
    signer: &JsValue,
    on_status: &Function,
) -> Result<()> {
    submit_contract_tx_js(&contract.raw, message, args, address, signer, on_status)
        .await
        .map_err(|e| DappError::Client(js_error_message(&e)))
}

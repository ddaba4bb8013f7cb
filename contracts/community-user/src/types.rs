//! Storage keys, limits and events for community membership credentials.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Maximum number of recipients in a single airdrop.
pub const MAX_BATCH_SIZE: u32 = 100;

/// Display name of the credential collection.
pub const COLLECTION_NAME: &str = "Talent Protocol Community User";

/// Storage keys for contract state.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address (can airdrop credentials)
    Admin,
    /// Collection symbol
    Symbol,
    /// Number of credentials issued; also the last id handed out
    Issued,
    /// Holder of a credential id
    Owner(u64),
    /// Credential id held by an address
    Member(Address),
}

/// Events emitted by the credential contract.
pub struct MemberEvents;

impl MemberEvents {
    /// Event emitted for each credential handed out.
    pub fn issued(env: &Env, recipient: &Address, id: u64) {
        let topics = (symbol_short!("member"), symbol_short!("issued"));
        env.events().publish(topics, (recipient.clone(), id));
    }

    /// Event emitted once per airdrop.
    pub fn airdrop_completed(env: &Env, first_id: u64, count: u32) {
        let topics = (symbol_short!("member"), symbol_short!("airdrop"));
        env.events().publish(topics, (first_id, count));
    }
}

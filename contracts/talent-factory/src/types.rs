//! Storage keys and events for the minting authority.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Storage keys for contract state.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Administrator (may assign the minter)
    Admin,
    /// Destination token administered by this contract
    Token,
    /// The single address allowed to mint; absent when nobody holds the role
    Minter,
    /// Total amount minted through the factory
    TotalMinted,
}

/// Events emitted by the factory.
pub struct FactoryEvents;

impl FactoryEvents {
    pub fn initialized(env: &Env, admin: &Address, token: &Address) {
        let topics = (symbol_short!("factory"), symbol_short!("init"));
        env.events().publish(topics, (admin.clone(), token.clone()));
    }

    /// Emitted whenever the minting role changes hands. `new_minter` is `None`
    /// after a renounce.
    pub fn minter_changed(
        env: &Env,
        changed_by: &Address,
        previous: Option<Address>,
        new_minter: Option<Address>,
    ) {
        let topics = (symbol_short!("factory"), symbol_short!("minter"));
        env.events().publish(
            topics,
            (
                changed_by.clone(),
                previous,
                new_minter,
                env.ledger().timestamp(),
            ),
        );
    }

    pub fn minted(env: &Env, minter: &Address, to: &Address, amount: i128, total: i128) {
        let topics = (symbol_short!("factory"), symbol_short!("mint"));
        env.events()
            .publish(topics, (minter.clone(), to.clone(), amount, total));
    }

    pub fn admin_changed(env: &Env, previous: &Address, new_admin: &Address) {
        let topics = (symbol_short!("factory"), symbol_short!("admin"));
        env.events()
            .publish(topics, (previous.clone(), new_admin.clone()));
    }
}

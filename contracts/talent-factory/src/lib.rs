//! # Talent Factory Contract
//!
//! Holds the exclusive right to mint the destination token. The destination token is
//! a Stellar asset contract whose admin has been handed to this contract, so every
//! mint goes through [`TalentFactory::mint`].
//!
//! ## Features
//!
//! - **Single Minter**: At most one address may mint at any time; assigning a new
//!   minter overwrites the previous one in a single write
//! - **Role Separation**: The administrator assigns the minter but cannot mint itself
//! - **Hand-over**: The current minter may transfer or renounce the role
//! - **Supply Tracking**: Keeps the running total minted through the factory
//!
//! Cap enforcement is left to the minter; the factory mints whatever an authorized
//! caller asks for.

#![no_std]

mod types;

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env};

pub use crate::types::{DataKey, FactoryEvents};

/// Error codes for the factory contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Contract already initialized
    AlreadyInitialized = 2,
    /// Caller does not hold the role required by the operation
    Unauthorized = 3,
    /// Mint amount is zero or negative
    InvalidAmount = 4,
    /// Supply counter overflowed
    Overflow = 5,
}

#[contract]
pub struct TalentFactory;

#[contractimpl]
impl TalentFactory {
    /// Initializes the factory.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `admin` - The administrator that may assign the minter
    /// * `token` - The destination token; its admin must be this contract
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), FactoryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(FactoryError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::TotalMinted, &0i128);

        FactoryEvents::initialized(&env, &admin, &token);
        Ok(())
    }

    /// Assigns the minting role to `candidate`, replacing any current holder.
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the administrator
    pub fn set_minter(env: Env, caller: Address, candidate: Address) -> Result<(), FactoryError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        Self::write_minter(&env, &caller, Some(candidate));
        Ok(())
    }

    /// Hands the minting role from the current minter to `candidate`.
    ///
    /// # Errors
    /// * `Unauthorized` - If `current` does not hold the role
    pub fn transfer_minter(
        env: Env,
        current: Address,
        candidate: Address,
    ) -> Result<(), FactoryError> {
        current.require_auth();
        Self::require_minter(&env, &current)?;

        Self::write_minter(&env, &current, Some(candidate));
        Ok(())
    }

    /// Gives up the minting role. Nobody can mint until the administrator
    /// assigns a new minter.
    pub fn renounce_minter(env: Env, current: Address) -> Result<(), FactoryError> {
        current.require_auth();
        Self::require_minter(&env, &current)?;

        Self::write_minter(&env, &current, None);
        Ok(())
    }

    /// Mints `amount` destination tokens to `to`.
    ///
    /// Only the current minter may call this; the administrator is not a minter
    /// unless it assigned the role to itself.
    ///
    /// # Errors
    /// * `Unauthorized` - If `minter` is not the current minter
    /// * `InvalidAmount` - If `amount` is not positive
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), FactoryError> {
        minter.require_auth();
        Self::require_minter(&env, &minter)?;

        if amount <= 0 {
            return Err(FactoryError::InvalidAmount);
        }

        let token_address = Self::get_token(env.clone())?;
        token::StellarAssetClient::new(&env, &token_address).mint(&to, &amount);

        let total = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(FactoryError::Overflow)?;
        env.storage().instance().set(&DataKey::TotalMinted, &total);

        FactoryEvents::minted(&env, &minter, &to, amount, total);
        Ok(())
    }

    /// Returns the current minter, if any.
    pub fn get_minter(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Minter)
    }

    /// Returns true if `account` currently holds the minting role.
    pub fn is_minter(env: Env, account: Address) -> bool {
        Self::get_minter(env) == Some(account)
    }

    /// Returns the admin address.
    pub fn get_admin(env: Env) -> Result<Address, FactoryError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(FactoryError::NotInitialized)
    }

    /// Returns the destination token address.
    pub fn get_token(env: Env) -> Result<Address, FactoryError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(FactoryError::NotInitialized)
    }

    /// Returns the total amount minted through the factory.
    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalMinted)
            .unwrap_or(0)
    }

    /// Returns the destination token balance of `id`.
    pub fn balance(env: Env, id: Address) -> Result<i128, FactoryError> {
        let token_address = Self::get_token(env.clone())?;
        Ok(token::Client::new(&env, &token_address).balance(&id))
    }

    /// Updates the admin address.
    pub fn set_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), FactoryError> {
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        env.storage().instance().set(&DataKey::Admin, &new_admin);

        FactoryEvents::admin_changed(&env, &current_admin, &new_admin);
        Ok(())
    }

    // Sole writer of `DataKey::Minter`.
    fn write_minter(env: &Env, changed_by: &Address, new_minter: Option<Address>) {
        let previous: Option<Address> = env.storage().instance().get(&DataKey::Minter);

        match &new_minter {
            Some(minter) => env.storage().instance().set(&DataKey::Minter, minter),
            None => env.storage().instance().remove(&DataKey::Minter),
        }

        FactoryEvents::minter_changed(env, changed_by, previous, new_minter);
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), FactoryError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(FactoryError::NotInitialized)?;

        if *caller != admin {
            return Err(FactoryError::Unauthorized);
        }
        Ok(())
    }

    fn require_minter(env: &Env, caller: &Address) -> Result<(), FactoryError> {
        if !env.storage().instance().has(&DataKey::Admin) {
            return Err(FactoryError::NotInitialized);
        }

        let minter: Option<Address> = env.storage().instance().get(&DataKey::Minter);
        if minter.as_ref() != Some(caller) {
            return Err(FactoryError::Unauthorized);
        }
        Ok(())
    }
}

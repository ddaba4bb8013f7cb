//! # Community User Contract
//!
//! Membership credentials for the Talent Protocol community. Each address can hold
//! at most one credential, ids are handed out sequentially from 1, and credentials
//! can never be transferred once issued.

#![no_std]

mod types;
mod validation;

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

pub use crate::types::{DataKey, MemberEvents, COLLECTION_NAME, MAX_BATCH_SIZE};
use crate::validation::validate_airdrop;

/// Error codes for the community user contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CommunityUserError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Contract already initialized
    AlreadyInitialized = 2,
    /// Caller is not the administrator
    Unauthorized = 3,
    /// Batch is empty
    EmptyBatch = 4,
    /// Batch exceeds maximum size
    BatchTooLarge = 5,
    /// Recipient already holds a credential
    AlreadyMember = 6,
    /// No credential with that id or holder
    NotFound = 7,
    /// Credentials cannot change hands
    NonTransferable = 8,
}

#[contract]
pub struct CommunityUser;

#[contractimpl]
impl CommunityUser {
    /// Initializes the collection.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `admin` - The admin address that can airdrop credentials
    /// * `symbol` - Collection symbol, e.g. `TALUSERS1`
    pub fn initialize(env: Env, admin: Address, symbol: String) -> Result<(), CommunityUserError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(CommunityUserError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::Issued, &0u64);
        Ok(())
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, COLLECTION_NAME)
    }

    pub fn symbol(env: Env) -> Result<String, CommunityUserError> {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .ok_or(CommunityUserError::NotInitialized)
    }

    /// Issues one credential to each recipient, in order.
    ///
    /// Either every recipient receives a credential or none does.
    ///
    /// # Returns
    /// * The ids handed out, aligned with `recipients`
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not admin
    /// * `EmptyBatch` - If no recipients provided
    /// * `BatchTooLarge` - If batch exceeds maximum size
    /// * `AlreadyMember` - If any recipient already holds a credential
    pub fn airdrop(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
    ) -> Result<Vec<u64>, CommunityUserError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        validate_airdrop(&env, &recipients)?;

        let issued: u64 = env
            .storage()
            .instance()
            .get(&DataKey::Issued)
            .unwrap_or(0);
        let first_id = issued + 1;

        let mut ids: Vec<u64> = Vec::new(&env);
        let mut next_id = first_id;
        for recipient in recipients.iter() {
            env.storage()
                .persistent()
                .set(&DataKey::Owner(next_id), &recipient);
            env.storage()
                .persistent()
                .set(&DataKey::Member(recipient.clone()), &next_id);

            MemberEvents::issued(&env, &recipient, next_id);
            ids.push_back(next_id);
            next_id += 1;
        }

        env.storage()
            .instance()
            .set(&DataKey::Issued, &(next_id - 1));
        MemberEvents::airdrop_completed(&env, first_id, recipients.len());

        Ok(ids)
    }

    pub fn owner_of(env: Env, id: u64) -> Result<Address, CommunityUserError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(id))
            .ok_or(CommunityUserError::NotFound)
    }

    /// Credential id held by `owner`.
    pub fn token_of(env: Env, owner: Address) -> Result<u64, CommunityUserError> {
        env.storage()
            .persistent()
            .get(&DataKey::Member(owner))
            .ok_or(CommunityUserError::NotFound)
    }

    /// 1 for members, 0 otherwise.
    pub fn balance_of(env: Env, owner: Address) -> u32 {
        if validation::is_member(&env, &owner) {
            1
        } else {
            0
        }
    }

    pub fn total_supply(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::Issued)
            .unwrap_or(0)
    }

    pub fn get_admin(env: Env) -> Result<Address, CommunityUserError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(CommunityUserError::NotInitialized)
    }

    pub fn transfer(
        _env: Env,
        _from: Address,
        _to: Address,
        _id: u64,
    ) -> Result<(), CommunityUserError> {
        Err(CommunityUserError::NonTransferable)
    }

    pub fn transfer_from(
        _env: Env,
        _spender: Address,
        _from: Address,
        _to: Address,
        _id: u64,
    ) -> Result<(), CommunityUserError> {
        Err(CommunityUserError::NonTransferable)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), CommunityUserError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(CommunityUserError::NotInitialized)?;
        if *caller != admin {
            return Err(CommunityUserError::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;

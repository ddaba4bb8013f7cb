//! Validation logic for credential airdrops.

use soroban_sdk::{Address, Env, Map, Vec};

use crate::types::{DataKey, MAX_BATCH_SIZE};
use crate::CommunityUserError;

/// Validates an airdrop batch before anything is written.
///
/// # Errors
/// * `EmptyBatch` - If no recipients were given
/// * `BatchTooLarge` - If the batch exceeds [`MAX_BATCH_SIZE`]
/// * `AlreadyMember` - If a recipient already holds a credential or appears twice
pub fn validate_airdrop(env: &Env, recipients: &Vec<Address>) -> Result<(), CommunityUserError> {
    let count = recipients.len();
    if count == 0 {
        return Err(CommunityUserError::EmptyBatch);
    }
    if count > MAX_BATCH_SIZE {
        return Err(CommunityUserError::BatchTooLarge);
    }

    let mut seen: Map<Address, bool> = Map::new(env);
    for recipient in recipients.iter() {
        if seen.contains_key(recipient.clone()) || is_member(env, &recipient) {
            return Err(CommunityUserError::AlreadyMember);
        }
        seen.set(recipient, true);
    }

    Ok(())
}

/// Returns true when `account` already holds a credential.
pub fn is_member(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Member(account.clone()))
}

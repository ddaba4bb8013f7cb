//! Issuance ledger: cumulative destination units minted through migration.
//!
//! [`reserve`] is the only writer of `minted_so_far` after initialization.

use soroban_sdk::{log, Env};

use crate::types::{DataKey, IssuanceCap};
use crate::MigrationError;

impl IssuanceCap {
    pub fn new(max_destination_units: i128) -> Result<Self, MigrationError> {
        if max_destination_units <= 0 {
            return Err(MigrationError::InvalidCap);
        }
        Ok(IssuanceCap {
            max_destination_units,
            minted_so_far: 0,
        })
    }

    pub fn remaining(&self) -> i128 {
        self.max_destination_units - self.minted_so_far
    }

    /// Returns the ledger after issuing `amount` more, or `CapExceeded` if that
    /// would pass the cap. No partial credit.
    pub fn try_reserve(&self, amount: i128) -> Result<IssuanceCap, MigrationError> {
        let minted_so_far = self
            .minted_so_far
            .checked_add(amount)
            .ok_or(MigrationError::CapExceeded)?;

        if minted_so_far > self.max_destination_units {
            return Err(MigrationError::CapExceeded);
        }

        Ok(IssuanceCap {
            max_destination_units: self.max_destination_units,
            minted_so_far,
        })
    }
}

pub(crate) fn init(env: &Env, cap: &IssuanceCap) {
    env.storage().instance().set(&DataKey::Cap, cap);
}

pub fn read(env: &Env) -> Result<IssuanceCap, MigrationError> {
    env.storage()
        .instance()
        .get(&DataKey::Cap)
        .ok_or(MigrationError::NotInitialized)
}

/// Check-and-increment of the issuance ledger.
pub fn reserve(env: &Env, amount: i128) -> Result<IssuanceCap, MigrationError> {
    let cap = read(env)?;

    let updated = cap.try_reserve(amount).map_err(|e| {
        log!(env, "issuance cap exceeded", amount, cap.remaining());
        e
    })?;

    env.storage().instance().set(&DataKey::Cap, &updated);
    Ok(updated)
}

//! Events emitted by the migration contract.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{ConversionRecord, Window};

pub struct MigrationEvents;

impl MigrationEvents {
    pub fn initialized(env: &Env, admin: &Address, window: &Window, issuance_cap: i128) {
        let topics = (symbol_short!("migrate"), symbol_short!("init"));
        env.events().publish(
            topics,
            (admin.clone(), window.start_at, window.end_at, issuance_cap),
        );
    }

    /// Emitted for every successful conversion.
    pub fn converted(env: &Env, record: &ConversionRecord) {
        let topics = (
            symbol_short!("migrate"),
            symbol_short!("convert"),
            record.participant.clone(),
        );
        env.events().publish(
            topics,
            (
                record.id,
                record.source_amount_in,
                record.destination_amount_out,
                record.payment_token.clone(),
                record.amount_paid,
            ),
        );
    }

    pub fn reserve_withdrawn(env: &Env, token: &Address, to: &Address, amount: i128) {
        let topics = (symbol_short!("migrate"), symbol_short!("withdraw"));
        env.events()
            .publish(topics, (token.clone(), to.clone(), amount));
    }
}

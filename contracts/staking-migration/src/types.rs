//! Data types and storage keys for the migration contract.

use soroban_sdk::{contracttype, Address};

/// Fixed-point scale of [`ConversionRate`] prices (7 decimals).
pub const RATE_SCALE: i128 = 10_000_000;

/// Highest token precision the conversion maths accepts.
pub const MAX_DECIMALS: u32 = 18;

/// Default delay between deployment and the window opening (10 minutes).
pub const DEFAULT_START_OFFSET: u64 = 10 * 60;

/// Default delay between deployment and the window closing (one year).
pub const DEFAULT_END_OFFSET: u64 = 365 * 24 * 60 * 60;

/// Default issuance cap: 400 million whole units of a 7-decimal destination token.
pub const DEFAULT_ISSUANCE_CAP: i128 = 400_000_000 * 10_000_000;

/// Prices fixed at deployment, both scaled by [`RATE_SCALE`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ConversionRate {
    /// Stable units spent for one source unit
    pub reference_per_source: i128,
    /// Destination units received for one source unit
    pub destination_per_source: i128,
}

/// Migration window. Conversions are accepted for `start_at <= now < end_at`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Window {
    pub start_at: u64,
    pub end_at: u64,
}

/// Window classification of a ledger timestamp. Always derived, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum WindowState {
    Pending,
    Open,
    Closed,
}

/// Cumulative destination issuance through migration.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct IssuanceCap {
    pub max_destination_units: i128,
    pub minted_so_far: i128,
}

/// Decimal precision of every token the contract prices.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Precision {
    pub source: u32,
    pub destination: u32,
    /// Present only when stable payments are enabled
    pub stable: Option<u32>,
}

/// Deployment parameters handed to `initialize`.
#[derive(Clone, Debug)]
#[contracttype]
pub struct MigrationSettings {
    pub start_at: u64,
    pub end_at: u64,
    /// Maximum destination units mintable through migration
    pub issuance_cap: i128,
    /// Pegged stable unit accepted by `convert_stable`, if any
    pub stable_token: Option<Address>,
    pub rate: ConversionRate,
}

impl MigrationSettings {
    /// Builds settings whose window is expressed relative to `now`, the way
    /// deployment tooling configures it.
    pub fn from_offsets(
        now: u64,
        start_offset: u64,
        end_offset: u64,
        issuance_cap: i128,
        stable_token: Option<Address>,
        rate: ConversionRate,
    ) -> Self {
        MigrationSettings {
            start_at: now.saturating_add(start_offset),
            end_at: now.saturating_add(end_offset),
            issuance_cap,
            stable_token,
            rate,
        }
    }
}

/// Immutable configuration written once by `initialize`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    /// Minting authority for the destination token
    pub factory: Address,
    pub source_token: Address,
    pub destination_token: Address,
    pub stable_token: Option<Address>,
    pub rate: ConversionRate,
    pub window: Window,
    pub precision: Precision,
}

/// A completed conversion. Written once, never edited.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ConversionRecord {
    /// Global sequence number, starting at 1
    pub id: u64,
    pub participant: Address,
    /// Token the participant paid with (source or stable)
    pub payment_token: Address,
    /// Amount of `payment_token` moved into the reserve
    pub amount_paid: i128,
    /// Source-unit value of the payment
    pub source_amount_in: i128,
    pub destination_amount_out: i128,
    pub timestamp: u64,
}

/// Storage keys for contract state.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Immutable configuration
    Config,
    /// Issuance ledger
    Cap,
    /// Number of conversion records written
    RecordCount,
    /// Conversion record by id
    Record(u64),
    /// Record ids of a participant, oldest first
    Participant(Address),
}

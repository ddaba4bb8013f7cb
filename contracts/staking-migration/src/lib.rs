//! # Staking Migration Contract
//!
//! Converts holdings of a source token (or a pegged stable unit) into the Talent
//! destination token at a price fixed at deployment. Conversions are accepted only
//! inside a time window and only while the cumulative issuance stays under a cap.
//! Destination tokens are minted through the factory, which must have named this
//! contract its minter.
//!
//! ## Conversion pipeline
//!
//! 1. Reject non-positive amounts
//! 2. Reject calls outside the open window
//! 3. Price the payment with truncating fixed-point maths
//! 4. Reserve the destination amount on the issuance ledger
//! 5. Pull the payment into the contract reserve (allowance based)
//! 6. Mint through the factory
//! 7. Append the conversion record and emit an event
//!
//! Every failure returns an error from the top-level call, which discards all of
//! the call's storage writes, token movements and events.

#![no_std]

mod events;
mod factory;
mod history;
mod ledger;
mod pricing;
mod types;
mod window;

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env, Vec};

pub use crate::events::MigrationEvents;
pub use crate::factory::{MintAuthority, MintAuthorityClient};
pub use crate::types::{
    Config, ConversionRate, ConversionRecord, DataKey, IssuanceCap, MigrationSettings,
    Precision, Window, WindowState, DEFAULT_END_OFFSET, DEFAULT_ISSUANCE_CAP,
    DEFAULT_START_OFFSET, MAX_DECIMALS, RATE_SCALE,
};

/// Error codes for the migration contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MigrationError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Contract already initialized
    AlreadyInitialized = 2,
    /// Caller is not the administrator
    Unauthorized = 3,
    /// Current time is outside the migration window
    WindowNotOpen = 4,
    /// Amount is zero, negative, or prices to zero destination units
    ZeroAmount = 5,
    /// Conversion would pass the issuance cap
    CapExceeded = 6,
    /// Token transfer was rejected
    TransferFailed = 7,
    /// Factory refused to mint
    MintFailed = 8,
    /// Window start is not before its end
    InvalidWindow = 9,
    /// A price is zero or negative
    InvalidRate = 10,
    /// Issuance cap is zero or negative
    InvalidCap = 11,
    /// Fixed-point maths overflowed
    ArithmeticOverflow = 12,
    /// No stable token configured
    StablePaymentDisabled = 13,
    /// A token declares more decimals than supported
    InvalidDecimals = 14,
    /// Factory address does not answer as a minting authority
    InvalidFactory = 15,
}

#[contract]
pub struct StakingMigration;

#[contractimpl]
impl StakingMigration {
    /// Initializes the migration.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `admin` - Administrator; may withdraw from the reserve
    /// * `factory` - Minting authority for the destination token
    /// * `source_token` - Token being migrated away from
    /// * `settings` - Window, cap, prices and optional stable token
    ///
    /// # Errors
    /// * `AlreadyInitialized` - On a second call
    /// * `InvalidWindow`, `InvalidCap`, `InvalidRate`, `InvalidDecimals` - Bad settings
    /// * `InvalidFactory` - If the factory cannot name its token
    pub fn initialize(
        env: Env,
        admin: Address,
        factory: Address,
        source_token: Address,
        settings: MigrationSettings,
    ) -> Result<(), MigrationError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(MigrationError::AlreadyInitialized);
        }

        admin.require_auth();

        let window = Window::new(settings.start_at, settings.end_at)?;
        settings.rate.validate()?;
        let cap = IssuanceCap::new(settings.issuance_cap)?;

        let destination_token = match MintAuthorityClient::new(&env, &factory).try_get_token() {
            Ok(Ok(token)) => token,
            _ => return Err(MigrationError::InvalidFactory),
        };

        let precision = Precision {
            source: token::Client::new(&env, &source_token).decimals(),
            destination: token::Client::new(&env, &destination_token).decimals(),
            stable: settings
                .stable_token
                .as_ref()
                .map(|stable| token::Client::new(&env, stable).decimals()),
        };
        precision.validate()?;

        let config = Config {
            admin: admin.clone(),
            factory,
            source_token,
            destination_token,
            stable_token: settings.stable_token,
            rate: settings.rate,
            window: window.clone(),
            precision,
        };

        env.storage().instance().set(&DataKey::Config, &config);
        ledger::init(&env, &cap);

        MigrationEvents::initialized(&env, &admin, &window, cap.max_destination_units);
        Ok(())
    }

    /// Converts `source_amount_in` source tokens into destination tokens.
    ///
    /// The participant must have approved this contract for at least
    /// `source_amount_in` on the source token.
    ///
    /// # Errors
    /// * `ZeroAmount` - If the amount is not positive or prices to nothing
    /// * `WindowNotOpen` - Before `start_at` or from `end_at` on
    /// * `CapExceeded` - If the issuance cap has no room for the result
    /// * `TransferFailed` - If the source tokens cannot be pulled
    /// * `MintFailed` - If the factory refuses to mint
    pub fn convert(
        env: Env,
        participant: Address,
        source_amount_in: i128,
    ) -> Result<ConversionRecord, MigrationError> {
        participant.require_auth();

        if source_amount_in <= 0 {
            return Err(MigrationError::ZeroAmount);
        }

        let config = Self::read_config(&env)?;
        let now = env.ledger().timestamp();
        Self::require_open(&config, now)?;

        let destination_amount_out = config
            .rate
            .destination_for_source(source_amount_in, &config.precision)?;

        Self::settle(
            &env,
            &config,
            &participant,
            &config.source_token,
            source_amount_in,
            source_amount_in,
            destination_amount_out,
            now,
        )
    }

    /// Converts a payment in the pegged stable unit. The stable amount is first
    /// priced into source units, then into destination units.
    ///
    /// # Errors
    /// * `StablePaymentDisabled` - If no stable token was configured
    /// * otherwise as [`StakingMigration::convert`]
    pub fn convert_stable(
        env: Env,
        participant: Address,
        stable_amount: i128,
    ) -> Result<ConversionRecord, MigrationError> {
        participant.require_auth();

        if stable_amount <= 0 {
            return Err(MigrationError::ZeroAmount);
        }

        let config = Self::read_config(&env)?;
        let (stable_token, stable_decimals) = Self::stable_payment(&config)?;
        let now = env.ledger().timestamp();
        Self::require_open(&config, now)?;

        let source_amount_in =
            config
                .rate
                .source_for_reference(stable_amount, stable_decimals, config.precision.source)?;
        if source_amount_in <= 0 {
            return Err(MigrationError::ZeroAmount);
        }
        let destination_amount_out = config
            .rate
            .destination_for_source(source_amount_in, &config.precision)?;

        Self::settle(
            &env,
            &config,
            &participant,
            &stable_token,
            stable_amount,
            source_amount_in,
            destination_amount_out,
            now,
        )
    }

    /// Destination units `source_amount` would convert into. Does not check the
    /// window or the cap.
    pub fn quote(env: Env, source_amount: i128) -> Result<i128, MigrationError> {
        if source_amount <= 0 {
            return Err(MigrationError::ZeroAmount);
        }
        let config = Self::read_config(&env)?;
        config
            .rate
            .destination_for_source(source_amount, &config.precision)
    }

    /// Destination units a stable payment of `stable_amount` would convert into.
    pub fn quote_stable(env: Env, stable_amount: i128) -> Result<i128, MigrationError> {
        if stable_amount <= 0 {
            return Err(MigrationError::ZeroAmount);
        }
        let config = Self::read_config(&env)?;
        let (_, stable_decimals) = Self::stable_payment(&config)?;
        let source_amount =
            config
                .rate
                .source_for_reference(stable_amount, stable_decimals, config.precision.source)?;
        config
            .rate
            .destination_for_source(source_amount, &config.precision)
    }

    /// Moves `amount` of `token` out of the contract reserve.
    ///
    /// # Errors
    /// * `Unauthorized` - If `caller` is not the administrator
    /// * `TransferFailed` - If the reserve does not hold enough
    pub fn withdraw_reserve(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), MigrationError> {
        caller.require_auth();
        let config = Self::read_config(&env)?;
        if caller != config.admin {
            return Err(MigrationError::Unauthorized);
        }
        if amount <= 0 {
            return Err(MigrationError::ZeroAmount);
        }

        let reserve = env.current_contract_address();
        match token::Client::new(&env, &token).try_transfer(&reserve, &to, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(MigrationError::TransferFailed),
        }

        MigrationEvents::reserve_withdrawn(&env, &token, &to, amount);
        Ok(())
    }

    /// Returns the stored configuration.
    pub fn get_config(env: Env) -> Result<Config, MigrationError> {
        Self::read_config(&env)
    }

    /// Returns the conversion prices.
    pub fn conversion_rate(env: Env) -> Result<ConversionRate, MigrationError> {
        Ok(Self::read_config(&env)?.rate)
    }

    /// Returns the window bounds.
    pub fn window(env: Env) -> Result<Window, MigrationError> {
        Ok(Self::read_config(&env)?.window)
    }

    /// Classifies the current ledger time against the window.
    pub fn window_state(env: Env) -> Result<WindowState, MigrationError> {
        let config = Self::read_config(&env)?;
        Ok(config.window.state_at(env.ledger().timestamp()))
    }

    /// Returns the issuance ledger.
    pub fn issuance_cap(env: Env) -> Result<IssuanceCap, MigrationError> {
        ledger::read(&env)
    }

    /// Returns the destination units minted through migration so far.
    pub fn minted_so_far(env: Env) -> Result<i128, MigrationError> {
        Ok(ledger::read(&env)?.minted_so_far)
    }

    /// Returns the destination units still available under the cap.
    pub fn remaining_capacity(env: Env) -> Result<i128, MigrationError> {
        Ok(ledger::read(&env)?.remaining())
    }

    /// Returns every conversion made by `participant`, oldest first.
    pub fn records_of(env: Env, participant: Address) -> Vec<ConversionRecord> {
        history::records_of(&env, &participant)
    }

    /// Returns a conversion record by id.
    pub fn get_record(env: Env, id: u64) -> Option<ConversionRecord> {
        history::get(&env, id)
    }

    /// Returns the number of conversions made.
    pub fn record_count(env: Env) -> u64 {
        history::count(&env)
    }

    // Steps 4-7 of the pipeline, shared by both payment paths.
    #[allow(clippy::too_many_arguments)]
    fn settle(
        env: &Env,
        config: &Config,
        participant: &Address,
        payment_token: &Address,
        amount_paid: i128,
        source_amount_in: i128,
        destination_amount_out: i128,
        now: u64,
    ) -> Result<ConversionRecord, MigrationError> {
        if destination_amount_out <= 0 {
            return Err(MigrationError::ZeroAmount);
        }

        ledger::reserve(env, destination_amount_out)?;
        Self::pull_payment(env, payment_token, participant, amount_paid)?;
        Self::mint(env, config, participant, destination_amount_out)?;

        let record = ConversionRecord {
            id: history::next_id(env),
            participant: participant.clone(),
            payment_token: payment_token.clone(),
            amount_paid,
            source_amount_in,
            destination_amount_out,
            timestamp: now,
        };
        history::append(env, &record);

        MigrationEvents::converted(env, &record);
        Ok(record)
    }

    fn pull_payment(
        env: &Env,
        payment_token: &Address,
        participant: &Address,
        amount: i128,
    ) -> Result<(), MigrationError> {
        let reserve = env.current_contract_address();
        let client = token::Client::new(env, payment_token);

        match client.try_transfer_from(&reserve, participant, &reserve, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "payment transfer rejected", participant.clone(), amount);
                Err(MigrationError::TransferFailed)
            }
        }
    }

    fn mint(
        env: &Env,
        config: &Config,
        participant: &Address,
        amount: i128,
    ) -> Result<(), MigrationError> {
        let authority = MintAuthorityClient::new(env, &config.factory);

        match authority.try_mint(&env.current_contract_address(), participant, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "factory refused mint", amount);
                Err(MigrationError::MintFailed)
            }
        }
    }

    fn stable_payment(config: &Config) -> Result<(Address, u32), MigrationError> {
        match (&config.stable_token, config.precision.stable) {
            (Some(token), Some(decimals)) => Ok((token.clone(), decimals)),
            _ => Err(MigrationError::StablePaymentDisabled),
        }
    }

    fn require_open(config: &Config, now: u64) -> Result<(), MigrationError> {
        if config.window.state_at(now) != WindowState::Open {
            return Err(MigrationError::WindowNotOpen);
        }
        Ok(())
    }

    fn read_config(env: &Env) -> Result<Config, MigrationError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(MigrationError::NotInitialized)
    }
}

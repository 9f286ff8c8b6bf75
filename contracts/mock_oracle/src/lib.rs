#![no_std]

//! Mock Price Feed Contract
//!
//! An aggregator-style USD price feed for local deployments and tests. It
//! answers `latest_price` in the shared [`PriceData`] layout and allows test
//! control over:
//! - The reported answer, round by round
//! - Staleness (back-dated rounds, configurable threshold)
//! - Availability (pause/unpause)

use shared_utils::{ErrorHelper, Events, PriceData};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Symbol,
};

/// Interface version reported by `version()`
pub const FEED_VERSION: u32 = 4;

/// Default maximum round age in seconds
pub const DEFAULT_STALENESS_THRESHOLD: u64 = 3600;

/// Oracle-specific errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Contract already initialized
    AlreadyInitialized = 2,
    /// Caller is not authorized
    Unauthorized = 3,
    /// No round recorded for the requested id
    PriceNotFound = 4,
    /// Latest round is older than the staleness threshold
    StalePrice = 5,
    /// Answers must be strictly positive
    InvalidPrice = 6,
    /// Feed is paused
    FeedUnavailable = 7,
}

impl OracleError {
    pub fn message(&self) -> &'static str {
        match self {
            OracleError::NotInitialized => "Feed not initialized",
            OracleError::AlreadyInitialized => "Feed already initialized",
            OracleError::Unauthorized => "Unauthorized: caller is not admin or feeder",
            OracleError::PriceNotFound => "No round recorded",
            OracleError::StalePrice => "Latest round is stale",
            OracleError::InvalidPrice => "Answer must be positive",
            OracleError::FeedUnavailable => "Feed is paused",
        }
    }
}

fn fail(e: &Env, err: OracleError) -> OracleError {
    ErrorHelper::log_error(e, err.message());
    err
}

/// Storage keys for the feed contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Decimal places of every answer
    Decimals,
    /// Id of the most recent round
    LatestRound,
    /// Round data (round_id -> PriceData)
    Round(u64),
    /// Staleness threshold in seconds
    StalenessThreshold,
    /// Whether the feed is paused
    Paused,
    /// Authorized price feeders
    Feeder(Address),
}

#[contract]
pub struct MockOracleContract;

#[contractimpl]
impl MockOracleContract {
    /// Initialize the feed and record its first round
    ///
    /// # Arguments
    /// * `admin` - The admin address for the contract
    /// * `decimals` - Decimal places of every answer (8 for USD pairs)
    /// * `initial_answer` - The first reported price
    /// * `staleness_threshold` - Maximum age of the latest round in seconds
    pub fn initialize(
        e: Env,
        admin: Address,
        decimals: u32,
        initial_answer: i128,
        staleness_threshold: u64,
    ) -> Result<(), OracleError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(fail(&e, OracleError::AlreadyInitialized));
        }
        if initial_answer <= 0 {
            return Err(fail(&e, OracleError::InvalidPrice));
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Decimals, &decimals);
        e.storage()
            .instance()
            .set(&DataKey::StalenessThreshold, &staleness_threshold);
        e.storage().instance().set(&DataKey::Paused, &false);

        // Admin is automatically a feeder
        e.storage()
            .instance()
            .set(&DataKey::Feeder(admin.clone()), &true);

        Self::record_round(&e, initial_answer, e.ledger().timestamp());

        Events::emit(
            &e,
            Symbol::new(&e, "OracleInitialized"),
            (admin, decimals, staleness_threshold),
        );

        Ok(())
    }

    /// Report a new answer stamped with the current ledger time
    ///
    /// # Returns
    /// The id of the new round
    pub fn update_answer(e: Env, caller: Address, answer: i128) -> Result<u64, OracleError> {
        Self::update_round_data(e.clone(), caller, answer, e.ledger().timestamp())
    }

    /// Report a new answer with an explicit timestamp (for testing staleness)
    ///
    /// # Arguments
    /// * `caller` - Must be admin or authorized feeder
    /// * `answer` - The price, scaled by `10^decimals`
    /// * `updated_at` - Timestamp recorded for the round
    pub fn update_round_data(
        e: Env,
        caller: Address,
        answer: i128,
        updated_at: u64,
    ) -> Result<u64, OracleError> {
        caller.require_auth();

        if !Self::is_authorized(&e, &caller)? {
            return Err(fail(&e, OracleError::Unauthorized));
        }
        if answer <= 0 {
            return Err(fail(&e, OracleError::InvalidPrice));
        }

        Ok(Self::record_round(&e, answer, updated_at))
    }

    /// Get the most recent round, failing if the feed is paused or stale
    pub fn latest_price(e: Env) -> Result<PriceData, OracleError> {
        Self::require_available(&e)?;

        let round_id: u64 = e
            .storage()
            .instance()
            .get(&DataKey::LatestRound)
            .ok_or(OracleError::PriceNotFound)?;
        let data = Self::read_round(&e, round_id)?;

        let staleness_threshold: u64 = e
            .storage()
            .instance()
            .get(&DataKey::StalenessThreshold)
            .unwrap_or(DEFAULT_STALENESS_THRESHOLD);

        let current_time = e.ledger().timestamp();
        if current_time > data.updated_at && current_time - data.updated_at > staleness_threshold
        {
            return Err(fail(&e, OracleError::StalePrice));
        }

        Ok(data)
    }

    /// Get a historical round (no staleness check)
    pub fn get_round_data(e: Env, round_id: u64) -> Result<PriceData, OracleError> {
        Self::require_available(&e)?;
        Self::read_round(&e, round_id)
    }

    /// Id of the most recent round
    pub fn latest_round(e: Env) -> Result<u64, OracleError> {
        e.storage()
            .instance()
            .get(&DataKey::LatestRound)
            .ok_or(OracleError::NotInitialized)
    }

    /// Decimal places of every answer
    pub fn decimals(e: Env) -> Result<u32, OracleError> {
        e.storage()
            .instance()
            .get(&DataKey::Decimals)
            .ok_or(OracleError::NotInitialized)
    }

    /// Interface version of this feed
    pub fn version(_e: Env) -> u32 {
        FEED_VERSION
    }

    /// Pause the feed (for testing unavailability)
    pub fn pause(e: Env, caller: Address) -> Result<(), OracleError> {
        Self::require_admin(&e, &caller)?;

        e.storage().instance().set(&DataKey::Paused, &true);
        Events::emit(&e, symbol_short!("Paused"), ());

        Ok(())
    }

    /// Unpause the feed
    pub fn unpause(e: Env, caller: Address) -> Result<(), OracleError> {
        Self::require_admin(&e, &caller)?;

        e.storage().instance().set(&DataKey::Paused, &false);
        Events::emit(&e, symbol_short!("Unpaused"), ());

        Ok(())
    }

    /// Add an authorized price feeder
    pub fn add_feeder(e: Env, caller: Address, feeder: Address) -> Result<(), OracleError> {
        Self::require_admin(&e, &caller)?;

        e.storage()
            .instance()
            .set(&DataKey::Feeder(feeder.clone()), &true);
        Events::emit(&e, Symbol::new(&e, "FeederAdded"), feeder);

        Ok(())
    }

    /// Remove an authorized price feeder
    pub fn remove_feeder(e: Env, caller: Address, feeder: Address) -> Result<(), OracleError> {
        Self::require_admin(&e, &caller)?;

        e.storage()
            .instance()
            .remove(&DataKey::Feeder(feeder.clone()));
        Events::emit(&e, Symbol::new(&e, "FeederRemoved"), feeder);

        Ok(())
    }

    /// Update staleness threshold
    pub fn set_staleness_threshold(
        e: Env,
        caller: Address,
        threshold: u64,
    ) -> Result<(), OracleError> {
        Self::require_admin(&e, &caller)?;

        e.storage()
            .instance()
            .set(&DataKey::StalenessThreshold, &threshold);
        Events::emit(&e, Symbol::new(&e, "ThresholdUpdated"), threshold);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(e: Env) -> Result<Address, OracleError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(OracleError::NotInitialized)
    }

    /// Check if address is a feeder
    pub fn is_feeder(e: Env, address: Address) -> bool {
        e.storage()
            .instance()
            .get(&DataKey::Feeder(address))
            .unwrap_or(false)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn record_round(e: &Env, answer: i128, updated_at: u64) -> u64 {
        let round_id = e
            .storage()
            .instance()
            .get::<_, u64>(&DataKey::LatestRound)
            .unwrap_or(0)
            + 1;
        let decimals: u32 = e.storage().instance().get(&DataKey::Decimals).unwrap_or(0);

        let data = PriceData {
            round_id,
            price: answer,
            decimals,
            updated_at,
        };
        e.storage().instance().set(&DataKey::Round(round_id), &data);
        e.storage().instance().set(&DataKey::LatestRound, &round_id);

        Events::emit_with_topics(
            e,
            (Symbol::new(e, "PriceUpdated"), round_id),
            (answer, updated_at),
        );

        round_id
    }

    fn read_round(e: &Env, round_id: u64) -> Result<PriceData, OracleError> {
        e.storage()
            .instance()
            .get(&DataKey::Round(round_id))
            .ok_or(OracleError::PriceNotFound)
    }

    fn require_available(e: &Env) -> Result<(), OracleError> {
        if !e.storage().instance().has(&DataKey::Admin) {
            return Err(OracleError::NotInitialized);
        }
        let paused: bool = e
            .storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false);
        if paused {
            return Err(fail(e, OracleError::FeedUnavailable));
        }
        Ok(())
    }

    fn is_admin(e: &Env, address: &Address) -> Result<bool, OracleError> {
        let admin: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(OracleError::NotInitialized)?;
        Ok(*address == admin)
    }

    fn require_admin(e: &Env, caller: &Address) -> Result<(), OracleError> {
        caller.require_auth();
        if !Self::is_admin(e, caller)? {
            return Err(fail(e, OracleError::Unauthorized));
        }
        Ok(())
    }

    fn is_authorized(e: &Env, address: &Address) -> Result<bool, OracleError> {
        // Admin is always authorized
        if Self::is_admin(e, address)? {
            return Ok(true);
        }

        Ok(e.storage()
            .instance()
            .get(&DataKey::Feeder(address.clone()))
            .unwrap_or(false))
    }
}

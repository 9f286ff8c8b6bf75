use shared_utils::Storage;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Immutable deployment settings (instance)
    Config,
    /// Ordered list of distinct funders since the last withdrawal (persistent)
    Funders,
    /// Cumulative contribution per funder (persistent)
    AmountFunded(Address),
}

/// Settings fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub price_feed: Address,
    pub native_token: Address,
    pub minimum_usd: i128,
}

pub fn save_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
    Storage::bump_instance(e);
}

pub fn get_config(e: &Env) -> Option<Config> {
    let config = e.storage().instance().get::<_, Config>(&DataKey::Config);
    if config.is_some() {
        Storage::bump_instance(e);
    }
    config
}

// ============================================================================
// Contribution records
// ============================================================================

/// Recorded contribution of `funder`; absent entries read as zero
pub fn get_amount_funded(e: &Env, funder: &Address) -> i128 {
    let key = DataKey::AmountFunded(funder.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            Storage::bump_persistent(e, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_amount_funded(e: &Env, funder: &Address, amount: i128) {
    let key = DataKey::AmountFunded(funder.clone());
    e.storage().persistent().set(&key, &amount);
    Storage::bump_persistent(e, &key);
}

/// Reset a funder's record to zero by dropping the entry
pub fn clear_amount_funded(e: &Env, funder: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}

// ============================================================================
// Funders list
// ============================================================================

pub fn get_funders(e: &Env) -> Vec<Address> {
    match e.storage().persistent().get::<_, Vec<Address>>(&DataKey::Funders) {
        Some(funders) => {
            Storage::bump_persistent(e, &DataKey::Funders);
            funders
        }
        None => Vec::new(e),
    }
}

pub fn get_funders_count(e: &Env) -> u32 {
    get_funders(e).len()
}

/// Funder at `index`, reading the list from storage on every call
pub fn get_funder(e: &Env, index: u32) -> Option<Address> {
    get_funders(e).get(index)
}

pub fn push_funder(e: &Env, funder: &Address) {
    let mut funders = get_funders(e);
    funders.push_back(funder.clone());
    e.storage().persistent().set(&DataKey::Funders, &funders);
    Storage::bump_persistent(e, &DataKey::Funders);
}

pub fn clear_funders(e: &Env) {
    e.storage().persistent().remove(&DataKey::Funders);
}

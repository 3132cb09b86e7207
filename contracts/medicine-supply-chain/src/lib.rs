#![no_std]

mod error;
mod events;
mod stages;
mod storage;
mod tracker;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::*;
pub use events::{MedicineAddedEvent, SoldToBuyerEvent, SoldToRetailerEvent};
pub use stages::CustodyStage;
pub use storage::{MedicineRecord, MAX_PAGE_SIZE};

#[contract]
pub struct MedicineSupplyChain;

#[contractimpl]
impl MedicineSupplyChain {
    /// Register a new medicine batch; returns its id
    pub fn create_medicine(
        env: Env,
        manufacturer: Address,
        name: String,
        composition: String,
        manufacturing_date: u64,
        expiry_date: u64,
    ) -> Result<u64, ContractError> {
        manufacturer.require_auth();
        tracker::create_medicine(
            &env,
            &manufacturer,
            name,
            composition,
            manufacturing_date,
            expiry_date,
        )
    }

    /// Sell a medicine from its manufacturer to a retailer
    pub fn transfer_to_retailer(
        env: Env,
        id: u64,
        retailer: Address,
        caller: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        stages::transfer_to_retailer(&env, id, &retailer, &caller)
    }

    /// Sell a medicine from its retailer to a buyer
    pub fn transfer_to_buyer(
        env: Env,
        id: u64,
        buyer: Address,
        caller: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        stages::transfer_to_buyer(&env, id, &buyer, &caller)
    }

    /// Get medicine details
    pub fn get_medicine(env: Env, id: u64) -> Result<MedicineRecord, ContractError> {
        tracker::get_medicine(&env, id)
    }

    /// Check expiry against the current ledger time
    pub fn is_expired(env: Env, id: u64) -> Result<bool, ContractError> {
        tracker::is_expired(&env, id)
    }

    /// Get the custody stage of a medicine
    pub fn get_stage(env: Env, id: u64) -> Result<CustodyStage, ContractError> {
        stages::get_stage(&env, id)
    }

    /// Number of medicines created so far
    pub fn medicine_count(env: Env) -> u64 {
        tracker::medicine_count(&env)
    }

    pub fn medicine_exists(env: Env, id: u64) -> bool {
        tracker::medicine_exists(&env, id)
    }

    /// List medicine records in id order
    pub fn get_medicines(env: Env, offset: u64, limit: u32) -> Vec<MedicineRecord> {
        tracker::get_medicines(&env, offset, limit)
    }

    /// Get ids of medicines created by a manufacturer
    pub fn get_manufacturer_medicines(
        env: Env,
        manufacturer: Address,
        offset: u32,
        limit: u32,
    ) -> Vec<u64> {
        tracker::get_manufacturer_medicines(&env, &manufacturer, offset, limit)
    }

    /// Get ids of medicines sold to a retailer
    pub fn get_retailer_medicines(
        env: Env,
        retailer: Address,
        offset: u32,
        limit: u32,
    ) -> Vec<u64> {
        tracker::get_retailer_medicines(&env, &retailer, offset, limit)
    }
}

use crate::error::ContractError;
use crate::events::{emit_sold_to_buyer, emit_sold_to_retailer};
use crate::storage::{self, MedicineRecord};
use crate::tracker;
use soroban_sdk::{contracttype, log, Address, Env};

/// Custody progression of a medicine. Derived from the sold flags, never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CustodyStage {
    Created,
    SoldToRetailer,
    SoldToBuyer,
}

impl CustodyStage {
    pub fn of(medicine: &MedicineRecord) -> Self {
        if medicine.is_sold_to_buyer {
            CustodyStage::SoldToBuyer
        } else if medicine.is_sold_to_retailer {
            CustodyStage::SoldToRetailer
        } else {
            CustodyStage::Created
        }
    }
}

pub fn get_stage(env: &Env, id: u64) -> Result<CustodyStage, ContractError> {
    let medicine = tracker::get_medicine(env, id)?;
    Ok(CustodyStage::of(&medicine))
}

// Existence, then caller, then transfer state.
pub fn transfer_to_retailer(
    env: &Env,
    id: u64,
    retailer: &Address,
    caller: &Address,
) -> Result<(), ContractError> {
    let mut medicine = tracker::get_medicine(env, id)?;

    if medicine.manufacturer != *caller {
        log!(env, "medicine {}: caller is not the manufacturer", id);
        return Err(ContractError::Unauthorized);
    }

    if medicine.is_sold_to_retailer {
        log!(env, "medicine {}: already sold to a retailer", id);
        return Err(ContractError::AlreadyTransferred);
    }

    medicine.retailer = Some(retailer.clone());
    medicine.is_sold_to_retailer = true;

    storage::set_medicine(env, &medicine);
    storage::add_retailer_medicine(env, retailer, id);
    storage::extend_instance(env);

    emit_sold_to_retailer(
        env,
        id,
        medicine.manufacturer,
        retailer.clone(),
        env.ledger().timestamp(),
    );

    Ok(())
}

// An unset retailer never matches, so selling to a buyer before a retailer
// transfer is rejected as unauthorized.
pub fn transfer_to_buyer(
    env: &Env,
    id: u64,
    buyer: &Address,
    caller: &Address,
) -> Result<(), ContractError> {
    let mut medicine = tracker::get_medicine(env, id)?;

    if medicine.retailer.as_ref() != Some(caller) {
        log!(env, "medicine {}: caller is not the retailer", id);
        return Err(ContractError::Unauthorized);
    }

    if medicine.is_sold_to_buyer {
        log!(env, "medicine {}: already sold to a buyer", id);
        return Err(ContractError::AlreadyTransferred);
    }

    medicine.buyer = Some(buyer.clone());
    medicine.is_sold_to_buyer = true;

    storage::set_medicine(env, &medicine);
    storage::extend_instance(env);

    emit_sold_to_buyer(
        env,
        id,
        caller.clone(),
        buyer.clone(),
        env.ledger().timestamp(),
    );

    Ok(())
}

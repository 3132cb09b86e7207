use crate::error::ContractError;
use crate::events::emit_medicine_added;
use crate::storage::{self, MedicineRecord};
use crate::utils::Utils;
use soroban_sdk::{log, Address, Env, String, Vec};

pub fn create_medicine(
    env: &Env,
    manufacturer: &Address,
    name: String,
    composition: String,
    manufacturing_date: u64,
    expiry_date: u64,
) -> Result<u64, ContractError> {
    if !Utils::validate_date_range(manufacturing_date, expiry_date) {
        log!(
            env,
            "rejected medicine: expiry {} not after manufacturing {}",
            expiry_date,
            manufacturing_date
        );
        return Err(ContractError::InvalidDateRange);
    }

    let id = storage::get_next_medicine_id(env);
    let medicine = MedicineRecord {
        id,
        name: name.clone(),
        composition,
        manufacturing_date,
        expiry_date,
        manufacturer: manufacturer.clone(),
        retailer: None,
        buyer: None,
        is_sold_to_retailer: false,
        is_sold_to_buyer: false,
    };

    storage::set_medicine(env, &medicine);
    storage::add_manufacturer_medicine(env, manufacturer, id);
    storage::extend_instance(env);

    emit_medicine_added(
        env,
        id,
        manufacturer.clone(),
        name,
        manufacturing_date,
        expiry_date,
    );

    Ok(id)
}

pub fn get_medicine(env: &Env, id: u64) -> Result<MedicineRecord, ContractError> {
    let medicine = storage::get_medicine(env, id).ok_or(ContractError::NotFound)?;
    storage::extend_instance(env);
    Ok(medicine)
}

pub fn is_expired(env: &Env, id: u64) -> Result<bool, ContractError> {
    let medicine = get_medicine(env, id)?;
    Ok(Utils::is_expired_at(
        medicine.expiry_date,
        env.ledger().timestamp(),
    ))
}

pub fn medicine_count(env: &Env) -> u64 {
    storage::get_medicine_count(env)
}

pub fn medicine_exists(env: &Env, id: u64) -> bool {
    storage::has_medicine(env, id)
}

/// Records with ids `offset + 1 ..= offset + limit`, clipped to the counter.
pub fn get_medicines(env: &Env, offset: u64, limit: u32) -> Vec<MedicineRecord> {
    let (start, end) = Utils::page_range(offset, limit, storage::get_medicine_count(env));
    let mut medicines = Vec::new(env);

    for id in (start + 1)..=end {
        if let Some(medicine) = storage::get_medicine(env, id) {
            medicines.push_back(medicine);
        }
    }

    medicines
}

pub fn get_manufacturer_medicines(
    env: &Env,
    manufacturer: &Address,
    offset: u32,
    limit: u32,
) -> Vec<u64> {
    let total = storage::get_manufacturer_medicine_count(env, manufacturer);
    paginate(env, total, offset, limit, |slot| {
        storage::get_manufacturer_medicine(env, manufacturer, slot)
    })
}

pub fn get_retailer_medicines(env: &Env, retailer: &Address, offset: u32, limit: u32) -> Vec<u64> {
    let total = storage::get_retailer_medicine_count(env, retailer);
    paginate(env, total, offset, limit, |slot| {
        storage::get_retailer_medicine(env, retailer, slot)
    })
}

// Reads only the slots inside the requested window.
fn paginate<F>(env: &Env, total: u32, offset: u32, limit: u32, slot: F) -> Vec<u64>
where
    F: Fn(u32) -> Option<u64>,
{
    let (start, end) = Utils::page_range(offset as u64, limit, total as u64);
    let mut result = Vec::new(env);

    for i in start..end {
        if let Some(id) = slot(i as u32) {
            result.push_back(id);
        }
    }

    result
}

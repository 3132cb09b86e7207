use soroban_sdk::{contracttype, Address, Env, String};

const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Upper bound on the number of entries returned by a single listing query.
pub const MAX_PAGE_SIZE: u32 = 50;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicineRecord {
    pub id: u64,
    pub name: String,
    pub composition: String,
    pub manufacturing_date: u64,
    pub expiry_date: u64,
    pub manufacturer: Address,
    pub retailer: Option<Address>,
    pub buyer: Option<Address>,
    pub is_sold_to_retailer: bool,
    pub is_sold_to_buyer: bool,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    MedicineCounter,                        // number of medicines created so far
    Medicine(u64),                          // id -> MedicineRecord
    ManufacturerMedicineCount(Address),     // manufacturer -> number of ids
    ManufacturerMedicine(Address, u32),     // (manufacturer, slot) -> id
    RetailerMedicineCount(Address),         // retailer -> number of ids
    RetailerMedicine(Address, u32),         // (retailer, slot) -> id
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// Counter functions
pub fn get_medicine_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::MedicineCounter)
        .unwrap_or(0u64)
}

pub fn get_next_medicine_id(env: &Env) -> u64 {
    let next = get_medicine_count(env) + 1;
    env.storage()
        .instance()
        .set(&StorageKey::MedicineCounter, &next);
    next
}

// Medicine storage functions
pub fn has_medicine(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&StorageKey::Medicine(id))
}

pub fn get_medicine(env: &Env, id: u64) -> Option<MedicineRecord> {
    let key = StorageKey::Medicine(id);
    let medicine = env.storage().persistent().get(&key);
    if medicine.is_some() {
        extend_persistent(env, &key);
    }
    medicine
}

pub fn set_medicine(env: &Env, medicine: &MedicineRecord) {
    let key = StorageKey::Medicine(medicine.id);
    env.storage().persistent().set(&key, medicine);
    extend_persistent(env, &key);
}

// Index functions. Each slot is its own entry so appending stays constant-size.
fn get_index_count(env: &Env, count_key: &StorageKey) -> u32 {
    env.storage().persistent().get(count_key).unwrap_or(0u32)
}

fn get_index_slot(env: &Env, slot_key: &StorageKey) -> Option<u64> {
    let id = env.storage().persistent().get(slot_key);
    if id.is_some() {
        extend_persistent(env, slot_key);
    }
    id
}

fn append_index(env: &Env, count_key: StorageKey, slot_key: StorageKey, slot: u32, id: u64) {
    env.storage().persistent().set(&slot_key, &id);
    extend_persistent(env, &slot_key);
    env.storage().persistent().set(&count_key, &(slot + 1));
    extend_persistent(env, &count_key);
}

// Manufacturer index functions
pub fn get_manufacturer_medicine_count(env: &Env, manufacturer: &Address) -> u32 {
    get_index_count(env, &StorageKey::ManufacturerMedicineCount(manufacturer.clone()))
}

pub fn get_manufacturer_medicine(env: &Env, manufacturer: &Address, slot: u32) -> Option<u64> {
    get_index_slot(env, &StorageKey::ManufacturerMedicine(manufacturer.clone(), slot))
}

pub fn add_manufacturer_medicine(env: &Env, manufacturer: &Address, id: u64) {
    let slot = get_manufacturer_medicine_count(env, manufacturer);
    append_index(
        env,
        StorageKey::ManufacturerMedicineCount(manufacturer.clone()),
        StorageKey::ManufacturerMedicine(manufacturer.clone(), slot),
        slot,
        id,
    );
}

// Retailer index functions
pub fn get_retailer_medicine_count(env: &Env, retailer: &Address) -> u32 {
    get_index_count(env, &StorageKey::RetailerMedicineCount(retailer.clone()))
}

pub fn get_retailer_medicine(env: &Env, retailer: &Address, slot: u32) -> Option<u64> {
    get_index_slot(env, &StorageKey::RetailerMedicine(retailer.clone(), slot))
}

pub fn add_retailer_medicine(env: &Env, retailer: &Address, id: u64) {
    let slot = get_retailer_medicine_count(env, retailer);
    append_index(
        env,
        StorageKey::RetailerMedicineCount(retailer.clone()),
        StorageKey::RetailerMedicine(retailer.clone(), slot),
        slot,
        id,
    );
}

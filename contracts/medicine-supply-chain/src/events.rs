use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicineAddedEvent {
    pub id: u64,
    pub manufacturer: Address,
    pub name: String,
    pub manufacturing_date: u64,
    pub expiry_date: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoldToRetailerEvent {
    pub id: u64,
    pub manufacturer: Address,
    pub retailer: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoldToBuyerEvent {
    pub id: u64,
    pub retailer: Address,
    pub buyer: Address,
    pub timestamp: u64,
}

pub fn emit_medicine_added(
    env: &Env,
    id: u64,
    manufacturer: Address,
    name: String,
    manufacturing_date: u64,
    expiry_date: u64,
) {
    let event = MedicineAddedEvent {
        id,
        manufacturer,
        name,
        manufacturing_date,
        expiry_date,
    };
    env.events()
        .publish((Symbol::new(env, "medicine_added"), id), event);
}

pub fn emit_sold_to_retailer(
    env: &Env,
    id: u64,
    manufacturer: Address,
    retailer: Address,
    timestamp: u64,
) {
    let event = SoldToRetailerEvent {
        id,
        manufacturer,
        retailer,
        timestamp,
    };
    env.events()
        .publish((Symbol::new(env, "sold_to_retailer"), id), event);
}

pub fn emit_sold_to_buyer(env: &Env, id: u64, retailer: Address, buyer: Address, timestamp: u64) {
    let event = SoldToBuyerEvent {
        id,
        retailer,
        buyer,
        timestamp,
    };
    env.events()
        .publish((Symbol::new(env, "sold_to_buyer"), id), event);
}

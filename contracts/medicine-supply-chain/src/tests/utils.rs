use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    Address, Env, String, Symbol, TryFromVal, Val, Vec,
};
use crate::{
    MedicineSupplyChain, MedicineSupplyChainClient, SoldToBuyerEvent, SoldToRetailerEvent,
};

pub const NOW: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;
pub const YEAR: u64 = 31_536_000;

pub struct TestContext {
    pub env: Env,
    pub client: MedicineSupplyChainClient<'static>,
    pub manufacturer: Address,
}

pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = NOW;
    });
    let id = env.register(MedicineSupplyChain, ());
    let client = MedicineSupplyChainClient::new(&env, &id);
    let manufacturer = Address::generate(&env);
    TestContext { env, client, manufacturer }
}

/// Creates a medicine made yesterday that expires in a year.
pub fn add_medicine(ctx: &TestContext, name: &str) -> u64 {
    ctx.client.create_medicine(
        &ctx.manufacturer,
        &String::from_str(&ctx.env, name),
        &String::from_str(&ctx.env, "Acetaminophen 500mg"),
        &(NOW - DAY),
        &(NOW + YEAR),
    )
}

/// Creates a medicine and sells it to a fresh retailer.
pub fn add_medicine_at_retailer(ctx: &TestContext, name: &str) -> (u64, Address) {
    let id = add_medicine(ctx, name);
    let retailer = Address::generate(&ctx.env);
    ctx.client.transfer_to_retailer(&id, &retailer, &ctx.manufacturer);
    (id, retailer)
}

/// Data of every event this contract published under `name`.
fn events_named(ctx: &TestContext, name: &str) -> Vec<(u64, Val)> {
    let name = Symbol::new(&ctx.env, name);
    let mut found = Vec::new(&ctx.env);
    for (contract_id, topics, data) in ctx.env.events().all().iter() {
        if contract_id != ctx.client.address || topics.len() != 2 {
            continue;
        }
        let topic = Symbol::try_from_val(&ctx.env, &topics.get(0).unwrap()).unwrap();
        if topic == name {
            let id = u64::try_from_val(&ctx.env, &topics.get(1).unwrap()).unwrap();
            found.push_back((id, data));
        }
    }
    found
}

/// Number of `name` events published for medicine `id`.
pub fn count_events(ctx: &TestContext, name: &str, id: u64) -> u32 {
    events_named(ctx, name)
        .iter()
        .filter(|(event_id, _)| *event_id == id)
        .count() as u32
}

/// Number of `sold_to_retailer` events naming `retailer`.
pub fn count_retailer_sales(ctx: &TestContext, retailer: &Address) -> u32 {
    events_named(ctx, "sold_to_retailer")
        .iter()
        .filter(|(_, data)| {
            SoldToRetailerEvent::try_from_val(&ctx.env, data).unwrap().retailer == *retailer
        })
        .count() as u32
}

/// Number of `sold_to_buyer` events naming `buyer`.
pub fn count_buyer_sales(ctx: &TestContext, buyer: &Address) -> u32 {
    events_named(ctx, "sold_to_buyer")
        .iter()
        .filter(|(_, data)| {
            SoldToBuyerEvent::try_from_val(&ctx.env, data).unwrap().buyer == *buyer
        })
        .count() as u32
}

use soroban_sdk::{testutils::Ledger, String};

use super::utils::{add_medicine, setup, DAY, NOW, YEAR};
use crate::ContractError;

#[test]
fn test_expired_medicine() {
    let ctx = setup();

    // Expiry is after manufacturing but already in the past
    let id = ctx.client.create_medicine(
        &ctx.manufacturer,
        &String::from_str(&ctx.env, "ExpiredMedicine"),
        &String::from_str(&ctx.env, "Expired Compound"),
        &(NOW - DAY),
        &(NOW - DAY + 100),
    );
    assert!(ctx.client.is_expired(&id));
}

#[test]
fn test_valid_medicine_not_expired() {
    let ctx = setup();
    let id = add_medicine(&ctx, "ValidMedicine");
    assert!(!ctx.client.is_expired(&id));
}

#[test]
fn test_expiry_boundary_is_exclusive() {
    let ctx = setup();
    let id = add_medicine(&ctx, "Paracetamol");
    let expiry = NOW + YEAR;

    ctx.env.ledger().with_mut(|li| {
        li.timestamp = expiry - 1;
    });
    assert!(!ctx.client.is_expired(&id));

    ctx.env.ledger().with_mut(|li| {
        li.timestamp = expiry;
    });
    assert!(!ctx.client.is_expired(&id));

    ctx.env.ledger().with_mut(|li| {
        li.timestamp = expiry + 1;
    });
    assert!(ctx.client.is_expired(&id));
}

#[test]
fn test_expiry_of_unknown_medicine() {
    let ctx = setup();
    let result = ctx.client.try_is_expired(&1);
    assert_eq!(result, Err(Ok(ContractError::NotFound)));
}

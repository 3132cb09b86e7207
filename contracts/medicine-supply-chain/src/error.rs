use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Creation errors
    InvalidDateRange = 1,

    // Lookup errors
    NotFound = 2,

    // Custody errors
    Unauthorized = 3,
    AlreadyTransferred = 4,
}

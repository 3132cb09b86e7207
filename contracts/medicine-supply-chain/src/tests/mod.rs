// Scenario tests for the medicine ledger, one module per concern.
mod utils;
mod expiry;

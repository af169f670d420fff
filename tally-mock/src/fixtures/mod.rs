pub mod funds;
pub mod ledger;

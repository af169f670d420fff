pub mod analysis;
pub mod funds;

pub mod activity;
pub mod district;
pub mod faction;

// Domain modules

pub mod account;
pub mod events;

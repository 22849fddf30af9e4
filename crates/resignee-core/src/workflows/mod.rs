pub mod deactivation;
pub mod intake;

pub mod role;
pub mod roster;
pub mod team;

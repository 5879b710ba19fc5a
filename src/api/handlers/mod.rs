pub mod events;
pub mod health;
pub mod site;
pub mod team;

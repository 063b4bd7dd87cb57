//! SeaORM entities.

pub mod category;

//! SeaORM adapters; repos call these, handlers never do.

pub mod profiles_sea;

pub mod checkout;
pub mod meal_plans;
pub mod profiles;

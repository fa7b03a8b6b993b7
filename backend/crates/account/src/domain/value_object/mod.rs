//! Value Object Module

pub mod birth_day;
pub mod email;
pub mod user_id;
pub mod user_name;

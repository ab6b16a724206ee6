pub mod compute;
pub mod controller;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod term;
pub mod tuning;

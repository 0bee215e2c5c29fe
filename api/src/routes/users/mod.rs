//! Registration and authentication views

pub mod demo_login;
pub mod login;
pub mod refresh;
pub mod register;

pub const REGISTER_TAG: &str = "01. Register";
pub const LOGIN_TAG: &str = "02. Login";

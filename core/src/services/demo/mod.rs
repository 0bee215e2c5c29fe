//! Demo accounts: a throwaway user with a populated wallet

mod service;


pub use service::{DemoLoginService, DemoServiceConfig, DEMO_EMAIL_DOMAIN};

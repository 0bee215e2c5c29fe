pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockUserRepository;
pub use r#trait::{UserRepository, DUPLICATE_EMAIL_MESSAGE};

#[cfg(test)]
mod tests;

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockEntityRepository;
pub use r#trait::{EntityRepository, DUPLICATE_ENTITY_NAME_MESSAGE};

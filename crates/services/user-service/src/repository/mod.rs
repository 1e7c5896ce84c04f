//! Repository layer for data access.

mod client_repository;
mod seed;
mod user_repository;

pub use client_repository::{ClientRepository, InMemoryClientDirectory};
pub use seed::{ClientRecord, SeedData, DEFAULT_SEED};
pub use user_repository::{InMemoryUserStore, StoredUser, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use client_repository::MockClientRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

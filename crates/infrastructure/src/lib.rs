//! In-memory adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_application_catalog;
mod in_memory_institution_registry;
mod in_memory_provider_registry;
mod in_memory_role_catalog;
mod in_memory_subscription_queue;
mod in_memory_user_directory;
mod seed;

pub use in_memory_application_catalog::InMemoryApplicationCatalog;
pub use in_memory_institution_registry::InMemoryInstitutionRegistry;
pub use in_memory_provider_registry::InMemoryProviderRegistry;
pub use in_memory_role_catalog::InMemoryRoleCatalog;
pub use in_memory_subscription_queue::InMemorySubscriptionQueue;
pub use in_memory_user_directory::InMemoryUserDirectory;
pub use seed::{SEED_ADMIN_USER_ID, SeedStores, seed_stores};

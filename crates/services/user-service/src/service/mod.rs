//! Service layer - registration use case.

mod registration_service;


pub use registration_service::{
    ImportantTierPolicy, RegisterUser, RegistrationManager, RegistrationService,
};

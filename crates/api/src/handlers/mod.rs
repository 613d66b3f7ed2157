pub mod auth;
pub mod pages;
pub mod public_site;
pub mod tenants;

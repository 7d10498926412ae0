// GUI services: clients for anything outside the component tree
pub mod profile_client;

pub mod admin_form;
pub mod catalog_view;
pub mod config;
pub mod filter_engine;
pub mod http_client;
pub mod image_ingest;
pub mod property_admin;
pub mod session_gate;
pub mod session_store;
pub mod whatsapp;

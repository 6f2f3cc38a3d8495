mod catalog_view_tests;
mod config_tests;
mod errors_tests;
mod http_client_tests;
mod image_ingest_tests;
mod session_gate_tests;
mod whatsapp_tests;

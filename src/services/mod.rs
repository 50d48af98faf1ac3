pub mod activity_service;
pub mod balance_service;
pub mod chart_service;
pub mod gas_service;
pub mod transfer_service;

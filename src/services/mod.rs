//! Service layer: business operations the route handlers delegate to.

/// OpenAPI documentation generation.
pub mod documentation;
/// Core game turn operations.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Song pool management operations.
pub mod pool_service;

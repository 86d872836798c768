//! Fleet management API backend.
//!
//! The backend uses Axum as the web framework and SeaORM on Sqlite for persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and validated operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and permission guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared state handed to every handler
//! - **Startup** (`startup`) - Database, session, HTTP client and CORS setup
//! - **Router** (`router`) - Route registration and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** checks permissions, validates the DTO into a param and calls a service
//! 3. **Service** applies business rules and calls one or more repositories
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the result to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for server-side refresh token storage. Connected users receive
//! chat messages and notifications over a WebSocket.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Access token guard and session refresh token storage
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token keys, mailer, payment gateway)
//! - **Startup** (`startup`) - Initialization of database, sessions, and outbound clients
//! - **Router** (`router`) - Axum route configuration, CORS and rate limiting
//! - **Documentation** (`doc`) - OpenAPI document served by Swagger UI
//! - **Realtime** (`realtime/`) - Per-user event channels and the WebSocket endpoint
//! - **Scheduler** (`scheduler/`) - Cron jobs for reminders and abandoned checkouts
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** checks the bearer token and role of the caller
//! 3. **Controller** hands the request body to a service
//! 4. **Service** validates input, executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod realtime;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

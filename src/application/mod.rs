// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`guard`]: Admin area access decisions
//!
//! # Architecture
//!
//! The application layer sits between the domain layer (pure business logic)
//! and the infrastructure/presentation layers. It defines:
//!
//! - **Ports (Traits)**: Abstract interfaces that infrastructure implements
//! - **Guard**: The state machine that decides who may see the admin screens
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use society_hub::application::guard::AccessGate;
//! use society_hub::application::port::CommunityStore;
//!
//! // Infrastructure implements the port trait
//! struct RestStore { /* ... */ }
//! impl CommunityStore for RestStore { /* ... */ }
//!
//! // The gate is pure state; the shell runs its directives
//! let gate = AccessGate::new(Some("admin".to_string()));
//! ```

pub mod guard;
pub mod port;

//! Phosphor Hardware Abstraction Layer
//!
//! This crate defines the traits an LCD panel driver implements so the
//! rendering core can run on any controller. The core never touches
//! hardware; it renders into a shared frame and signals the panel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / demo code                │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  phosphor-display (rendering core)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  phosphor-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Panel driver (controller-specific)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`panel::PanelLink`] - Frame hand-off and dirty signalling

#![no_std]
#![deny(unsafe_code)]

pub mod panel;

// Re-export key traits at crate root for convenience
pub use panel::{FrameGeometry, NullPanel, PanelLink};

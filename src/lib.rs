// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Layout and camera orchestration core for a 3D photo gallery.
//!
//! Images live in an object store together with a stored point on the
//! unit sphere. The gallery loads them once per session, places each one
//! as a camera-facing billboard in either a `sphere` or a `grid` layout,
//! and flies the camera smoothly whenever the user selects an image or
//! switches layout.
//!
//! # Key entry points
//!
//! - [`engine::Gallery`] - a gallery session: commands in, frames out
//! - [`store::Store`] - the versioned application state with change
//!   subscriptions
//! - [`catalog::CatalogLoader`] - one-shot catalog population from an
//!   [`catalog::ObjectStore`]
//! - [`camera::CameraAnimator`] - the camera/scene-group animation state
//!   machine
//! - [`options::GalleryOptions`] - runtime configuration
//!
//! # Architecture
//!
//! The [`store::Store`] is the only shared mutable state. Actions mutate
//! it atomically; components hold a [`store::Subscription`] to the fields
//! they care about and react on the next `sync`, so the animator and the
//! scene renderer always observe fully committed state. Animations are
//! groups of per-axis [`animation::Tween`]s advanced by an explicit frame
//! `dt`, which keeps every transition deterministic under test.

pub mod animation;
pub mod camera;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod image;
pub mod layout;
pub mod options;
pub mod scene;
pub mod store;
pub mod upload;

pub use engine::{Gallery, GalleryCommand};
pub use error::GalleryError;

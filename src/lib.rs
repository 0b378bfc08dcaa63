//! # sdl2_link
//!
//! Dynamically loaded bindings for the SDL2 library family (core, `SDL2_image`, `SDL2_ttf`,
//! `SDL2_mixer` and the joystick / game-controller API).
//!
//! The crate declares the signatures, struct layouts, union layouts and enumerated constants of
//! SDL 2.0.22, opens the shared libraries at runtime and returns a single [`Namespace`] from
//! which typed function pointers, constants and type layouts are looked up by name.
//!
//! ## Architecture
//!
//! - **Tables**: [`sys`] (`#[repr(C)]` mirrors), [`consts`] (constants and header macros),
//!   [`signatures`] (function declarations per sub-library)
//! - **Registry**: [`abi`] computes layouts from descriptors and marshals values to native bytes
//! - **Loading**: [`loader`] resolves platform file names, opens binaries through a pluggable
//!   backend and binds every declared function
//! - **Lookup**: [`namespace`] merges everything into a flat, immutable table
//! - **Convenience**: [`facade`] adds C strings, rect helpers, derived calls and scoped handles
//!
//! ### Example
//!
//! ```ignore
//! use sdl2_link::consts::core::SDL_INIT_VIDEO;
//! use sdl2_link::{LibloadingBackend, Loader};
//!
//! let ns = Loader::new().with_backend(LibloadingBackend).with_ttf().load()?;
//! let init = ns.function::<unsafe extern "C" fn(u32) -> i32>("SDL_Init")?;
//! unsafe { init(SDL_INIT_VIDEO) };
//! ```
//!
//! ## Limitations
//!
//! A declared layout that diverges from the binary actually loaded cannot be detected here.
//! Layouts are verified against the Rust mirrors in [`sys`], which follow the SDL 2.0.22 headers.

/// Errors, logging and shared macros
pub mod core;
/// Configuration system
pub mod config;
/// Type/layout registry and marshaling
pub mod abi;
/// Rust mirrors of SDL structs and unions
pub mod sys;
/// Enumerated constants and header macros
pub mod consts;
/// Function signature tables
pub mod signatures;
/// Dynamic library loader
pub mod loader;
/// Merged namespace of constants, types and bound functions
pub mod namespace;
/// Convenience helpers over the raw namespace
pub mod facade;

pub use crate::config::LinkConfig;
pub use crate::core::error::{ConfigError, LinkError, LinkResult, MarshalError};
pub use crate::loader::{
    FunctionFilter, LibloadingBackend, Loader, NativeBackend, ProcessBackend, SubLibrary,
};
pub use crate::namespace::{Entry, Namespace, NativeFn};

//! # Tmpl Architecture
//!
//! Tmpl copies ready-made files out of a templates directory into a project.
//! Users pick templates by a short derived name (`web`, `react-component`),
//! either on the command line or at a prompt, and tmpl copies the files
//! verbatim, optionally under a new base name. There is no rendering: file
//! contents are never touched.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints messages, picks the exit code   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - retrieve_data: selection + catalog lookup                │
//! │  - copy: hands the retrieval to the copier                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - select: CLI values first, prompts for the rest           │
//! │  - copy: ensure destination, copy in order, fail fast       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs, model.rs, naming.rs)                  │
//! │  - Walks the templates root, derives names                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Exits in Core
//!
//! From `api.rs` inward, every failure is a [`error::TmplError`] value. Only
//! `main.rs` prints errors and turns them into an exit status. Interactive
//! input goes through the [`prompt::Prompter`] trait so selection logic can be
//! tested with scripted answers.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the binary
//! - [`commands`]: Selection and copy logic
//! - [`catalog`]: Template discovery and lookup by name
//! - [`naming`]: Path to template name derivation
//! - [`model`]: The `Template` value
//! - [`prompt`]: Line-based interactive input
//! - [`config`]: Templates root and default filename
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod prompt;

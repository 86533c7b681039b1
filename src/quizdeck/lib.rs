//! # Quizdeck Architecture
//!
//! Quizdeck is a **UI-agnostic record-management library** with a CLI client:
//! an interpreter for free-text command lines over an in-memory model of
//! students, quiz questions and notes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Reads lines, prints results, owns exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one line in, one CmdResult (or error) out   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┴─────────────┐
//!                ▼                           ▼
//! ┌──────────────────────────┐ ┌──────────────────────────────┐
//! │  Parser (parser/)        │ │  Execution (commands/)       │
//! │  - keyword dispatch      │ │  - mutates the model,        │
//! │  - prefixed-field        │ │    returns leveled messages  │
//! │    extraction            │ │                              │
//! │  - per-command grammars  │ │                              │
//! └──────────────────────────┘ └──────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model & Store (model/, store.rs)                           │
//! │  - list-backed records, JSON snapshot persistence           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: parsing is pure
//!
//! `parser::parse_command` is a synchronous function from text to either a
//! typed [`commands::Command`] or a [`error::ParseError`]; it keeps no state
//! between calls and performs no I/O apart from the file-existence check of
//! the `statistics` grammar. Errors are plain return values, never logged or
//! printed inside the core, and their `Display` strings are the exact text
//! the UI shows.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade entry point (`run_line`)
//! - [`parser`]: tokenizer, dispatcher, field extractor, per-command grammars
//! - [`commands`]: command values, usage strings, execution
//! - [`model`]: record types and the list-backed container
//! - [`index`]: one-based record index parsing
//! - [`store`]: JSON snapshot load/save
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod store;

//! # userstore
//!
//! Keeps a collection of user records (`id`, `email`, `age`) in a single JSON
//! file and offers four operations over it: `list`, `add`, `remove` and
//! `findById`.
//!
//! Every operation is one read-modify-write cycle: the whole file is decoded,
//! the operation applied in memory, and for mutations the whole collection is
//! written back after truncating the file. There is no locking; two processes
//! working on the same file race and the last writer wins.
//!
//! ## Layers
//!
//! ```text
//! CLI      (main.rs, args.rs)  flags, stdout/stderr, exit code
//!   │
//! API      (api.rs)            dispatch, perform(params, sink)
//!   │
//! Commands (commands/*.rs)     one module per operation
//!   │
//! Storage  (store/, codec.rs)  UserStore trait, FileStore, JSON codec
//! ```
//!
//! Only the CLI knows about terminals and exit codes. Everything from
//! [`api`] inward takes plain arguments and returns [`error::Result`].
//!
//! ## Results are tagged
//!
//! A duplicate id on `add` or a missing id on `remove` is not an error. The
//! command returns a [`commands::CmdResult`] whose [`commands::Outcome`] says
//! what happened, plus a human-readable message for the caller to show.
//!
//! ## Module Overview
//!
//! - [`api`]: facade and the one-shot [`api::perform`]
//! - [`commands`]: logic for each operation
//! - [`config`]: invocation parameters and their validation
//! - [`codec`]: JSON encoding of records and collections
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the [`model::User`] record
//! - [`error`]: error type

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

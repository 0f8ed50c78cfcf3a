//! Check digit methods: identifiers, parameters, patterns and dispatch

pub mod dispatch;
pub mod id;
pub mod patterns;
pub mod special;
pub mod strategy;
pub mod table;

pub use dispatch::MethodEngine;
pub use id::{Method, MethodId};
pub use patterns::{Derivation, Direction, Mapping, Override, Rule, NO_CHECKSUM};
pub use strategy::{Fallback, Strategy};
pub use table::MethodTable;

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transducer constructors.
//!
//! Every constructor returns a plain value implementing
//! [`Transducer`](transduce_core::Transducer). Stateless operators
//! (`mapping`, `filtering`, `inspecting`) only wrap the downstream reducer;
//! bounded operators (`taking`, `skipping`, `taking_while`) allocate their
//! counters fresh on every `apply`, so reusing one value across pipelines
//! never shares state.

pub mod filtering;
pub mod inspecting;
pub mod mapping;
pub mod skipping;
pub mod taking;
pub mod taking_while;
pub mod try_filtering;
pub mod try_mapping;

pub use filtering::{filtering, Filtered, Filtering};
pub use inspecting::{inspecting, Inspected, Inspecting};
pub use mapping::{mapping, Mapped, Mapping};
pub use skipping::{skipping, Skipped, Skipping};
pub use taking::{taking, try_taking, Taken, Taking};
pub use taking_while::{taking_while, TakenWhile, TakingWhile};
pub use try_filtering::{try_filtering, TryFiltered, TryFiltering};
pub use try_mapping::{try_mapping, TryMapped, TryMapping};

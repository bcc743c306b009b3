//! Property-based tests for the Kruskal minimum spanning forest builder.
//!
//! Verifies the builder against a Prim's-algorithm oracle, validates the
//! structural invariants of the returned forest (acyclicity, canonical
//! form, edge count), and exercises targeted seeds across the graph
//! topologies and weight distributions that stress the implementation.

mod helpers;
mod oracle;
mod types;

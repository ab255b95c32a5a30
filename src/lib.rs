//! A computational library for Garside groups: normal forms, summit sets,
//! conjugacy testing, centralizers, and Thurston classification over a
//! handful of concrete braid-like group families.
//!
//! The engine is generic over [`factor::FactorKind`], the trait capturing
//! one Garside group's canonical factors and lattice operations; concrete
//! implementations live under [`kinds`]. Everything above that layer
//! ([`element`], [`summit`], [`conjugacy`], [`centralizer`], [`thurston`])
//! is written once against the trait and specializes only by monomorphizing
//! over a chosen kind.

pub mod centralizer;
pub mod conjugacy;
pub mod element;
pub mod error;
pub mod factor;
pub mod kinds;
pub mod lattice;
pub mod repl;
pub mod summit;
pub mod text;
pub mod thurston;

//! Static type generation for compiled queries.

pub mod typescript;

//! Terminal progress notifiers

pub mod reporter;

//! Company profiles the support crew can represent.
//!
//! A [`CompanyProfile`] is resolved from a name: five curated companies
//! carry hand-written data, everything else gets a profile guessed from the
//! name (`"Foo Bar"` → `https://foobar.com`).

mod profile;
mod selection;

pub use profile::{CompanyProfile, DEFAULT_COMPANY, KNOWN_COMPANIES};
pub use selection::{CUSTOM_OPTION, CompanySelection};

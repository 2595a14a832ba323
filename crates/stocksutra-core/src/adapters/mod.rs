//! Provider adapters.

mod sutra;

pub use sutra::SutraApi;

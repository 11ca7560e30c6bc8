mod client;
pub mod normalize;
mod oracles;

pub use client::ChatClient;
pub use oracles::{Categorizer, Disambiguator};

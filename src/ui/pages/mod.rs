pub mod buyback;
pub mod manifest;
pub mod refinery;

pub use buyback::BuybackPage;
pub use manifest::ManifestPage;
pub use refinery::RefineryPage;

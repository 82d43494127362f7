pub mod dense;
pub mod initialization;

pub use dense::Layer;
pub use initialization::WeightInit;

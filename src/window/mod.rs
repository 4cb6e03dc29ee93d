mod builder;
mod types;

#[cfg(test)]
mod tests;

pub use builder::{OrientationUnknown, WindowBuilder};
pub use types::{AnchorChoice, AnchorFeature, Directionality, QueryInterval, RefSequence, Strand};

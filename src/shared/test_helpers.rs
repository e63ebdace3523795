#[cfg(test)]
pub use inner::*;

use qmath::prelude::TensorProductMode;

// main
pub const DEFAULT_DEMO: &str = "all";
pub const DEFAULT_KRON_MODE: TensorProductMode = TensorProductMode::Kronecker;
pub const DEFAULT_PRECISION: usize = qmath::core::config::DEFAULT_DISPLAY_PRECISION;

pub const DEMOS: [&str; 5] = ["products", "hadamard", "tensor", "bell", "all"];

//! Kernel Library (KLib).
//!
//! Utilitários internos do driver, independentes de hardware.

pub mod test_framework;

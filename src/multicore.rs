//! Thin shim over the optional thread pool: with the `multicore` feature the
//! search fans the scan range over rayon, without it everything runs on one
//! thread through the same interfaces.

#[cfg(feature = "multicore")]
pub use rayon::{
    current_num_threads,
    iter::{IntoParallelIterator, ParallelIterator},
};

#[cfg(not(feature = "multicore"))]
pub fn current_num_threads() -> usize {
    1
}

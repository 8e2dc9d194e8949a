//! Static partitioning of paths across workers.

/// Splits `n_paths` into per-worker shares.
///
/// Every worker gets `n_paths / workers` paths and the last one also takes
/// the remainder. The number of shares is `min(n_workers, n_paths)`, so no
/// worker is ever handed zero paths; `n_paths == 0` yields no shares.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::partition_paths;
///
/// assert_eq!(partition_paths(10, 3), vec![3, 3, 4]);
/// assert_eq!(partition_paths(2, 8), vec![1, 1]);
/// ```
pub fn partition_paths(n_paths: usize, n_workers: usize) -> Vec<usize> {
    let workers = n_workers.min(n_paths);
    if workers == 0 {
        return Vec::new();
    }

    let base = n_paths / workers;
    let mut shares = vec![base; workers];
    if let Some(last) = shares.last_mut() {
        *last += n_paths % workers;
    }
    shares
}

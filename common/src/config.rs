/// Options a front end collects from the user before asking for keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Only print the calculated keys, nothing else.
    pub quiet: bool,
    /// Prefix every key with the algorithm that produced it (`kgname:key`).
    pub show_algorithm: bool,
    /// Run matched algorithms on the thread pool.
    ///
    /// Output order is the same as a sequential run.
    pub parallel: bool,
    /// Skip the banner line.
    pub no_banner: bool,
}

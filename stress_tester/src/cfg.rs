use queue::{Key, test::stress::KeyDistribution};
use tracing::Level;

#[derive(Debug, Clone, clap::Parser)]
pub struct Cfg {
    /// Number of client threads that issue requests against the shared queue.
    #[arg(short, long, default_value_t = 4)]
    pub client_num: usize,
    /// Number of requests each client issues during the test.
    #[arg(short, long, default_value_t = 10_000)]
    pub request_num: usize,
    /// Share of `Set` requests in percent.
    #[arg(long, default_value_t = 50)]
    pub set_percent: u8,
    /// Share of `GetRange` requests in percent. The remaining requests are `Get`s.
    #[arg(long, default_value_t = 0)]
    pub range_percent: u8,
    /// How keys of `Set` requests are chosen: `disjoint` or `uniform`.
    #[arg(short, long, default_value_t = KeyDistribution::Disjoint)]
    pub key_distribution: KeyDistribution,
    /// Largest key drawn by the `uniform` key distribution.
    #[arg(long, default_value_t = 1_000_000)]
    pub key_space: Key,
    /// Smallest payload size in bytes.
    #[arg(long, default_value_t = 4)]
    pub payload_min: usize,
    /// Largest payload size in bytes.
    #[arg(long, default_value_t = 64)]
    pub payload_max: usize,
    /// Width of the key interval copied by a `GetRange`.
    #[arg(long, default_value_t = 1_000)]
    pub range_span: Key,
    /// Initial slot count of the queue.
    #[arg(long, default_value_t = heap::DEFAULT_CAPACITY)]
    pub capacity: usize,
    /// Fill level in percent at which the queue doubles its capacity.
    #[arg(long, default_value_t = heap::DEFAULT_HIGH_WATER_PERCENT)]
    pub high_water_percent: u8,
    /// Maximum level of the emitted log events.
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,
}

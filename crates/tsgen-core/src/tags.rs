//! Fixed tag catalog: categories, value pools, and high-cardinality samplers.

use rand::Rng;

/// Tag categories attachable to hosts, with their value pools.
///
/// The slice order is the fixed iteration order the host catalog builder
/// uses when consuming the random stream, so it must stay stable for
/// reproducibility.
pub const HOST_TAG_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "datacenter",
        &["us-east", "us-west", "eu-central", "ap-south", "ap-northeast"],
    ),
    ("environment", &["prod", "staging", "dev", "test"]),
    (
        "service",
        &[
            "api",
            "web",
            "db",
            "cache",
            "auth",
            "worker",
            "queue",
            "storage",
            "analytics",
            "search",
            "recommendation",
            "payment",
            "notification",
            "user",
            "admin",
        ],
    ),
    (
        "instance_type",
        &["t3.micro", "t3.small", "t3.medium", "m5.large", "c5.xlarge", "r5.2xlarge"],
    ),
    ("os", &["linux", "windows"]),
    ("kernel_version", &["4.15.0", "5.4.0", "5.10.0"]),
    ("disk_type", &["ssd", "hdd"]),
];

/// Size of the customer id pool (`cust000001`..`cust010000`).
pub const CUSTOMER_ID_POOL: u32 = 10_000;

/// Size of the request id pool (`req00000001`..`req00001000`).
pub const REQUEST_ID_POOL: u32 = 1_000;

/// Draw a customer id uniformly from the pool.
pub fn sample_customer_id<R: Rng>(rng: &mut R) -> String {
    format!("cust{:06}", rng.gen_range(1..=CUSTOMER_ID_POOL))
}

/// Draw a request id uniformly from the pool.
pub fn sample_request_id<R: Rng>(rng: &mut R) -> String {
    format!("req{:08}", rng.gen_range(1..=REQUEST_ID_POOL))
}

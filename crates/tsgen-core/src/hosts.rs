//! Host catalog builder.

use crate::tags::HOST_TAG_CATEGORIES;
use crate::types::HostDefinition;
use rand::Rng;
use std::collections::BTreeMap;

/// Probability that a host carries any given tag category.
const TAG_INCLUSION_CHANCE: f64 = 0.8;

/// Build a host catalog of exactly `count` definitions.
///
/// Host ids are `server01`, `server02`, ... Each host always carries a
/// `host` tag equal to its id; every other category from
/// [`HOST_TAG_CATEGORIES`] is included independently with probability 0.8,
/// sampling a uniform value from its pool. Categories are visited in the
/// catalog's fixed order so the random stream is consumed reproducibly.
pub fn build_hosts<R: Rng>(count: usize, rng: &mut R) -> Vec<HostDefinition> {
    (1..=count)
        .map(|i| {
            let id = format!("server{i:02}");

            let mut tags = BTreeMap::new();
            tags.insert("host".to_string(), id.clone());

            for (category, values) in HOST_TAG_CATEGORIES {
                if rng.gen_bool(TAG_INCLUSION_CHANCE) {
                    let value = values[rng.gen_range(0..values.len())];
                    tags.insert((*category).to_string(), value.to_string());
                }
            }

            HostDefinition { id, tags }
        })
        .collect()
}

use crate::allocation::AllocationRun;
use crate::master::{Destination, JettonMaster};
use crate::retry::RetryPolicy;
use jetton_allocation::WeightedBucket;
use jetton_config::allocation::Config as AllocationConfig;
use jetton_config::metadata::Config as MetadataConfig;
use jetton_config::retry::Config as RetryConfig;
use jetton_config::Config;
use jetton_metadata::{JettonContent, OnchainMetadata};
use slog::Logger;
use std::collections::BTreeMap;
use std::time::Duration;

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            interval: Duration::from_secs(config.poll_interval_secs),
        }
    }
}

/// The content to publish: on-chain metadata when configured, the URI
/// otherwise.
pub fn content_from_config(config: &MetadataConfig) -> JettonContent {
    match &config.onchain {
        Some(onchain) => JettonContent::Onchain(OnchainMetadata {
            name: onchain.name.clone(),
            symbol: onchain.symbol.clone(),
            description: onchain.description.clone(),
            image: onchain.image.clone(),
            decimals: onchain.decimals,
        }),
        None => JettonContent::Offchain {
            uri: config.uri.clone(),
        },
    }
}

pub fn weights_from_config(config: &AllocationConfig) -> Vec<WeightedBucket> {
    config
        .weights
        .iter()
        .map(|weight| WeightedBucket::new(weight.label.clone(), weight.weight_percent))
        .collect()
}

pub fn destinations_from_config(config: &AllocationConfig) -> BTreeMap<String, Destination> {
    config
        .destinations
        .iter()
        .map(|(label, address)| (label.clone(), Destination::new(address.clone())))
        .collect()
}

impl<'a, M> AllocationRun<'a, M>
where
    M: JettonMaster + ?Sized,
{
    pub fn from_config(master: &'a M, config: &Config, log: Logger) -> Self {
        AllocationRun::new(
            master,
            Destination::new(config.network.owner_address.clone()),
            destinations_from_config(&config.allocation),
            RetryPolicy::from(&config.retry),
            log,
        )
        .with_mint_spacing(Duration::from_secs(config.retry.mint_spacing_secs))
    }
}

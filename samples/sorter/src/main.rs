//! Sorter Sample Application Entry Point
//!
//! Feeds a list of numbers and a list of words through `redblack` trees,
//! logs the sorted results, removes the configured numbers and checks the
//! tree invariants before logging the final view.

mod config;

use std::process::ExitCode;

use config::SorterConfig;
use redblack::RedBlackTree;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,redblack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SorterConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Failed to load configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut numbers: RedBlackTree<i64> = config.numbers.iter().copied().collect();
    tracing::info!(
        inserted = config.numbers.len(),
        distinct = numbers.len(),
        "Sorted numbers: {:?}",
        numbers.sort()
    );

    let words: RedBlackTree<String> = config.words.into_iter().collect();
    tracing::info!(distinct = words.len(), "Sorted words: {:?}", words.sort());

    for key in &config.remove {
        if !numbers.remove(key) {
            tracing::warn!(key, "Number to remove was not present");
        }
    }

    match numbers.validate() {
        Ok(black_height) => {
            tracing::info!(
                black_height,
                height = numbers.height(),
                "Numbers after removal: {numbers}"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("Tree invariant broken: {error}");
            ExitCode::FAILURE
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option catalog example.
//!
//! This example declares a small catalog of topology options and reads them out of a
//! YAML document, falling back to defaults for anything missing.

use config_option::prelude::*;

#[derive(Debug, Clone, Copy)]
enum TopologyOption {
    BatchSize,
    ZookeeperQuorum,
    KafkaSecurityProtocol,
    SpoutParallelism,
}

impl ConfigOption for TopologyOption {
    fn key(&self) -> &str {
        match self {
            TopologyOption::BatchSize => "batch.size",
            TopologyOption::ZookeeperQuorum => "zookeeper.quorum",
            TopologyOption::KafkaSecurityProtocol => "kafka.security.protocol",
            TopologyOption::SpoutParallelism => "spout.parallelism",
        }
    }

    fn transform(&self) -> Option<Transform> {
        match self {
            TopologyOption::ZookeeperQuorum => Some(transforms::comma_separated),
            TopologyOption::KafkaSecurityProtocol => Some(transforms::lowercase),
            _ => None,
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let yaml = r#"
batch.size: "250"
zookeeper.quorum: node1:2181, node2:2181, node3:2181
kafka.security.protocol: PLAINTEXT
spout.parallelism: lots
"#;
    let mut config = YamlParser::new().parse(yaml)?;

    let batch_size: u32 = TopologyOption::BatchSize.get_or_default(&config, 100)?;
    let quorum: Vec<String> =
        TopologyOption::ZookeeperQuorum.get_transformed_or_default(&config, Vec::new())?;
    let protocol: String = TopologyOption::KafkaSecurityProtocol
        .get_transformed_or_default(&config, "plaintext".to_string())?;

    // "lots" is not a number, so the lenient read falls back to the default
    let parallelism: u32 = TopologyOption::SpoutParallelism.get_or_default(&config, 1)?;

    println!("batch.size = {}", batch_size);
    println!("zookeeper.quorum = {:?}", quorum);
    println!("kafka.security.protocol = {}", protocol);
    println!("spout.parallelism = {}", parallelism);

    // A strict converter reports the bad value instead
    match TopologyOption::SpoutParallelism.get_converted::<u32, _>(&config, &DefaultConverter::strict()) {
        Ok(value) => println!("strict spout.parallelism = {:?}", value),
        Err(e) => println!("strict read failed: {}", e),
    }

    TopologyOption::SpoutParallelism.put(&mut config, 4);
    println!(
        "updated spout.parallelism = {}",
        TopologyOption::SpoutParallelism.get_or_default(&config, 1u32)?
    );

    Ok(())
}

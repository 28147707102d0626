//! Normalizes a hand-edited configuration file.
//!
//! Configuration written by people accumulates comments, trailing commas,
//! single quotes, and bare keys. This example parses such a document, reads
//! a few fields out of the value tree, and re-renders it as compact standard
//! JSON for consumption by stricter tooling.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonlax --example config_cleanup
//! ```

use jsonlax::{parse, stringify, Value};

fn main() {
    let source = "{
        // Service identity.
        name: 'echo',
        port: 7070,

        /* Written by hand, so the dialect forgives the rough edges:
           bare keys, single quotes, and the comma after the last entry. */
        features: ['tls' 'h2',],
        debug: FALSE,
    }";

    let config = match parse(source) {
        Ok(value) => value,
        Err(error) => {
            eprintln!("config rejected: {error}");
            return;
        }
    };

    let name = config.get("name").map_or("<unnamed>", Value::as_str);
    let port = config.get("port").map_or(0.0, Value::as_number);
    println!("{name} listens on {port}");

    if let Some(features) = config.get("features") {
        for (_, feature) in features.entries() {
            println!("feature: {feature}");
        }
    }

    println!("{}", stringify(&config));

    // Anything the dialect cannot make sense of is reported with a position
    // and the token kinds the grammar would have accepted.
    let broken = "{ port: 70x70 }";
    if let Err(error) = parse(broken) {
        println!("broken config: {error}");
    }
}

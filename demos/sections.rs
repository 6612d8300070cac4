//! Selective generation: emit a single section from a larger tree.
//!
//! Run with: `cargo run --example sections`

use inigen::{ini, to_string_section};

fn main() {
    let config = ini!({
        "app_name": "demo",
        "logging": {"level": "debug", "target": "file"},
        "network": {"host": "0.0.0.0", "port": 8080},
        "storage": {"root": "/var/lib/demo"}
    });

    for section in ["logging", "network", "storage"] {
        let text = to_string_section(&config, section).expect("demo config serializes");
        println!("--- only [{}] ---\n{}", section, text);
    }
}

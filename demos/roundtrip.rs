//! Writes a config tree to INI text, reads it back, and checks the trees
//! match (comments stripped: they are one-way by design).
//!
//! Run with: `cargo run --example roundtrip`

use inigen::{from_str, ini, to_string, IniValue};

fn main() {
    let config = ini!({
        "log_level": "debug",
        "log_type": "file",
        "log_file": {
            "split": true,
            "rotate": "day",
            "sub_name": {
                "errors": ["critical", "error"],
                "messages": ["warning", "info"]
            }
        }
    });

    let text = to_string(&config).expect("demo config serializes");
    println!("--- generated document ---\n{}", text);

    let back: IniValue = from_str(&text).expect("generated document parses");
    println!(
        "--- round trip ---\n{}",
        if back == config { "success" } else { "fail" }
    );
}

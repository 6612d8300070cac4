//! Generates the demo logging configuration and prints the document along
//! with the serializer's diagnostic log.
//!
//! Run with: `cargo run --example generate_config`

use inigen::{ini, IniOptions, Serializer, Severity};

fn main() {
    let config = ini!({
        ";10": "made with inigen",
        ";20": "Generated at @@@",
        "log_level": "debug",
        "log_type": "file",
        "log_file": {
            "split": true,
            "filename_format": "base_name sub_name date",
            "rotate": "day",
            "base_name": "phplog",
            "sub_name": {
                "errors": ["critical", "error"],
                "messages": ["warning", "info"],
                "debug": ["verbose", "debug"]
            },
            "date": "Y-m-d"
        },
        "log_line": "timestamp [level] class->function(): message",
        "timestamp": "H:i:s,u"
    });

    let mut serializer = Serializer::new(IniOptions::new().with_log_level(Severity::Debug));
    serializer.serialize(config.as_object().expect("demo config is a mapping"), None);

    println!("{}", serializer.logger().all());
    println!("{}", serializer.into_inner());
}

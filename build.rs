fn main() {
    // Validate the embedded TOML tables at compile time.
    validate_toml(
        "src/tables/default_tables.toml",
        include_str!("src/tables/default_tables.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

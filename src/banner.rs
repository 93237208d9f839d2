// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
                _       _                    _
  ____ ___ | | ____| |__      ____ ____ | | ____ _   _
 / ___/ _ \| |/ _  |  _ \    / ___/ _  ) |/ _  | | | |
( (__| |_| | ( ( | | |_) )  | |  ( (/ /| ( ( | | |_| |
 \____)___/|_|\_||_|____/   |_|   \____)_|\_||_|\__  |
                                               (____/

    AI Image Generator Relay
"#;
    println!("{}", banner);
}

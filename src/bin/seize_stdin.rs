//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `seize_stdin [BASE_URL] < page.html`
//!
//! Input bytes are decoded with charset detection. The optional argument
//! overrides the base URL discovered in the page.

use seize::{extract_bytes_with_options, Options};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    url: String,
    title: String,
    text: String,
    html: Option<String>,
}

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let options = Options {
        url: std::env::args().nth(1),
        ..Options::default()
    };

    let output = match extract_bytes_with_options(&html, &options) {
        Ok(r) => Output {
            url: r.url,
            title: r.title,
            text: r.content_text,
            html: r.content_html,
        },
        Err(e) => {
            eprintln!("{e}");
            Output {
                url: options.url.unwrap_or_default(),
                title: String::new(),
                text: String::new(),
                html: None,
            }
        }
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}

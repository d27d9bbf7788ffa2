use dane_tlsa::discover::DEFAULT_LIVE_DIR;
use dane_tlsa::{discover_certificates, extract_tlsa_info_from_file};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let live_dir = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LIVE_DIR.to_string());

    println!("Scanning {}...\n", live_dir);

    for entry in discover_certificates(&live_dir)? {
        match extract_tlsa_info_from_file(&entry.cert_path) {
            Ok(info) => println!("{:<40} 3 1 1 {}", entry.hostname, info.digest_hex),
            Err(e) => println!("{:<40} error: {}", entry.hostname, e),
        }
    }

    Ok(())
}

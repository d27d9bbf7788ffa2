use dane_tlsa::{check_hostname, generate_tlsa_records, HostnameCheck, Service};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <cert.pem> <hostname> <smtp|http>", args[0]);
        eprintln!("Example: {} cert.pem mail.example.com smtp", args[0]);
        std::process::exit(1);
    }

    let service: Service = args[3].parse()?;
    let hostname = &args[2];

    if let HostnameCheck::Advisory(reason) = check_hostname(hostname, service)? {
        eprintln!("warning: {}", reason);
    }

    let cert_pem = std::fs::read(&args[1])?;
    let records = generate_tlsa_records(&cert_pem, hostname, service)?;

    for record in &records {
        println!("{}", record);
    }

    Ok(())
}

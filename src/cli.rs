use crate::discover::{discover_certificates, DEFAULT_LIVE_DIR};
use crate::error::{Error, Result};
use crate::extract::extract_tlsa_info_from_file;
use crate::hostname::{check_hostname, HostnameCheck};
use crate::output::{display_tlsa_records, OutputFormat};
use crate::prompt::{confirm, select_index, select_service};
use crate::record::{build_tlsa_records, ports_for};
use crate::types::Service;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use log::LevelFilter;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "dane-tlsa")]
#[command(
    version,
    about = "Generate DANE TLSA (3 1 1) records for SMTP and HTTP services",
    long_about = "Generate DANE TLSA (3 1 1) records for SMTP and HTTP services.\n\n\
        Run without arguments to pick a certificate from the Let's Encrypt live \
        directory, or pass CERTIFICATE_FILE HOSTNAME SERVICE to generate records \
        for a specific certificate. A 3 1 1 record only changes when the key does, \
        so run certbot with --reuse-key to keep records valid across renewals."
)]
pub struct Cli {
    #[arg(help = "Path to the certificate file (cert.pem)")]
    pub certificate_file: Option<PathBuf>,

    #[arg(help = "Hostname for the TLSA record (example.com or MX mail.example.com)")]
    pub hostname: Option<String>,

    #[arg(help = "Service type: 1 or smtp (25, 465, 587), 2 or http (80, 443)")]
    pub service: Option<Service>,

    #[arg(
        long,
        env = "DANE_TLSA_LIVE_DIR",
        default_value = DEFAULT_LIVE_DIR,
        help = "Directory holding one sub-directory per certificate lineage"
    )]
    pub live_dir: PathBuf,

    #[arg(
        short,
        long,
        default_value = "pretty",
        help = "Output format: pretty, plain or json"
    )]
    pub format: OutputFormat,

    #[arg(short, long, help = "Continue without asking when the hostname looks unusual")]
    pub yes: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run(cli, &mut input, &mut output)
}

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }

    let _ = builder.try_init();
}

pub fn run<R: BufRead, W: Write>(cli: Cli, input: &mut R, output: &mut W) -> Result<()> {
    let (cert_path, hostname, service) =
        match (cli.certificate_file, cli.hostname, cli.service) {
            (Some(cert_path), Some(hostname), Some(service)) => (cert_path, hostname, service),
            (cert_path, hostname, service) => {
                if cert_path.is_some() || hostname.is_some() || service.is_some() {
                    log::warn!("Incomplete arguments, falling back to interactive selection");
                }

                if !cli.live_dir.exists() {
                    writeln!(
                        output,
                        "{}",
                        "Error: Let's Encrypt not installed or not using common certificate folder paths."
                            .red()
                    )?;
                    writeln!(
                        output,
                        "{}",
                        "Please manually supply the certificate file, hostname, and service arguments."
                            .red()
                    )?;
                    writeln!(output, "{}", Cli::command().render_help())?;
                    return Ok(());
                }

                let (cert_path, hostname) = select_certificate(&cli.live_dir, input, output)?;
                let service = select_service(input, output)?;
                (cert_path, hostname, service)
            }
        };

    if let HostnameCheck::Advisory(reason) = check_hostname(&hostname, service)? {
        writeln!(output, "{} {}", "Warning:".yellow().bold(), reason.yellow())?;
        if !cli.yes && !confirm(input, output, "Do you want to continue anyway?")? {
            writeln!(output, "Exiting.")?;
            return Ok(());
        }
    }

    let info = extract_tlsa_info_from_file(&cert_path)?;
    let records = build_tlsa_records(&info, &hostname, ports_for(service));
    log::info!(
        "Generated {} TLSA record(s) for {} ({})",
        records.len(),
        hostname,
        service
    );

    let display = display_tlsa_records(&records, service, cli.format)?;
    if display.ends_with('\n') {
        write!(output, "{}", display)?;
    } else {
        writeln!(output, "{}", display)?;
    }

    Ok(())
}

fn select_certificate<R: BufRead, W: Write>(
    live_dir: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<(PathBuf, String)> {
    let entries = discover_certificates(live_dir)?;
    if entries.is_empty() {
        return Err(Error::NotFound(format!(
            "No certificates found under '{}'",
            live_dir.display()
        )));
    }

    writeln!(
        output,
        "{}",
        "Available hostnames and their corresponding certificate files:".green()
    )?;
    for (idx, entry) in entries.iter().enumerate() {
        writeln!(
            output,
            "{}. {} - {}",
            idx + 1,
            entry.hostname,
            entry.cert_path.display()
        )?;
    }

    let idx = select_index(
        input,
        output,
        "Enter the number corresponding to the desired hostname: ",
        entries.len(),
    )?;
    let entry = entries[idx].clone();

    Ok((entry.cert_path, entry.hostname))
}

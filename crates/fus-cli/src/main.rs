use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fus_client::{derive_decryption_key, logic_check, FusMessageBuilder, XmlSerializer};
use tracing::{debug, info};
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build FUS request bodies and derive firmware keys.
///
/// Sending the requests and managing the server session is left to the
/// caller; this tool only prints what should be sent.
#[derive(Parser, Debug)]
#[command(name = "fus", version, about)]
struct Cli {
    /// Indent XML output instead of printing it on one line
    #[arg(long, global = true)]
    pretty: bool,

    /// Spaces per indentation level when --pretty is set
    #[arg(long, global = true, value_name = "WIDTH", default_value_t = 2)]
    indent: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a BinaryInform (device registration) request
    Inform {
        #[arg(long, env = "FUS_FW_VERSION")]
        fw_version: String,
        #[arg(long, env = "FUS_REGION")]
        region: String,
        #[arg(long, env = "FUS_MODEL")]
        model: String,
        #[arg(long, env = "FUS_IMEI")]
        imei: String,
        #[arg(long, env = "FUS_NONCE")]
        nonce: String,
    },
    /// Print a BinaryInit (download announcement) request
    Init {
        #[arg(long)]
        filename: String,
        #[arg(long, env = "FUS_NONCE")]
        nonce: String,
    },
    /// Print the decryption key for a firmware version
    Key {
        #[arg(long, env = "FUS_FW_VERSION")]
        fw_version: String,
        #[arg(long)]
        logical_value: String,
        #[arg(long, value_enum, default_value_t = KeyFormat::Hex)]
        format: KeyFormat,
    },
    /// Print the raw logic check token
    LogicCheck {
        #[arg(long)]
        reference: String,
        #[arg(long, env = "FUS_NONCE")]
        nonce: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KeyFormat {
    Hex,
    Base64,
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let serializer = if cli.pretty {
        XmlSerializer::pretty(cli.indent)
    } else {
        XmlSerializer::new()
    };
    let builder = FusMessageBuilder::new().with_serializer(serializer);
    debug!(?serializer, "configured message builder");

    match cli.command {
        Command::Inform {
            fw_version,
            region,
            model,
            imei,
            nonce,
        } => {
            info!(%model, %region, "building BinaryInform request");
            builder
                .registration_xml(&fw_version, &region, &model, &nonce, &imei)
                .context("failed to build BinaryInform request")
        }
        Command::Init { filename, nonce } => {
            info!(%filename, "building BinaryInit request");
            builder
                .binary_init_xml(&filename, &nonce)
                .context("failed to build BinaryInit request")
        }
        Command::Key {
            fw_version,
            logical_value,
            format,
        } => {
            let key = derive_decryption_key(&fw_version, &logical_value)
                .context("failed to derive decryption key")?;
            Ok(match format {
                KeyFormat::Hex => key.to_hex(),
                KeyFormat::Base64 => key.to_base64(),
            })
        }
        Command::LogicCheck { reference, nonce } => {
            logic_check(&reference, &nonce).context("failed to compute logic check")
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let output = run(Cli::parse())?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fus").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_inform_output() {
        let cli = parse(&[
            "inform",
            "--fw-version",
            "G998BXXU1AUA1/G998BOXM1AUA1/G998BXXU1AUA1/G998BXXU1AUA1",
            "--region",
            "EUY",
            "--model",
            "SM-G998B",
            "--imei",
            "353000000000001",
            "--nonce",
            "2Gf0+kq9XsbT1Nwa",
        ]);
        let xml = run(cli).unwrap();
        assert!(xml.contains("<LOGIC_CHECK><Data>9UXGAA9A189B9GU9</Data></LOGIC_CHECK>"));
        assert!(xml.contains("<DEVICE_CC_CODE><Data>RS</Data></DEVICE_CC_CODE>"));
    }

    #[test]
    fn test_key_formats() {
        let version = "G998BXXU1AUA1/G998BOXM1AUA1/G998BXXU1AUA1/G998BXXU1AUA1";
        let hex = run(parse(&["key", "--fw-version", version, "--logical-value", "Lv9fZ3qT"])).unwrap();
        assert_eq!(hex, "a0f18c20b2e3de71d19a56362583c0d8");

        let b64 = run(parse(&[
            "key",
            "--fw-version",
            version,
            "--logical-value",
            "Lv9fZ3qT",
            "--format",
            "base64",
        ]))
        .unwrap();
        assert_eq!(b64.len(), 24);
    }

    #[test]
    fn test_init_short_name_fails() {
        let err = run(parse(&["init", "--filename", "short.zip", "--nonce", "abc"])).unwrap_err();
        assert!(err.to_string().contains("BinaryInit"));
    }

    #[test]
    fn test_pretty_flag() {
        let cli = parse(&[
            "--pretty",
            "init",
            "--filename",
            "FIRMWARE_IMAGE_ABCDEF0123456789.zip",
            "--nonce",
            "2Gf0+kq9XsbT1Nwa",
        ]);
        assert!(cli.pretty);
        assert_eq!(cli.indent, 2);
        let xml = run(cli).unwrap();
        assert!(xml.contains('\n'));
        assert!(xml.contains("C10A55B32DCEB81B"));
    }
}

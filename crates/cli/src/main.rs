use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use udi_core::{
    barcodify, create_combined_data_structure, create_primary_data_structure,
    create_secondary_data_structure, generate_check_char, load_config, CombinedConfig, DateFormat,
    ExpirationDate, LinkIdentity, PrimaryConfig, ProductIdentity, Quantity, QuantityFormat, SecondaryConfig,
    SecondaryFields,
};

#[derive(Parser)]
#[command(name = "udi")]
#[command(about = "HIBC 2.5 UDI encoder")]
struct Cli {
    /// Print encoded structures in human-readable form (`*...*`, spaces as `_`)
    #[arg(long, global = true)]
    human_readable: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a primary data structure
    Primary {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Omit the check character
        #[arg(long)]
        no_check_char: bool,
    },
    /// Encode a secondary data structure, linked when the product identity is given
    Secondary {
        #[command(flatten)]
        identity: OptionalIdentityArgs,
        #[command(flatten)]
        fields: SecondaryArgs,
        /// Omit the check character
        #[arg(long)]
        no_check_char: bool,
    },
    /// Encode a combined primary + secondary data structure
    Combined {
        #[command(flatten)]
        identity: IdentityArgs,
        #[command(flatten)]
        fields: SecondaryArgs,
    },
    /// Encode a data structure described in a YAML or JSON file
    FromFile {
        /// Path to a .yaml, .yml or .json config
        path: PathBuf,
        /// Which data structure the file describes
        #[arg(long, value_enum, default_value_t = Structure::Combined)]
        structure: Structure,
    },
    /// Print the Modulo-43 check character of the given data
    CheckChar {
        data: String,
    },
    /// Print the human-readable form of already encoded data
    Barcodify {
        data: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Structure {
    Primary,
    Secondary,
    Combined,
}

#[derive(Args)]
struct IdentityArgs {
    /// Labeler Identification Code (4 characters)
    #[arg(long)]
    lic: String,
    /// Product or Catalog Number
    #[arg(long)]
    pcn: String,
    /// Unit of measure ID (0-9)
    #[arg(long)]
    unit_of_measure: u32,
    /// Accept a LIC that starts with a digit
    #[arg(long)]
    compat_lic: bool,
}

impl IdentityArgs {
    fn into_identity(self) -> ProductIdentity {
        let identity = ProductIdentity::new(self.lic, self.pcn, self.unit_of_measure);
        if self.compat_lic {
            identity.compatible()
        } else {
            identity
        }
    }
}

#[derive(Args)]
struct OptionalIdentityArgs {
    /// Labeler Identification Code (4 characters)
    #[arg(long, requires_all = ["pcn", "unit_of_measure"])]
    lic: Option<String>,
    /// Product or Catalog Number
    #[arg(long, requires = "lic")]
    pcn: Option<String>,
    /// Unit of measure ID (0-9)
    #[arg(long, requires = "lic")]
    unit_of_measure: Option<u32>,
    /// Accept a LIC that starts with a digit
    #[arg(long)]
    compat_lic: bool,
}

impl OptionalIdentityArgs {
    fn into_identity(self) -> Option<ProductIdentity> {
        match (self.lic, self.pcn, self.unit_of_measure) {
            (Some(lic), Some(pcn), Some(unit_of_measure)) => Some(
                IdentityArgs {
                    lic,
                    pcn,
                    unit_of_measure,
                    compat_lic: self.compat_lic,
                }
                .into_identity(),
            ),
            _ => None,
        }
    }
}

#[derive(Args)]
struct SecondaryArgs {
    /// Lot or batch number
    #[arg(long)]
    lot: Option<String>,
    /// Serial number (cannot be combined with a quantity)
    #[arg(long)]
    sn: Option<String>,
    /// Quantity digits
    #[arg(long, requires = "quantity_format")]
    quantity: Option<String>,
    /// Quantity format: QQ or QQQQQ
    #[arg(long, requires = "quantity")]
    quantity_format: Option<QuantityFormat>,
    /// Expiration date digits
    #[arg(long, requires = "exp_format")]
    exp_date: Option<String>,
    /// Expiration date format: MMYY, MMDDYY, YYMMDD, YYMMDDHH, YYJJJ, YYJJJHH or YYYYMMDD
    #[arg(long, requires = "exp_date")]
    exp_format: Option<DateFormat>,
    /// Manufacture date (YYYYMMDD)
    #[arg(long)]
    manufacture_date: Option<String>,
}

impl SecondaryArgs {
    fn into_fields(self) -> SecondaryFields {
        SecondaryFields {
            lot: self.lot,
            sn: self.sn,
            quantity: self
                .quantity
                .zip(self.quantity_format)
                .map(|(value, format)| Quantity::new(format, value)),
            exp_date: self
                .exp_date
                .zip(self.exp_format)
                .map(|(value, format)| ExpirationDate::new(format, value)),
            manufacture_date: self.manufacture_date,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only ever carries the encoded data.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("udi_core=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run(Cli::parse())?;
    println!("{output}");
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let encoded = match cli.command {
        Some(Commands::Primary {
            identity,
            no_check_char,
        }) => {
            let config = PrimaryConfig {
                identity: identity.into_identity(),
                no_check_char,
            };
            create_primary_data_structure(&config).context("Error encoding primary data structure")?
        }
        Some(Commands::Secondary {
            identity,
            fields,
            no_check_char,
        }) => {
            let config = SecondaryConfig {
                identity: identity
                    .into_identity()
                    .map(LinkIdentity::from)
                    .unwrap_or_default(),
                fields: fields.into_fields(),
                no_check_char,
            };
            create_secondary_data_structure(&config)
                .context("Error encoding secondary data structure")?
        }
        Some(Commands::Combined { identity, fields }) => {
            let config = CombinedConfig::new(identity.into_identity(), fields.into_fields());
            create_combined_data_structure(&config)
                .context("Error encoding combined data structure")?
        }
        Some(Commands::FromFile { path, structure }) => encode_file(&path, structure)
            .with_context(|| format!("Error encoding {}", path.display()))?,
        Some(Commands::CheckChar { data }) => {
            let check = generate_check_char(&data).context("Error computing check character")?;
            return Ok(check.to_string());
        }
        Some(Commands::Barcodify { data }) => return Ok(barcodify(&data)),
        None => return Ok("Use 'udi --help' for commands".into()),
    };

    tracing::info!(udi = %encoded, "encoded");
    if cli.human_readable {
        Ok(barcodify(&encoded))
    } else {
        Ok(encoded)
    }
}

fn encode_file(path: &std::path::Path, structure: Structure) -> anyhow::Result<String> {
    let encoded = match structure {
        Structure::Primary => create_primary_data_structure(&load_config::<PrimaryConfig>(path)?)?,
        Structure::Secondary => {
            create_secondary_data_structure(&load_config::<SecondaryConfig>(path)?)?
        }
        Structure::Combined => {
            create_combined_data_structure(&load_config::<CombinedConfig>(path)?)?
        }
    };
    Ok(encoded)
}

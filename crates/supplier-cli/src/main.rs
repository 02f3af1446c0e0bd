//! `supplier` - command line front end for the supplier transaction family.
//!
//! Thin glue over [`supplier_client`]: parses arguments, runs one client
//! operation, and renders the outcome as a JSON object on stdout. Any
//! client or validation error exits with code 1; a gateway 404 renders a
//! distinct not-found status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use supplier_client::signing::default_key_file;
use supplier_client::{BasicAuth, ClientConfig, ClientError, SupplierClient, SupplierView};

const DEFAULT_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "supplier")]
#[command(about = "Track suppliers and the parts they supply on the ledger")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Connection flags shared by every subcommand.
#[derive(Args, Debug)]
struct ConnectionOpts {
    /// URL of the ledger REST gateway
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Name of the user's private key file
    #[arg(long)]
    username: Option<String>,

    /// Directory of the user's private key file
    #[arg(long)]
    key_dir: Option<PathBuf>,

    /// Username for Basic auth, if the gateway requires it
    #[arg(long)]
    auth_user: Option<String>,

    /// Password for Basic auth
    #[arg(long)]
    auth_password: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl ConnectionOpts {
    fn auth(&self) -> Option<BasicAuth> {
        self.auth_user.as_ref().map(|username| BasicAuth {
            username: username.clone(),
            password: self.auth_password.clone().unwrap_or_default(),
        })
    }

    fn signing_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.url.clone(),
            keyfile: Some(default_key_file(
                self.username.as_deref(),
                self.key_dir.as_deref(),
            )),
            auth: self.auth(),
        }
    }

    fn read_only_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.url.clone(),
            keyfile: None,
            auth: self.auth(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a supplier
    Create {
        /// An identifier for the supplier
        supplier_id: String,
        /// A short identifier for the supplier
        short_id: String,
        /// Supplier name
        supplier_name: String,
        /// Hashed password
        password_hash: String,
        /// Supplier URL
        supplier_url: String,
        #[command(flatten)]
        conn: ConnectionOpts,
    },

    /// List all suppliers
    #[command(name = "list-supplier")]
    ListSupplier {
        #[command(flatten)]
        conn: ConnectionOpts,
    },

    /// Get a supplier by supplier id
    Retrieve {
        /// An identifier for the supplier
        supplier_id: String,
        #[command(flatten)]
        conn: ConnectionOpts,
    },

    /// Add a part to a supplier
    #[command(name = "AddPart")]
    AddPart {
        /// The identifier for the supplier
        supplier_id: String,
        /// The identifier for the part
        part_id: String,
        #[command(flatten)]
        conn: ConnectionOpts,
    },
}

impl Command {
    fn connection(&self) -> &ConnectionOpts {
        match self {
            Self::Create { conn, .. }
            | Self::ListSupplier { conn }
            | Self::Retrieve { conn, .. }
            | Self::AddPart { conn, .. } => conn,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command) -> Result<(), ClientError> {
    match command {
        Command::Create {
            supplier_id,
            short_id,
            supplier_name,
            password_hash,
            supplier_url,
            conn,
        } => {
            let client = SupplierClient::new(conn.signing_config())?;
            let response = client
                .create(
                    &supplier_id,
                    &short_id,
                    &supplier_name,
                    &password_hash,
                    &supplier_url,
                )
                .await?;
            debug!(batch_id = %response.batch_id, "create submitted");
            println!("{}", serde_json::json!({ "status": "success" }));
        }

        Command::AddPart {
            supplier_id,
            part_id,
            conn,
        } => {
            let client = SupplierClient::new(conn.signing_config())?;
            let response = client.add_part(&supplier_id, &part_id).await?;
            debug!(batch_id = %response.batch_id, "add-part submitted");
            println!("{}", serde_json::json!({ "status": "success" }));
        }

        Command::ListSupplier { conn } => {
            let client = SupplierClient::new(conn.read_only_config())?;
            let views: Vec<SupplierView> = client
                .list_suppliers()
                .await?
                .into_iter()
                .map(SupplierView::from)
                .collect();
            println!(
                "{}",
                serde_json::to_string(&views)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?
            );
        }

        Command::Retrieve { supplier_id, conn } => {
            let client = SupplierClient::new(conn.read_only_config())?;
            let view = SupplierView::from(client.retrieve_supplier(&supplier_id).await?);
            println!(
                "{}",
                serde_json::to_string(&view)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.command.connection().verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ClientError::NotFound(_)) => {
            println!("{}", serde_json::json!({ "status": "404 Not Found" }));
            ExitCode::FAILURE
        }
        Err(err) => {
            println!(
                "{}",
                serde_json::json!({
                    "error": "failed",
                    "error_message": err.to_string(),
                })
            );
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_arguments() {
        let cli = Cli::parse_from([
            "supplier", "create", "S1", "s1", "Acme", "h4sh", "http://acme.example",
        ]);
        match cli.command {
            Command::Create {
                supplier_id,
                supplier_name,
                conn,
                ..
            } => {
                assert_eq!(supplier_id, "S1");
                assert_eq!(supplier_name, "Acme");
                assert_eq!(conn.url, DEFAULT_URL);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_part_subcommand_name() {
        let cli = Cli::parse_from(["supplier", "AddPart", "S1", "P1"]);
        match cli.command {
            Command::AddPart {
                supplier_id,
                part_id,
                ..
            } => {
                assert_eq!(supplier_id, "S1");
                assert_eq!(part_id, "P1");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_supplier_with_overrides() {
        let cli = Cli::parse_from([
            "supplier",
            "list-supplier",
            "--url",
            "http://gateway:9090",
            "--auth-user",
            "ops",
            "-vv",
        ]);
        let conn = cli.command.connection();
        assert_eq!(conn.url, "http://gateway:9090");
        assert_eq!(conn.verbose, 2);
        let auth = conn.auth().unwrap();
        assert_eq!(auth.username, "ops");
        assert_eq!(auth.password, "");
    }
}

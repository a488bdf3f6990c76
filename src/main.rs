use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use decidir_payments::services::wire;
use decidir_payments::utils::money::format_amount;
use decidir_payments::{Config, Payment, PaymentClient};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "decidir-payments", about = "Inspect and submit Decidir payment payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a payment file and print it back in canonical form
    Check {
        file: PathBuf,
    },
    /// Submit a payment file to the payment service
    Submit {
        file: PathBuf,
        /// Fill `site_transaction_id` with a fresh UUID when it is missing
        #[arg(long)]
        auto_site_transaction_id: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { file } => {
            let payment = load_payment(&file).await?;
            log_summary(&payment);
            println!("{}", wire::encode_pretty(&payment)?);
        }
        Command::Submit {
            file,
            auto_site_transaction_id,
        } => {
            let mut payment = load_payment(&file).await?;
            if auto_site_transaction_id && payment.site_transaction_id.is_none() {
                payment.site_transaction_id = Some(Uuid::new_v4().to_string());
            }

            let config = Config::from_env();
            if config.private_api_key.is_empty() {
                warn!("DECIDIR_PRIVATE_API_KEY is not set");
            }
            info!("Using payment service at {}", config.api_url);

            let client = PaymentClient::new(&config)?;
            if !client.health_check().await {
                warn!("Payment service health check failed, submitting anyway");
            }
            let created = client
                .create_payment(&payment)
                .await
                .context("payment submission failed")?;
            println!("{}", wire::encode_pretty(&created)?);
        }
    }

    Ok(())
}

async fn load_payment(path: &Path) -> Result<Payment> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let payment = wire::decode_slice(&raw)
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(payment)
}

fn log_summary(payment: &Payment) {
    info!(
        "Payment {} for {} in {} installment(s), type {}",
        payment.site_transaction_id.as_deref().unwrap_or("-"),
        payment
            .amount
            .map(|amount| format_amount(amount, payment.currency.as_ref()))
            .unwrap_or_else(|| "no amount".to_string()),
        payment.installments,
        payment
            .payment_type
            .as_ref()
            .map(|t| t.as_str())
            .unwrap_or("-"),
    );

    let distributed = payment
        .payment_type
        .as_ref()
        .map(|t| t.is_distributed())
        .unwrap_or(false);
    if !payment.sub_payments.is_empty() && !distributed {
        warn!(
            "{} sub-payment(s) present on a non-distributed payment",
            payment.sub_payments.len()
        );
    }
}

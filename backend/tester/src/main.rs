use anyhow::{Context, Result, bail};
use application::{ApplicationForm, Field, SubmitResponse};
use clap::Parser;

/// 1x1 PNG, enough to exercise the inline attachment path.
const SAMPLE_SIGNATURE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Server base address
    #[arg(long, env = "TENANT_URL", default_value = "http://localhost:5001")]
    url: String,

    /// Attach a sample signature image
    #[arg(long)]
    signature: bool,
}

fn sample(signature: bool) -> ApplicationForm {
    let form = ApplicationForm::new()
        .with_field(Field::FullName, "Jane Doe")
        .with_field(Field::Married, "no")
        .with_field(Field::PhoneNumber, "555-1234");

    if signature {
        form.with_field(Field::Signature, SAMPLE_SIGNATURE)
    } else {
        form
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let endpoint = format!("{}/submit", args.url.trim_end_matches('/'));

    println!("Posting sample application to {endpoint}");

    let response = reqwest::Client::new()
        .post(&endpoint)
        .json(&sample(args.signature))
        .send()
        .await
        .with_context(|| format!("Failed to reach {endpoint}"))?;

    let status = response.status();
    let body: SubmitResponse = response.json().await.context("Response was not JSON")?;

    println!("Status: {status}");
    println!("{}", serde_json::to_string_pretty(&body)?);

    if !body.success {
        bail!("Submission failed: {}", body.message);
    }

    Ok(())
}

use std::error::Error;
use std::sync::Arc;

use dataprov::cli::SourceArg;
use dataprov::{
    DataPayload, Notifier, ParseOptions, ProviderRegistry, RecordingNotifier, RegistryBuilder,
    RegistryConfig, SaveStatus, TracingNotifier,
};
use sarge::prelude::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  dataprov --input <source> [--output <destination>] [--encoding <enc>] [--config <file>]"
    );
    eprintln!("  dataprov --list [--config <file>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --input <source>       Source to load (path or file:// URL)");
    eprintln!("  -o, --output <dest>        Save the loaded data instead of printing it");
    eprintln!("  -e, --encoding <enc>       Text encoding: utf8 (default), latin1, ascii");
    eprintln!("  -c, --config <file>        Registry configuration (.json, .yaml)");
    eprintln!("  -l, --list                 List supported extensions");
}

/// Logs through `tracing` and keeps user messages for the exit status.
#[derive(Debug, Default)]
struct CliNotifier {
    recorded: RecordingNotifier,
}

impl Notifier for CliNotifier {
    fn log_error(&self, context: &str, message: &str) {
        TracingNotifier.log_error(context, message);
    }

    fn notify_user(&self, message: &str) {
        self.recorded.notify_user(message);
    }
}

fn init_tracing() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {e}"))?;

    Ok(())
}

fn build_registry(
    config_path: Option<&str>,
    notifier: Arc<CliNotifier>,
) -> Result<(ProviderRegistry, ParseOptions), Box<dyn Error>> {
    let config = match config_path {
        Some(path) => RegistryConfig::from_file(path)?,
        None => RegistryConfig::default(),
    };

    let builder = RegistryBuilder::from_config(&config)?.with_notifier(notifier);
    let options = builder.options().clone();
    Ok((builder.build()?, options))
}

fn print_payload(payload: DataPayload) -> Result<(), Box<dyn Error>> {
    match payload {
        DataPayload::Text(text) => print!("{text}"),
        DataPayload::Bytes(bytes) => print!("{}", String::from_utf8_lossy(&bytes)),
        DataPayload::Structured(value) => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let input_ref = reader.add::<SourceArg>(tag::both('i', "input"));
    let output_ref = reader.add::<SourceArg>(tag::both('o', "output"));
    let encoding_ref = reader.add::<String>(tag::both('e', "encoding"));
    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let list_ref = reader.add::<bool>(tag::both('l', "list"));

    let args = reader.parse()?;

    let input = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("SourceArg parsing is infallible"),
        None => SourceArg::default(),
    };
    let output = match output_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("SourceArg parsing is infallible"),
        None => SourceArg::default(),
    };
    let encoding = encoding_ref.get(&args).and_then(Result::ok);
    let config_path = config_ref.get(&args).and_then(Result::ok);
    let list = matches!(list_ref.get(&args), Some(Ok(true)));

    let notifier = Arc::new(CliNotifier::default());
    let (registry, mut options) = build_registry(config_path.as_deref(), notifier.clone())?;

    if list {
        for provider in registry.providers() {
            println!("{}: {}", provider.name(), provider.extensions().join(", "));
        }
        return Ok(());
    }

    if input.is_empty() {
        return Err("missing --input".into());
    }
    if let Some(encoding) = encoding {
        options.insert("encoding", encoding);
    }

    let payload = registry.get_data(input.as_str(), &options).await?;
    if let Some(message) = notifier.recorded.notifications().first() {
        return Err(message.clone().into());
    }

    if output.is_empty() {
        return print_payload(payload);
    }

    match registry.save_data(output.as_str(), &payload, None).await? {
        SaveStatus::Written => eprintln!("Saved '{}'", output.as_str()),
        SaveStatus::Skipped => eprintln!("Nothing to save for '{}'", input.as_str()),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("dataprov warning: {e}");
    }

    if let Err(e) = run().await {
        eprintln!("dataprov error: {e}");
        print_usage();
        std::process::exit(1);
    }
}

use std::path::PathBuf;

use clap::Parser;
use simple_logger::SimpleLogger;
use transloadit_lib::upload::{UploadRequest, UploadSession};
use transloadit_proto::BORED_SERVER_URL;

use crate::ui::{InteractiveUI, PromptUI};

mod ui;

#[derive(Parser)]
struct Args {
    /// Transloadit API key
    #[arg(long, env = "TRANSLOADIT_KEY")]
    key: String,

    /// Transloadit API secret, used to sign the request
    #[arg(long, env = "TRANSLOADIT_SECRET")]
    secret: String,

    /// Assembly template id to run
    #[arg(long, env = "TRANSLOADIT_TEMPLATE")]
    template: String,

    /// Bored server used to discover an upload worker
    #[arg(long, env = "TRANSLOADIT_BORED_URL", default_value = BORED_SERVER_URL)]
    bored_url: String,

    /// Extra form fields as name=value, may be repeated
    #[arg(long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// File to upload
    file: PathBuf,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected name=value, got: {}", raw)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to init logger");

    let args: Args = Args::parse();

    let mut request = UploadRequest::from_path(&args.file, &args.template)?;
    for (name, value) in &args.fields {
        request.add_field(name, value);
    }

    let ui = PromptUI::default();
    ui.print_request(&args.file, &request);

    let mut session = UploadSession::new(&args.key, &args.secret);
    session.bored_url = args.bored_url.clone();

    let result = ui
        .show_loading("Uploading".to_string(), async move {
            session.upload(&request).await
        })
        .await;

    match result {
        Ok(assembly) => ui.print_assembly(&assembly),
        Err(e) => {
            ui.print_error(&e);
            std::process::exit(1);
        }
    }

    Ok(())
}

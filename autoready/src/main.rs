use std::fs;
use std::io::Read;
use std::path::PathBuf;

use autoready::function::Function;
use autoready::init_tracing;
use autoready::request::RunRequest;
use clap::Parser;

/// Run one readiness resolution over a JSON-encoded request snapshot and
/// print the resulting response. Intended for local development; the real
/// transport envelope lives outside this crate.
#[derive(Parser, Debug)]
#[command(name = "autoready", version, about)]
struct Args {
    /// Path to a request JSON document; reads stdin when omitted.
    request: Option<PathBuf>,

    /// Pretty-print the response.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing("info");
    let args = Args::parse();

    let raw = match &args.request {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let req: RunRequest = serde_json::from_str(&raw)?;

    let rsp = Function::new().run(&req);
    let out = if args.pretty {
        serde_json::to_string_pretty(&rsp)?
    } else {
        serde_json::to_string(&rsp)?
    };
    println!("{}", out);
    Ok(())
}

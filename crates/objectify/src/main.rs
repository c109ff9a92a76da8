use clap::Parser;
use log::debug;
use miette::{IntoDiagnostic, Result, WrapErr};
use objectifier::{Detector, DetectorConfig, Objectifier, WrapMode};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Inspect a JSON, YAML or XML payload", long_about = None)]
struct Cli {
    /// Payload file; stdin when omitted
    file: Option<PathBuf>,

    /// Dotted path to print, e.g. `users.user.0.name`
    #[arg(short, long)]
    path: Option<String>,

    /// Skip the YAML step
    #[arg(long)]
    no_yaml: bool,

    /// Adopt documents that parse to null
    #[arg(long)]
    null_is_match: bool,

    /// Wrap nested mappings as well as sequences
    #[arg(long)]
    wrap_containers: bool,

    /// Log every detection step
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> DetectorConfig {
        let wrap = if self.wrap_containers {
            WrapMode::Containers
        } else {
            WrapMode::Lists
        };
        DetectorConfig::new()
            .with_yaml(!self.no_yaml)
            .with_null_is_match(self.null_is_match)
            .with_wrap(wrap)
    }

    fn read_payload(&self) -> Result<Vec<u8>> {
        match &self.file {
            Some(path) => std::fs::read(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading {}", path.display())),
            None => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .into_diagnostic()
                    .wrap_err("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

fn report(view: &Objectifier, path: Option<&str>) -> String {
    let mut out = format!("{}\norigin: {}\n", view, view.origin());
    let keys: Vec<String> = view.keys().iter().map(ToString::to_string).collect();
    if !keys.is_empty() {
        out.push_str(&format!("keys: {}\n", keys.join(", ")));
    }
    if let Some(path) = path {
        match view.path(path) {
            Some(member) => out.push_str(&format!("{}: {}\n", path, member)),
            None => out.push_str(&format!("{}: None\n", path)),
        }
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.config();
    debug!("detector config: {:?}", config);

    let payload = cli.read_payload()?;
    let view = Detector::new(config).objectify_bytes(&payload);
    print!("{}", report(&view, cli.path.as_deref()));
    Ok(())
}

//! Grimoire Runner - main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grimoire_runner::{run_demo, RunnerConfig};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grimoire_runner=info,grimoire_domain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Grimoire Runner");

    let config = RunnerConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let transcript = run_demo(&config)?;
    for line in transcript.lines() {
        println!("{}", line);
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

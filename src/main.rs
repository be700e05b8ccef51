use clap::Parser;
use normalizer::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,normalizer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;

    // Only the selected pipeline is validated, after flags are applied
    match cli.command {
        Commands::Process {
            input,
            output,
            stopwords,
            language,
            rules,
        } => {
            let config =
                commands::document_config(&settings, input, output, stopwords, language, rules);
            config.validate()?;

            commands::process(&config)?;
        }
        Commands::Query {
            query,
            stopwords,
            no_stopwords,
            no_stemming,
            language,
            rules,
        } => {
            let config = commands::query_config(
                &settings,
                stopwords,
                no_stopwords,
                no_stemming,
                language,
                rules,
            );
            config.validate()?;

            commands::query(&query, &config)?;
        }
    }

    info!("Done");
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use lastfm_client::{methods, AuthPolicy, HttpVerb, LastfmClient, NormalizedNode, ParameterSet};
use lastfm_shared_config::LastfmConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Call a Last.fm web service method and print the response as JSON
#[derive(Debug, Parser)]
#[command(name = "lastfm-cli")]
#[command(version)]
struct Cli {
    /// Method name, e.g. `artist.getInfo`
    method: String,

    /// Method parameters as `name=value`
    #[arg(value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Send as POST instead of GET
    #[arg(long)]
    post: bool,

    /// Sign the request with the shared secret
    #[arg(long)]
    sign: bool,

    /// Attach the session key (implies --sign)
    #[arg(long)]
    session: bool,
}

impl Cli {
    fn has_flags(&self) -> bool {
        self.post || self.sign || self.session
    }

    fn verb(&self) -> HttpVerb {
        if self.post {
            HttpVerb::Post
        } else {
            HttpVerb::Get
        }
    }

    fn auth(&self) -> AuthPolicy {
        if self.session {
            AuthPolicy::SESSION
        } else if self.sign {
            AuthPolicy::SIGNED
        } else {
            AuthPolicy::NONE
        }
    }

    fn parameter_set(&self) -> ParameterSet {
        self.params.iter().cloned().collect()
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

async fn run(client: &LastfmClient, cli: &Cli) -> anyhow::Result<NormalizedNode> {
    let params = cli.parameter_set();

    let payload = match methods::find(&cli.method) {
        Some(spec) if !cli.has_flags() => {
            tracing::debug!(method = spec.method, "Invoking cataloged method");
            client.invoker().invoke(spec, params).await?
        }
        _ => {
            client
                .request(&cli.method, params, cli.verb(), cli.auth())
                .await?
        }
    };

    Ok(payload)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the JSON payload
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lastfm_cli=info,lastfm_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = LastfmConfig::from_env().context("failed to load Last.fm configuration")?;
    let client = LastfmClient::new(&config)?;

    tracing::info!(method = %cli.method, "Calling Last.fm");

    let payload = run(&client, &cli)
        .await
        .with_context(|| format!("{} failed", cli.method))?;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("artist=Cher"),
            Ok(("artist".to_string(), "Cher".to_string()))
        );
        assert_eq!(
            parse_param("message=a=b"),
            Ok(("message".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_param("lang="), Ok(("lang".to_string(), String::new())));
        assert!(parse_param("=value").is_err());
        assert!(parse_param("novalue").is_err());
    }

    #[test]
    fn test_cli_defaults_to_unsigned_get() {
        let cli = Cli::try_parse_from(["lastfm-cli", "artist.getInfo", "artist=Cher"]).unwrap();
        assert_eq!(cli.method, "artist.getInfo");
        assert_eq!(cli.params, vec![("artist".to_string(), "Cher".to_string())]);
        assert!(!cli.has_flags());
        assert_eq!(cli.verb(), HttpVerb::Get);
        assert_eq!(cli.auth(), AuthPolicy::NONE);
    }

    #[test]
    fn test_cli_session_flag_implies_signing() {
        let cli = Cli::try_parse_from([
            "lastfm-cli",
            "track.love",
            "artist=Cher",
            "track=Believe",
            "--post",
            "--session",
        ])
        .unwrap();
        assert_eq!(cli.verb(), HttpVerb::Post);
        assert_eq!(cli.auth(), AuthPolicy::SESSION);
        assert!(cli.auth().needs_signature);
        assert_eq!(cli.parameter_set().len(), 2);
    }

    #[test]
    fn test_cli_rejects_malformed_param() {
        assert!(Cli::try_parse_from(["lastfm-cli", "artist.getInfo", "Cher"]).is_err());
    }
}

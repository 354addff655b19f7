//! inscription CLI
//!
//! Renders the registration page and replays recorded UI events against it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use inscription_forms::{
    render_page, FormConfig, FormEvent, FormSession, FormState, JsonLinesSink, Presentation,
    SubmissionSink, TracingSink,
};

/// Registration form renderer and event replayer.
#[derive(Parser)]
#[command(name = "inscription")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, env = "INSCRIPTION_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the empty registration page.
    Render {
        /// Presentation layer (bootstrap or plain), overriding the config.
        #[arg(short, long)]
        presentation: Option<Presentation>,

        /// Write the page to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a JSON array of form events and print the final state.
    Replay {
        /// File holding the events.
        events: PathBuf,

        /// Presentation layer (bootstrap or plain), overriding the config.
        #[arg(short, long)]
        presentation: Option<Presentation>,

        /// Append successful submissions as JSON lines to this file
        /// instead of logging them.
        #[arg(short, long)]
        submissions: Option<PathBuf>,

        /// Print the rendered page instead of the state as JSON.
        #[arg(long)]
        html: bool,
    },
}

fn load_config(path: Option<&Path>, presentation: Option<Presentation>) -> anyhow::Result<FormConfig> {
    let config = match path {
        Some(path) => FormConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FormConfig::default(),
    };

    Ok(match presentation {
        Some(presentation) => config.presentation(presentation),
        None => config,
    })
}

fn read_events(path: &Path) -> anyhow::Result<Vec<FormEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading events from {}", path.display()))?;
    let events = serde_json::from_str(&contents)
        .with_context(|| format!("parsing events from {}", path.display()))?;
    Ok(events)
}

fn open_sink(submissions: Option<&Path>) -> anyhow::Result<Box<dyn SubmissionSink>> {
    match submissions {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            info!("Writing submissions to {}", path.display());
            Ok(Box::new(JsonLinesSink::new(file)))
        }
        None => Ok(Box::new(TracingSink)),
    }
}

fn replay(
    config: &FormConfig,
    events: Vec<FormEvent>,
    sink: Box<dyn SubmissionSink>,
) -> anyhow::Result<FormState> {
    let mut session = FormSession::new(config, sink);

    for (index, event) in events.into_iter().enumerate() {
        debug!(index, ?event, "dispatching event");
        session
            .dispatch(event)
            .with_context(|| format!("event #{index}"))?;
    }

    let (state, _) = session.into_parts();
    Ok(state)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            presentation,
            output,
        } => {
            let config = load_config(cli.config.as_deref(), presentation)?;
            let html = render_page(&FormState::new(), &config);

            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    info!("Wrote page to {}", path.display());
                }
                None => println!("{html}"),
            }
        }

        Commands::Replay {
            events,
            presentation,
            submissions,
            html,
        } => {
            let config = load_config(cli.config.as_deref(), presentation)?;
            let events = read_events(&events)?;
            info!("Replaying {} event(s)", events.len());

            let sink = open_sink(submissions.as_deref())?;
            let state = replay(&config, events, sink)?;

            if state.submitted {
                info!("Final state: submitted");
            } else {
                info!("Final state: not submitted, {} invalid field(s)", state.errors.len());
            }

            if html {
                println!("{}", render_page(&state, &config));
            } else {
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inscription_forms::Field;
    use std::io::Write;

    #[test]
    fn test_cli_parses_replay() {
        let cli = Cli::try_parse_from([
            "inscription",
            "replay",
            "events.json",
            "--presentation",
            "plain",
            "--html",
        ])
        .unwrap();
        match cli.command {
            Commands::Replay {
                events,
                presentation,
                html,
                ..
            } => {
                assert_eq!(events, PathBuf::from("events.json"));
                assert_eq!(presentation, Some(Presentation::Plain));
                assert!(html);
            }
            Commands::Render { .. } => panic!("expected replay"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_presentation() {
        assert!(Cli::try_parse_from(["inscription", "render", "-p", "material"]).is_err());
    }

    #[test]
    fn test_replay_writes_submissions() {
        let mut events_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            events_file,
            r#"[
                {{"type":"fieldChanged","field":"firstName","value":"Ada"}},
                {{"type":"fieldChanged","field":"lastName","value":"Lovelace"}},
                {{"type":"fieldChanged","field":"email","value":"ada@example.com"}},
                {{"type":"fieldChanged","field":"password","value":"secret1"}},
                {{"type":"fieldChanged","field":"confirmPassword","value":"secret1"}},
                {{"type":"submit"}}
            ]"#
        )
        .unwrap();
        let submissions = tempfile::NamedTempFile::new().unwrap();

        let config = load_config(None, None).unwrap();
        let events = read_events(events_file.path()).unwrap();
        let sink = open_sink(Some(submissions.path())).unwrap();
        let state = replay(&config, events, sink).unwrap();

        assert!(state.submitted);
        assert_eq!(state.form.get(Field::LastName), "Lovelace");
        let written = std::fs::read_to_string(submissions.path()).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.contains("ada@example.com"));
    }

    #[test]
    fn test_replay_rejects_unknown_field() {
        let mut events_file = tempfile::NamedTempFile::new().unwrap();
        write!(events_file, r#"[{{"type":"fieldChanged","field":"age","value":"3"}}]"#).unwrap();
        assert!(read_events(events_file.path()).is_err());
    }
}

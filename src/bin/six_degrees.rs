use anyhow::{bail, Context, Result};
use clap::Parser;
use costar::{CoStarNetwork, NetworkError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "six-degrees")]
#[command(about = "Connect two actors through the movies they appeared in", long_about = None)]
struct Cli {
    /// Movie credits CSV (movie_id,title,cast,crew)
    dataset: PathBuf,

    /// First actor (prompted for when omitted)
    #[arg(long)]
    from: Option<String>,

    /// Second actor (prompted for when omitted)
    #[arg(long)]
    to: Option<String>,

    /// Print every hop and enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Print the route as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// How a query ended. Each maps to a distinct exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Connected,
    UnknownActor,
    NoConnection,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Connected => ExitCode::SUCCESS,
            Outcome::UnknownActor => ExitCode::FAILURE,
            Outcome::NoConnection => ExitCode::from(2),
        }
    }
}

/// Logs go to stderr. `COSTAR_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("COSTAR_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn prompt<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read actor name")? == 0 {
        bail!("no actor name given");
    }
    Ok(line.trim().to_owned())
}

/// Answers one query against a loaded network, prompting on `input` for
/// names missing from the command line.
fn run<R: BufRead, W: Write>(
    cli: &Cli,
    network: &CoStarNetwork,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let from = match &cli.from {
        Some(name) => name.clone(),
        None => prompt("Actor 1 name: ", input, output)?,
    };
    if network.actor(&from).is_none() {
        writeln!(output, "No such actor")?;
        return Ok(Outcome::UnknownActor);
    }
    let to = match &cli.to {
        Some(name) => name.clone(),
        None => prompt("Actor 2 name: ", input, output)?,
    };

    let route = match network.connect(&from, &to) {
        Ok(route) => route,
        Err(NetworkError::UnknownActor(_)) => {
            writeln!(output, "No such actor")?;
            return Ok(Outcome::UnknownActor);
        }
        Err(err) => return Err(err).context("search failed"),
    };

    let Some(route) = route else {
        writeln!(output, "No connection")?;
        return Ok(Outcome::NoConnection);
    };

    if cli.json {
        writeln!(output, "{}", serde_json::to_string_pretty(&route)?)?;
    } else {
        writeln!(output, "{route}")?;
        if cli.verbose {
            for hop in route.describe() {
                writeln!(output, "  {hop}")?;
            }
        }
    }
    Ok(Outcome::Connected)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = File::open(&cli.dataset)
        .with_context(|| format!("failed to open {}", cli.dataset.display()))?;
    let mut network = CoStarNetwork::new();
    network
        .load(BufReader::new(file))
        .with_context(|| format!("failed to load {}", cli.dataset.display()))?;

    let outcome = run(&cli, &network, &mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(outcome.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"movie_id,title,cast,crew
1,Apollo 13,"[{""name"": ""Kevin Bacon""}, {""name"": ""Tom Hanks""}]",[]
2,Big,"[{""name"": ""Tom Hanks""}, {""name"": ""Elizabeth Perkins""}]",[]
3,Loner,"[{""name"": ""Solo Person""}]",[]
"#;

    fn network() -> CoStarNetwork {
        let mut network = CoStarNetwork::new();
        network.load(DATASET.as_bytes()).unwrap();
        network
    }

    fn query(args: &[&str], stdin: &str) -> (Outcome, String) {
        let argv = ["six-degrees", "credits.csv"].into_iter().chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut output: Vec<u8> = Vec::new();
        let outcome = run(&cli, &network(), &mut stdin.as_bytes(), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn connected_actors_print_the_route() {
        let (outcome, output) = query(&["--from", "kevin bacon", "--to", "Elizabeth Perkins"], "");
        assert_eq!(outcome, Outcome::Connected);
        assert_eq!(output, "kevin bacon --> tom hanks --> elizabeth perkins\n");
    }

    #[test]
    fn verbose_prints_every_hop() {
        let (_, output) = query(&["--from", "kevin bacon", "--to", "tom hanks", "-v"], "");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "kevin bacon --> tom hanks",
                "  kevin bacon acts in Apollo 13",
                "  Apollo 13 features tom hanks",
            ]
        );
    }

    #[test]
    fn json_output_is_the_serialized_route() {
        let args = ["--from", "kevin bacon", "--to", "tom hanks", "--json"];
        let (outcome, output) = query(&args, "");
        assert_eq!(outcome, Outcome::Connected);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["steps"][1], "Apollo 13");
    }

    #[test]
    fn unknown_actor() {
        let (outcome, output) = query(&["--from", "meryl streep", "--to", "tom hanks"], "");
        assert_eq!(outcome, Outcome::UnknownActor);
        assert_eq!(output, "No such actor\n");

        let (outcome, output) = query(&["--from", "tom hanks", "--to", "meryl streep"], "");
        assert_eq!(outcome, Outcome::UnknownActor);
        assert_eq!(output, "No such actor\n");
        assert_eq!(format!("{:?}", ExitCode::from(outcome)), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn no_connection() {
        let (outcome, output) = query(&["--from", "kevin bacon", "--to", "solo person"], "");
        assert_eq!(outcome, Outcome::NoConnection);
        assert_eq!(output, "No connection\n");
        assert_eq!(format!("{:?}", ExitCode::from(outcome)), format!("{:?}", ExitCode::from(2)));
    }

    #[test]
    fn missing_names_are_prompted_for() {
        let (outcome, output) = query(&[], "Kevin Bacon\nElizabeth Perkins\n");
        assert_eq!(outcome, Outcome::Connected);
        assert_eq!(
            output,
            "Actor 1 name: Actor 2 name: kevin bacon --> tom hanks --> elizabeth perkins\n"
        );
    }

    #[test]
    fn unknown_prompted_actor_stops_before_second_prompt() {
        let (outcome, output) = query(&[], "nobody\n");
        assert_eq!(outcome, Outcome::UnknownActor);
        assert_eq!(output, "Actor 1 name: No such actor\n");
    }

    #[test]
    fn closed_stdin_is_an_error() {
        let cli = Cli::try_parse_from(["six-degrees", "credits.csv"]).unwrap();
        let err = run(&cli, &network(), &mut "".as_bytes(), &mut io::sink()).unwrap_err();
        assert_eq!(err.to_string(), "no actor name given");
    }
}

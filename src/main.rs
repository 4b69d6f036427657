use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cluster_recommender::catalog::{load_catalog, Catalog};
use cluster_recommender::config::{AppConfig, CliConfig, FileConfig, OutputFormat};
use cluster_recommender::recommend::{
    MatchTier, Recommendation, Recommender, SamplingPolicy, DEFAULT_NUM_RECOMMENDATIONS,
};

mod cli_style;
use cli_style::{
    get_styles, print_banner, print_error, print_song_card, print_success, print_warning,
};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles = get_styles())]
struct CliArgs {
    /// Path to the clustered dataset CSV (defaults to ./spotify_clustered.csv).
    #[clap(value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Path to a TOML config file, its values take precedence over the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Run a single query and exit instead of starting the prompt.
    #[clap(short, long)]
    pub query: Option<String>,

    /// How many songs to recommend.
    #[clap(short, long, visible_alias = "limit", default_value_t = DEFAULT_NUM_RECOMMENDATIONS)]
    pub num_recommendations: usize,

    /// What to do when a match has fewer songs than requested.
    #[clap(long, value_enum, default_value_t = SamplingPolicy::Cap)]
    pub sampling_policy: SamplingPolicy,

    /// Seed for reproducible recommendations.
    #[clap(long)]
    pub seed: Option<u64>,

    /// How results are printed.
    #[clap(long, value_enum, default_value_t = OutputFormat::Cards)]
    pub output: OutputFormat,

    /// Print results as JSON, same as `--output json`.
    #[clap(long, conflicts_with = "output")]
    pub json: bool,

    /// Load the dataset, print a summary and exit.
    #[clap(long)]
    pub check_only: bool,
}

impl CliArgs {
    fn cli_config(&self) -> CliConfig {
        CliConfig {
            dataset_path: self.dataset.clone(),
            num_recommendations: self.num_recommendations,
            sampling_policy: self.sampling_policy,
            seed: self.seed,
            output: if self.json {
                OutputFormat::Json
            } else {
                self.output
            },
        }
    }
}

const PROMPT: &str = "♫ >> ";
const MAX_COMPLETIONS: usize = 20;

#[derive(rustyline_derive::Hinter)]
struct QueryHelper {
    names: Vec<String>,
}

impl QueryHelper {
    pub fn new(catalog: &Catalog) -> Self {
        let mut names: Vec<String> = catalog
            .iter_songs()
            .flat_map(|s| [s.track_name.clone(), s.artist_name.clone()])
            .collect();
        names.sort();
        names.dedup();
        QueryHelper { names }
    }
}

impl Completer for QueryHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let prefix = line.trim_start().to_lowercase();
        if prefix.is_empty() {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .names
            .iter()
            .filter(|n| n.to_lowercase().starts_with(&prefix))
            .take(MAX_COMPLETIONS)
            .cloned()
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for QueryHelper {}
impl Validator for QueryHelper {}
impl Helper for QueryHelper {}

fn print_summary(catalog: &Catalog) {
    println!(
        "Dataset has:\n{} songs\n{} artists\n{} clusters",
        catalog.len(),
        catalog.get_artists_count(),
        catalog.get_clusters_count()
    );
    for (cluster_id, size) in catalog.get_cluster_sizes() {
        println!("  cluster {}: {} songs", cluster_id, size);
    }
}

fn print_recommendation(recommendation: &Recommendation, output: OutputFormat) -> Result<()> {
    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(recommendation)?);
        return Ok(());
    }

    let name = recommendation.matched_name.as_deref().unwrap_or_default();
    match recommendation.tier {
        MatchTier::Track => print_success(&format!("Showing results for: {}", name)),
        MatchTier::Artist => print_success(&format!("Showing songs by artist: {}", name)),
        MatchTier::Fallback => {
            print_warning("No exact match found! Here are some trending songs for you:")
        }
    }
    for card in recommendation.songs.iter() {
        print_song_card(card);
    }
    println!();
    Ok(())
}

fn run_query(recommender: &mut Recommender, query: &str, output: OutputFormat) -> Result<()> {
    if query.trim().is_empty() {
        bail!("Please enter a track or artist name.");
    }
    let recommendation = recommender.recommend(query)?;
    debug!(
        "{:?} match for \"{}\": {} of {} songs ({:?})",
        recommendation.tier,
        query.trim(),
        recommendation.songs.len(),
        recommender.settings().num_recommendations,
        recommender.settings().sampling_policy
    );
    print_recommendation(&recommendation, output)
}

fn run_prompt(mut recommender: Recommender, output: OutputFormat) -> Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::<QueryHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(QueryHelper::new(recommender.catalog())));

    print_banner();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == ":quit" || line == ":q" {
                    break;
                }
                let _ = rl.add_history_entry(line);
                if let Err(err) = run_query(&mut recommender, line, output) {
                    print_error(&format!("{}", err));
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.cli_config(), file_config)?;

    let catalog = load_catalog(&config.dataset_path)
        .with_context(|| format!("Could not load dataset {:?}", config.dataset_path))?;
    let catalog = Arc::new(catalog);

    if cli_args.check_only {
        print_summary(&catalog);
        return Ok(());
    }

    let mut recommender = Recommender::new(catalog, config.recommender_settings());

    match &cli_args.query {
        Some(query) => run_query(&mut recommender, query, config.output),
        None => run_prompt(recommender, config.output),
    }
}

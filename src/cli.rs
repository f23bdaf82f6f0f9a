use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use shisoku::generator::DEFAULT_MAX_TRIES_PER_PROBLEM;
use shisoku::sampler::sample;
use shisoku::{
    BatchGenerator, Category, Classifier, Difficulty, GenerationReport, GeneratorConfig,
    ProblemPool, Quotas, evaluate, validate_numbers,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Verbosity accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Difficulty level as accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Normal,
    Hard,
}

impl DifficultyArg {
    pub fn to_difficulty(self) -> Difficulty {
        match self {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Shisoku - four-number arithmetic puzzles
#[derive(Parser, Debug)]
#[command(name = "shisoku")]
#[command(about = "Generate and classify puzzles that combine four numbers into a target")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// How much to log on stderr
    #[arg(short, long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a problem pool meeting per-category quotas
    Generate(GenerateArgs),
    /// Find the simplest expression for four numbers and a target
    Classify {
        /// The four numbers to combine
        #[arg(num_args = 4, required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
        /// Value the expression must reach
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,
    },
    /// Evaluate an arithmetic expression
    Eval {
        /// Expression using digits, + - * /, parentheses and spaces
        expression: String,
    },
    /// Pick a session's worth of problems from a pool file
    Sample {
        /// Pool file written by `generate`
        #[arg(short, long)]
        pool: PathBuf,
        #[arg(short, long, value_enum, default_value = "normal")]
        difficulty: DifficultyArg,
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 800)]
    pub no_parens: usize,
    #[arg(long, default_value_t = 800)]
    pub one_paren: usize,
    #[arg(long, default_value_t = 400)]
    pub multi_paren: usize,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_number: i64,
    #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
    pub max_number: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_target: i64,
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub max_target: i64,
    #[arg(long, default_value_t = DEFAULT_MAX_TRIES_PER_PROBLEM)]
    pub max_tries_per_problem: usize,
    /// Seed for a reproducible pool
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the pool here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Keep a partial pool when the try budget runs out
    #[arg(long)]
    pub allow_partial: bool,
}

impl GenerateArgs {
    pub fn quotas(&self) -> Quotas {
        BTreeMap::from([
            (Category::NoParens, self.no_parens),
            (Category::OneParen, self.one_paren),
            (Category::MultiParen, self.multi_paren),
        ])
    }

    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            number_range: self.min_number..=self.max_number,
            target_range: self.min_target..=self.max_target,
            max_tries_per_problem: self.max_tries_per_problem,
            seed: self.seed,
            ..GeneratorConfig::default()
        }
    }
}

/// Route `log` records to stderr at the chosen verbosity
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

fn print_breakdown(report: &GenerationReport) {
    let total = report.problems.len();
    eprintln!("Generated {} problems in {} tries", total, report.tries);
    for (category, count) in report.counts() {
        let percent = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        eprintln!("  {}: {} ({:.1}%)", category, count, percent);
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let generator =
        BatchGenerator::new(args.to_config()).context("Invalid generator settings")?;
    let report = generator.generate(&args.quotas());
    print_breakdown(&report);

    if !report.is_complete() {
        warn!("Quota shortfall: {:?}", report.shortfall);
        if !args.allow_partial {
            bail!(
                "Try budget exhausted before quotas were met, missing {:?}",
                report.shortfall
            );
        }
    }

    let pool = ProblemPool::new(report.problems);
    match &args.output {
        Some(path) => pool
            .write_to(path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", pool.to_json_lines()?),
    }
    Ok(())
}

fn run_classify(numbers: &[i64], target: i64) -> Result<()> {
    let numbers = validate_numbers(numbers).context("Invalid numbers")?;
    info!("Classifying {:?} -> {}", numbers, target);

    match Classifier::default().classify(&numbers, target) {
        Some(found) => println!("{}: {}", found.category, found.simplest_solution),
        None => {
            warn!("No matching expression found");
            println!("No solution.");
        }
    }
    Ok(())
}

fn run_sample(
    pool: &Path,
    difficulty: DifficultyArg,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let pool = ProblemPool::read_from(pool)
        .with_context(|| format!("Failed to load {}", pool.display()))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let problems = sample(&pool, difficulty.to_difficulty(), count, &mut rng)?;
    for problem in problems {
        println!("{}", problem);
    }
    Ok(())
}

/// Parse the command line and dispatch to the chosen subcommand
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level)?;

    match &args.command {
        Command::Generate(generate) => run_generate(generate),
        Command::Classify { numbers, target } => run_classify(numbers, *target),
        Command::Eval { expression } => {
            let value = evaluate(expression)
                .with_context(|| format!("Cannot evaluate '{}'", expression))?;
            println!("{}", value);
            Ok(())
        }
        Command::Sample {
            pool,
            difficulty,
            count,
            seed,
        } => run_sample(pool, *difficulty, *count, *seed),
    }
}

use clap::{Parser, Subcommand};
use lc_chart::ChartMetadata;
use lc_curve::{CurveSource, FUNCTION_SAMPLE_COUNT, generate_curve};
use lc_expr::CompiledExpr;
use lc_theme::THEMES;
use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lc-cli")]
#[command(about = "Learncurve CLI - learning-curve chart data tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula in x at one position
    Eval {
        /// The formula, e.g. "x^2" or "100 / (1 + exp(-0.1*(x-50)))"
        expression: String,
        /// Position to evaluate at
        #[arg(long, default_value_t = 0.0)]
        at: f64,
        /// Print the whole 50-sample preview grid instead
        #[arg(long)]
        samples: bool,
    },
    /// Generate curve points as t,p,ci CSV
    #[command(subcommand)]
    Generate(GenerateCommands),
    /// Validate chart metadata given as JSON
    Check {
        /// Path to a metadata JSON file ("-" for stdin)
        metadata_path: PathBuf,
    },
    /// List the theme catalog
    Themes,
}

#[derive(Subcommand)]
enum GenerateCommands {
    /// From newline-separated x,y pairs
    Raw {
        /// Path to the data file ("-" for stdin)
        data_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// From a formula in x, sampled at x = 0, 2, ..., 98
    Function {
        /// The formula
        expression: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Synthetic power-curve points with jitter
    Random {
        /// Number of points (2-100)
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Noise level (0-1)
        #[arg(long, default_value_t = 0.2)]
        noise: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            expression,
            at,
            samples,
        } => cmd_eval(&expression, at, samples),
        Commands::Generate(generate_cmd) => match generate_cmd {
            GenerateCommands::Raw { data_path, output } => {
                cmd_generate_raw(&data_path, output.as_deref())
            }
            GenerateCommands::Function { expression, output } => {
                cmd_generate_function(&expression, output.as_deref())
            }
            GenerateCommands::Random {
                points,
                noise,
                output,
            } => cmd_generate_random(points, noise, output.as_deref()),
        },
        Commands::Check { metadata_path } => cmd_check(&metadata_path),
        Commands::Themes => cmd_themes(),
    }
}

fn cmd_eval(expression: &str, at: f64, samples: bool) -> Result<(), Box<dyn Error>> {
    let compiled = CompiledExpr::parse(expression, "x")?;

    if samples {
        println!("x,value");
        for i in 0..FUNCTION_SAMPLE_COUNT {
            let x = i as f64 * 2.0;
            println!("{},{}", x, compiled.eval(x)?);
        }
    } else {
        println!("{}", compiled.eval(at)?);
    }
    Ok(())
}

fn cmd_generate_raw(data_path: &Path, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let text = read_input(data_path)?;
    let source = CurveSource::RawPoints { data_points: text };
    write_csv(&source, output)
}

fn cmd_generate_function(expression: &str, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let source = CurveSource::Function {
        expression: expression.to_string(),
        x_min: 0.0,
        x_max: 100.0,
        step: 1.0,
    };
    write_csv(&source, output)
}

fn cmd_generate_random(
    points: usize,
    noise: f64,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    // The CLI is its own form: validate the ranges before generating
    let source = CurveSource::random(points, noise)?;
    write_csv(&source, output)
}

fn cmd_check(metadata_path: &Path) -> Result<(), Box<dyn Error>> {
    let text = read_input(metadata_path)?;
    let metadata: ChartMetadata = serde_json::from_str(&text)?;
    match metadata.validate() {
        Ok(()) => {
            println!("✓ Metadata is valid");
            Ok(())
        }
        Err(problems) => {
            for problem in &problems {
                eprintln!("✗ {problem}");
            }
            Err(format!("{} validation problem(s)", problems.len()).into())
        }
    }
}

fn cmd_themes() -> Result<(), Box<dyn Error>> {
    println!("Theme catalog:");
    for (index, theme) in THEMES.iter().enumerate() {
        let line = theme.line;
        println!(
            "  {:>2}  {:<18} line #{:02x}{:02x}{:02x}",
            index, theme.name, line.0, line.1, line.2
        );
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, Box<dyn Error>> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn write_csv(source: &CurveSource, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let points = generate_curve(source);
    tracing::debug!(mode = %source.mode(), points = points.len(), "generated curve");

    let mut csv = String::from("t,p,ci\n");
    for point in &points {
        csv.push_str(&format!("{},{},{}\n", point.t, point.p, point.ci));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} points to {}", points.len(), path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

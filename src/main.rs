
use physlaw::{catalog, law, Arg, Quantity};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Browse the catalog of physical laws.
#[derive(Parser, Debug)]
#[command(name = "physlaw", version, about, long_about = None)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every law, with its equation.
  List {
    /// Print the full summaries as JSON.
    #[arg(long)]
    json: bool,
  },
  /// Show one law, and solve it for its example values.
  Show {
    /// Full module path of the law, or its last segment.
    name: String,
    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
  },
  /// Solve one law for the given inputs, in the order `show` lists
  /// them. Bare numbers are taken as dimensionless.
  Calc {
    /// Full module path of the law, or its last segment.
    name: String,
    /// Input values, such as `20000 J` or `10m/s` or `0.5`.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
  },
}

fn main() -> anyhow::Result<()> {
  init_tracing();
  let args = Args::parse();
  match args.command {
    Command::List { json } => list(json),
    Command::Show { name, json } => show(&name, json),
    Command::Calc { name, values } => calc(&name, &values),
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

fn list(json: bool) -> anyhow::Result<()> {
  let laws = catalog::laws();
  info!(count = laws.len(), "listing laws");
  if json {
    let summaries: Vec<_> = laws.iter().map(|law| law.summary()).collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);
  } else {
    let width = laws.iter().map(|law| law.name().len()).max().unwrap_or(0);
    for law in laws {
      println!("{:width$}  {}", law.name(), law.print());
    }
  }
  Ok(())
}

fn show(name: &str, json: bool) -> anyhow::Result<()> {
  let law = catalog::find(name).ok_or_else(|| anyhow!("No law named '{name}'"))?;
  if json {
    println!("{}", serde_json::to_string_pretty(&law.summary())?);
    return Ok(());
  }
  println!("{}", law.name());
  println!("  {}", law.description());
  println!();
  println!("  {}", law.print());
  println!("  {} = {}", law.target().name(), law.solution());
  println!();
  println!("Symbols:");
  for symbol in law.symbols() {
    println!("  {symbol}");
  }
  if !law.traits().is_empty() {
    let traits: Vec<_> = law.traits().iter_names().map(|(name, _)| name).collect();
    println!("Traits: {}", traits.join(", "));
  }
  println!();
  println!("Example:");
  let example = law.example();
  for symbol in law.inputs() {
    if let Some(value) = example.get(symbol.var()) {
      println!("  {} = {value}", symbol.name());
    }
  }
  let result = law.solve(&example)
    .with_context(|| format!("Failed to solve {} for its example values", law.name()))?;
  println!("  {} = {result}", law.target().name());
  Ok(())
}

fn parse_arg(input: &str) -> anyhow::Result<Arg> {
  if let Ok(x) = input.trim().parse::<f64>() {
    return Ok(Arg::from(x));
  }
  let quantity = Quantity::parse(input).with_context(|| format!("Invalid input '{input}'"))?;
  Ok(Arg::from(quantity))
}

fn calc(name: &str, values: &[String]) -> anyhow::Result<()> {
  let law = catalog::find(name).ok_or_else(|| anyhow!("No law named '{name}'"))?;
  let args = values.iter().map(|v| parse_arg(v)).collect::<anyhow::Result<Vec<_>>>()?;
  let result = law::calculate(law, &args)
    .with_context(|| format!("Failed to calculate {}", law.name()))?;
  info!(law = law.name(), %result, "calculated");
  println!("{} = {result}", law.target().name());
  Ok(())
}

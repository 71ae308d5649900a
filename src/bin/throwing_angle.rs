
//! Which angle should a projectile be thrown at to land as far away
//! as possible?
//!
//! The projectile starts at the origin, with the vertical axis
//! pointing up and the horizontal axis towards the target. Each axis
//! sees uniformly accelerated motion: horizontally with no
//! acceleration, vertically with `-gravitational_acceleration`. The
//! flight ends when the projectile returns to the ground, at
//! `2 * vertical_velocity / gravitational_acceleration`.
//!
//! The best angle is where the derivative of the flight distance with
//! respect to the angle vanishes, which is found by bisection.

use physlaw::Quantity;
use physlaw::expr::Expr;
use physlaw::expr::algebra::ExprFunction;
use physlaw::expr::algebra::root_finding::bisection::BisectionMethod;
use physlaw::expr::calculus::differentiate;
use physlaw::expr::simplifier::simplify;
use physlaw::expr::substitution::Substitution;
use physlaw::expr::var::Var;
use physlaw::expr::var::constants::pi;
use physlaw::laws::kinematic::constant_acceleration_movement_is_parabolic as movement;
use physlaw::laws::kinematic::planar_projection_is_cosine as projector;
use physlaw::law::Law;
use physlaw::util::angles::Radians;

use anyhow::{Context, anyhow};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::f64::consts::FRAC_PI_2;

/// Find the throwing angle which maximizes flight distance.
#[derive(Parser, Debug)]
#[command(name = "throwing-angle", version, about, long_about = None)]
struct Args {
  /// Throwing velocity, such as "20 m / s".
  #[arg(long, default_value = "20 m / s")]
  velocity: String,

  /// Gravitational acceleration, such as "9.8 m / s^2".
  #[arg(long, default_value = "9.80665 m / s^2")]
  gravity: String,

  /// Number of angles in (0, pi/2) at which to tabulate the flight
  /// distance.
  #[arg(long, default_value_t = 9)]
  samples: usize,

  /// Print the results as JSON.
  #[arg(long)]
  json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
  optimal_angle: f64,
  optimal_angle_degrees: f64,
  max_distance: f64,
  distance_expr: String,
  samples: Vec<Sample>,
}

#[derive(Debug, Serialize)]
struct Sample {
  angle_degrees: f64,
  distance: f64,
}

struct Trajectory {
  angle: Var,
  distance: Expr,
  bindings: Substitution,
}

fn main() -> anyhow::Result<()> {
  init_tracing();
  let args = Args::parse();
  let velocity = Quantity::parse(&args.velocity).context("Invalid velocity")?;
  let gravity = Quantity::parse(&args.gravity).context("Invalid gravity")?;

  let trajectory = Trajectory::new(velocity, gravity);
  debug!(distance = %trajectory.distance, "built flight distance");

  let slope = differentiate(trajectory.distance.clone(), trajectory.angle.clone())
    .map_err(|err| anyhow!("{err}"))?;
  debug!(%slope, "differentiated flight distance");
  let slope = ExprFunction::new(slope, trajectory.angle.clone(), trajectory.bindings.clone());
  let root = BisectionMethod::default()
    .find_expr_root(&slope, 1e-6, FRAC_PI_2 - 1e-6)
    .map_err(|err| anyhow!("{err}"))?;
  debug!(angle = root.value, final_epsilon = root.final_epsilon, "found optimal angle");

  let distance = trajectory.function();
  let samples = (1..=args.samples)
    .map(|i| {
      let angle = FRAC_PI_2 * i as f64 / (args.samples + 1) as f64;
      let distance = distance.eval_at_real(angle)?;
      Ok(Sample { angle_degrees: Radians(angle).into_degrees().0, distance })
    })
    .collect::<anyhow::Result<Vec<_>>>()?;

  let report = Report {
    optimal_angle: root.value,
    optimal_angle_degrees: Radians(root.value).into_degrees().0,
    max_distance: distance.eval_at_real(root.value)?,
    distance_expr: trajectory.distance.to_string(),
    samples,
  };
  if args.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_report(&report);
  }
  Ok(())
}

impl Trajectory {
  fn new(velocity: Quantity, gravity: Quantity) -> Self {
    let var = |name: &str| {
      // unwrap: All names used here are valid identifiers.
      Var::new(name).unwrap()
    };
    let throwing_velocity = var("throwing_velocity");
    let throwing_angle = var("throwing_angle");
    let gravitational_acceleration = var("gravitational_acceleration");
    let horizontal_acceleration = var("horizontal_acceleration");

    let project = |angle: Expr| {
      projector::LAW.solution().clone()
        .substitute(projector::LAW.vector_length.var(), &Expr::from(&throwing_velocity))
        .substitute(projector::LAW.vector_angle.var(), &angle)
    };
    let horizontal_velocity = project(Expr::from(&throwing_angle));
    let vertical_velocity = project(pi() / 2_i64 - Expr::from(&throwing_angle));
    let flight_time = 2_i64 * vertical_velocity / Expr::from(&gravitational_acceleration);

    let distance = movement::LAW.solution().clone()
      .substitute(movement::LAW.initial_velocity.var(), &horizontal_velocity)
      .substitute(movement::LAW.constant_acceleration.var(), &Expr::from(&horizontal_acceleration))
      .substitute(movement::LAW.movement_time.var(), &flight_time);

    let bindings = Substitution::new()
      .with(&throwing_velocity, velocity)
      .with(&gravitational_acceleration, gravity)
      .with(&horizontal_acceleration, Quantity::from_base(0.0, *gravity.dimension()));
    Trajectory { angle: throwing_angle, distance: simplify(distance), bindings }
  }

  fn function(&self) -> ExprFunction {
    ExprFunction::new(self.distance.clone(), self.angle.clone(), self.bindings.clone())
  }
}

fn print_report(report: &Report) {
  println!("Flight distance: {}", report.distance_expr);
  println!();
  println!("{:>10}  {:>12}", "angle", "distance (m)");
  for sample in &report.samples {
    println!("{:>8.2}°  {:>12.3}", sample.angle_degrees, sample.distance);
  }
  println!();
  println!(
    "Optimal angle: {:.6} rad ({:.3}°), reaching {:.3} m",
    report.optimal_angle,
    report.optimal_angle_degrees,
    report.max_distance,
  );
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  use std::f64::consts::FRAC_PI_4;

  fn trajectory() -> Trajectory {
    Trajectory::new(Quantity::parse("20 m / s").unwrap(), Quantity::parse("10 m / s^2").unwrap())
  }

  #[test]
  fn test_flight_distance() {
    let distance = trajectory().function();
    // v^2 sin(2a) / g
    assert_abs_diff_eq!(distance.eval_at_real(FRAC_PI_4).unwrap(), 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(distance.eval_at_real(FRAC_PI_4 / 3.0).unwrap(), 20.0, epsilon = 1e-9);
  }

  #[test]
  fn test_optimal_angle() {
    let trajectory = trajectory();
    let slope = differentiate(trajectory.distance.clone(), trajectory.angle.clone()).unwrap();
    let slope = ExprFunction::new(slope, trajectory.angle.clone(), trajectory.bindings.clone());
    let root = BisectionMethod::default().find_expr_root(&slope, 1e-6, FRAC_PI_2 - 1e-6).unwrap();
    assert_abs_diff_eq!(root.value, FRAC_PI_4, epsilon = 1e-6);
  }
}

use rand::thread_rng;
use sort_steps::{
    AlgorithmId, ControllerBuilder, Pacing, SortError, SvgChart, Visualizer, TIMING_TRIALS,
};
use std::env::{args, var};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SortError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let algorithm: AlgorithmId = args()
        .nth(1)
        .expect("missing algorithm name as first argument")
        .parse()?;
    let prefix = args()
        .nth(2)
        .expect("missing output prefix as second argument");
    let trials = args()
        .nth(3)
        .map(|t| t.parse().expect("trials number should be an integer"))
        .unwrap_or(TIMING_TRIALS);
    // optional json file overriding the default pacing
    let pacing = match var("SORT_STEPS_PACING") {
        Ok(path) => Pacing::load(path)?,
        Err(_) => Pacing::default(),
    };

    let controller = ControllerBuilder::new().pacing(pacing).build();
    let mut visualizer = Visualizer::new(controller, SvgChart::new(&prefix))
        .with_algorithm(algorithm)
        .trials(trials);
    visualizer.generate_numbers(&mut thread_rng())?;

    while visualizer.can_step() {
        match visualizer.step() {
            Ok(step) => info!(step = step.step, kind = ?step.snapshot.kind, "step drawn"),
            Err(e) => {
                warn!("stepping stopped: {}", e);
                break;
            }
        }
    }
    eprintln!(
        "{} steps of {} drawn as {}_NNN.svg",
        visualizer.chart().rendered(),
        algorithm,
        prefix
    );

    let report = visualizer.time()?;
    let (average, total) = report.summary();
    println!("{}", average);
    println!("{}", total);
    report.save(format!("{}_timing.json", prefix))?;
    Ok(())
}

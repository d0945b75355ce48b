use rand::thread_rng;
use sort_steps::{random_numbers, Comparator, ControllerBuilder, SortError, TIMING_TRIALS};
use std::env::args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SortError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let html_file = args()
        .nth(1)
        .expect("missing html file name as first argument");
    let runs = args()
        .nth(2)
        .map(|t| t.parse().expect("runs number should be an integer"))
        .unwrap_or(TIMING_TRIALS);

    let numbers = random_numbers(&mut thread_rng());
    let mut controller = ControllerBuilder::new().build();
    let comparator = Comparator::new(&mut controller, &numbers)
        .runs_number(runs)
        .attach_all()?;
    for report in comparator.reports() {
        let (average, _) = report.summary();
        println!("{}: {}", report.algorithm, average);
    }
    comparator.generate_report(html_file)
}

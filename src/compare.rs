//! `Comparator` Structure for easy comparisons of different algorithms.
use crate::common_types::{AlgorithmId, Value, TIMING_TRIALS};
use crate::controller::SessionController;
use crate::error::SortError;
use crate::snapshot::Snapshot;
use crate::stats::{time_string, TimingReport};
use crate::svg::fill_svg_file;
use itertools::{izip, Itertools};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

/// This struct implements a pseudo builder pattern for multi-way comparisons in a single file.
/// Algorithms are timed one after the other on the same numbers, never concurrently.
pub struct Comparator<'a> {
    controller: &'a mut SessionController,
    numbers: Vec<Value>,
    runs_number: usize,
    reports: Vec<TimingReport>,
    sorted: Option<Snapshot>,
}

impl<'a> Comparator<'a> {
    /// Compare algorithms on a copy of `numbers`, using given controller.
    pub fn new(controller: &'a mut SessionController, numbers: &[Value]) -> Self {
        Comparator {
            controller,
            numbers: numbers.to_vec(),
            runs_number: TIMING_TRIALS,
            reports: Vec::new(),
            sorted: None,
        }
    }

    /// PRECONDITION: call that BEFORE attaching algorithms
    pub fn runs_number(self, runs_wanted: usize) -> Self {
        Comparator {
            runs_number: runs_wanted,
            ..self
        }
    }

    /// Time given algorithm and add it to the comparison.
    pub fn attach_algorithm(mut self, algorithm: AlgorithmId) -> Result<Self, SortError> {
        let (report, sorted) =
            self.controller
                .timed_trials(&self.numbers, algorithm, self.runs_number)?;
        self.reports.push(report);
        self.sorted = Some(sorted);
        Ok(self)
    }

    /// Time all algorithms.
    pub fn attach_all(self) -> Result<Self, SortError> {
        AlgorithmId::ALL
            .iter()
            .try_fold(self, |comparator, &algorithm| {
                comparator.attach_algorithm(algorithm)
            })
    }

    /// Timings gathered so far, in attachment order.
    pub fn reports(&self) -> &[TimingReport] {
        &self.reports
    }

    /// This method should be called in the end to write the comparison to a desired html file.
    pub fn generate_report<P: AsRef<Path>>(&self, filename: P) -> Result<(), SortError> {
        let mut html_file = File::create(filename)?;
        self.write_html(&mut html_file)?;
        Ok(())
    }

    fn write_html<W: Write>(&self, html_file: &mut W) -> std::io::Result<()> {
        write!(html_file, "<!DOCTYPE html>")?;
        write!(html_file, "<html><body><center>")?;
        let labels = self.reports.iter().map(|r| r.algorithm.name()).join(", ");
        write!(html_file, "<H1> Comparing {}</H1>", labels)?;
        write!(
            html_file,
            "<H2>{} values, {} runs per algorithm</H2>",
            self.numbers.len(),
            self.runs_number
        )?;
        write!(
            html_file,
            "<table><tr><th>algorithm</th><th>average</th><th>median</th><th>fastest</th><th>total</th></tr>",
        )?;
        let fastest = self.reports.iter().map(|r| r.min_max().map_or(0, |(min, _)| min));
        for (report, fastest) in izip!(self.reports.iter(), fastest) {
            write!(
                html_file,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                report.algorithm,
                time_string(report.average()),
                time_string(report.median()),
                time_string(fastest),
                time_string(report.total()),
            )?;
        }
        write!(html_file, "</table>")?;
        if let Some(sorted) = &self.sorted {
            write!(html_file, "<H2>Sorted numbers</H2>")?;
            fill_svg_file(sorted, 640, 480, html_file)?;
        }
        write!(html_file, "</center></body></html>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ControllerBuilder;

    #[test]
    fn html_lists_every_attached_algorithm() {
        let mut controller = ControllerBuilder::new().build();
        let numbers: Vec<Value> = (0..30).rev().collect();
        let comparator = Comparator::new(&mut controller, &numbers)
            .runs_number(2)
            .attach_all()
            .unwrap();
        assert_eq!(comparator.reports().len(), 6);
        assert!(comparator.reports().iter().all(|r| r.trials() == 2));
        let mut html = Vec::new();
        comparator.write_html(&mut html).unwrap();
        let html = String::from_utf8(html).unwrap();
        for algorithm in AlgorithmId::ALL.iter() {
            assert!(html.contains(&format!("<tr><td>{}</td>", algorithm)));
        }
        assert!(html.contains("<svg"));
    }
}

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::thread;

use log::debug;
use prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE;
use prettytable::{Cell as TableCell, Row, Table};
use separator::Separatable;

use crate::config::{Heuristic, Strategy};
use crate::problem::Problem;
use crate::solver::SolverOk;
use crate::Solve;

/// One search per heuristic over the same board.
pub struct Comparison {
    strategy: Strategy,
    results: Vec<(Heuristic, SolverOk)>,
}

impl Comparison {
    /// Runs `strategy` with every heuristic, each on its own thread.
    ///
    /// Results are in the same order as `Heuristic::ALL`.
    pub fn run(problem: &Problem, strategy: Strategy) -> Result<Comparison, Box<dyn Error>> {
        let handles: Vec<_> = Heuristic::ALL
            .iter()
            .map(|&(_, heuristic)| {
                let problem = problem.with(heuristic);
                thread::spawn(move || problem.solve(strategy, false))
            })
            .collect();

        let mut results = Vec::new();
        for (handle, &(name, heuristic)) in handles.into_iter().zip(Heuristic::ALL.iter()) {
            let solver_ok = handle
                .join()
                .map_err(|_| format!("Search with heuristic {} panicked", name))?;
            debug!("{} finished: {:?}", name, solver_ok);
            results.push((heuristic, solver_ok));
        }

        Ok(Comparison { strategy, results })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn results(&self) -> &[(Heuristic, SolverOk)] {
        &self.results
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(Row::new(
            ["heuristic", "admissible", "cost", "expanded", "created"]
                .iter()
                .map(|title| TableCell::new(title))
                .collect(),
        ));

        for (heuristic, solver_ok) in &self.results {
            let cost = match solver_ok.solution {
                Some(ref solution) => solution.cost.to_string(),
                None => "-".to_owned(),
            };
            let admissible = if heuristic.is_admissible() { "yes" } else { "no" };
            table.add_row(Row::new(vec![
                TableCell::new(heuristic.name()),
                TableCell::new(admissible),
                TableCell::new(&cost),
                TableCell::new(&solver_ok.stats.total_expanded().separated_string()),
                TableCell::new(&solver_ok.stats.total_created().separated_string()),
            ]));
        }
        table
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search strategy: {}", self.strategy)?;
        write!(f, "{}", self.table())
    }
}

impl Debug for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (heuristic, solver_ok) in &self.results {
            writeln!(f, "{}:", heuristic)?;
            writeln!(f, "{:?}", solver_ok)?;
        }
        Ok(())
    }
}

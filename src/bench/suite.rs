// Built-in example cases for both katas.
//
// Cases are plain data run through the pure functions; formatting stays in
// the report methods and never touches the core.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::brackets::validator::is_valid;
use crate::core::types::Grid;
use crate::grid::modifier::min_modifications;

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub elapsed_ms: u64,
    pub per_case: Vec<CaseReport>,
}

fn grid_cases() -> Vec<(&'static str, Grid, usize)> {
    vec![
        ("already satisfied", vec![vec![1, 0, 2], vec![1, 0, 2]], 0),
        ("uniform ones", vec![vec![1, 1, 1], vec![1, 1, 1]], 2),
        ("disjoint rows", vec![vec![1, 2, 3], vec![4, 5, 6]], 3),
        ("two by two ones", vec![vec![1, 1], vec![1, 1]], 2),
        ("checkerboard", vec![vec![1, 0], vec![0, 1]], 2),
        ("uniform rows", vec![vec![1, 1], vec![0, 0]], 2),
        ("empty", vec![], 0),
    ]
}

fn bracket_cases() -> Vec<(&'static str, bool)> {
    vec![
        ("()", true),
        ("()[]{}", true),
        ("(]", false),
        ("([)]", false),
        ("{[]}", true),
        ("", true),
        ("(", false),
        (")", false),
        ("(((", false),
        (")))", false),
        ("({[]})", true),
        ("({[}])", false),
    ]
}

/// Run every built-in case and collect pass/fail results.
pub fn run_suite() -> SuiteReport {
    let start = Instant::now();
    let mut per_case = Vec::new();

    for (name, grid, expected) in grid_cases() {
        let actual = min_modifications(&grid);
        per_case.push(CaseReport {
            name: format!("grid: {}", name),
            input: format!("{:?}", grid),
            expected: expected.to_string(),
            actual: actual.to_string(),
            passed: actual == expected,
        });
    }

    for (input, expected) in bracket_cases() {
        let actual = is_valid(input);
        per_case.push(CaseReport {
            name: format!("brackets: {:?}", input),
            input: input.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
            passed: actual == expected,
        });
    }

    let passed = per_case.iter().filter(|c| c.passed).count();
    let report = SuiteReport {
        total: per_case.len(),
        passed,
        elapsed_ms: start.elapsed().as_millis() as u64,
        per_case,
    };
    debug!(total = report.total, passed = report.passed, "suite done");
    report
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn print_summary(&self) {
        println!("=== Katabox Suite ===");
        println!(
            "Cases: {} | Passed: {} | Failed: {} | Time: {}ms",
            self.total,
            self.passed,
            self.total - self.passed,
            self.elapsed_ms
        );
    }

    pub fn print_detail(&self) {
        self.print_summary();
        println!("\nPer-case detail:");
        for case in &self.per_case {
            let status = if case.passed { "OK" } else { "--" };
            println!(
                "  [{}] {} | expected={} actual={}",
                status, case.name, case.expected, case.actual
            );
        }
    }
}

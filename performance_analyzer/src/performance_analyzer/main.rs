//!
//! The performance analyzer binary.
//!

pub(crate) mod arguments;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The process exit code for detected regressions with the regression check active.
const EXIT_CODE_REGRESSIONS: u8 = 1;
/// The process exit code for an unrecoverable error.
const EXIT_CODE_ERROR: u8 = 2;

///
/// The application entry point.
///
fn main() -> ExitCode {
    let arguments = Arguments::parse();

    match run(arguments) {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{} {error:#}", "Error:".bright_red());
            ExitCode::from(EXIT_CODE_ERROR)
        }
    }
}

///
/// Runs the analysis and returns the process exit code.
///
fn run(arguments: Arguments) -> anyhow::Result<ExitCode> {
    let analyzer = performance_analyzer::Analyzer::new(arguments.threshold);

    println!("Running performance analysis...");
    let report = analyzer.run(arguments.current.as_slice(), arguments.baseline.as_deref())?;

    // The JSON artifact and the Markdown report are written independently,
    // so a failure of one never prevents the other from being attempted.
    let json_result = performance_analyzer::JsonOutput::try_from(&report)
        .and_then(|json| json.write_to_file(arguments.output.as_path()));
    if json_result.is_ok() {
        println!("Analysis exported to {}", arguments.output.display());
    }

    if let Some(report_path) = arguments.report.as_deref() {
        let markdown = performance_analyzer::MarkdownOutput::from(&report);
        match markdown.write_to_file(report_path) {
            Ok(()) => println!("Report generated: {}", report_path.display()),
            Err(error) => eprintln!("{} {error:#}", "Warning:".bright_yellow()),
        }
    }

    println!();
    println!("Analysis Summary:");
    println!("  Tests analyzed: {}", report.summary.total_tests);
    println!(
        "  Regressions detected: {}",
        report.summary.regressions_detected
    );
    println!(
        "  Improvements detected: {}",
        report.summary.improvements_detected
    );
    println!(
        "  Educational insights: {}",
        report.educational_insights.len()
    );
    println!(
        "  Optimization recommendations: {}",
        report.optimization_recommendations.len()
    );

    json_result?;

    println!();
    if report.summary.regressions_detected > 0 {
        println!(
            "{}",
            format!(
                "Warning: {} performance regressions detected",
                report.summary.regressions_detected
            )
            .bright_red()
        );
        if !arguments.no_fail_on_regression {
            return Ok(ExitCode::from(EXIT_CODE_REGRESSIONS));
        }
    } else {
        println!(
            "{}",
            "No significant performance regressions detected".bright_green()
        );
    }

    Ok(ExitCode::SUCCESS)
}

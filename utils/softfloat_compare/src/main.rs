use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;

mod cases;
mod comparison;
mod vectors;

use comparison::{ComparisonResult, Verdict};

/// Compares the software float engine against the host FPU
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vector file with one `op a [b]` case per line (hex bit patterns)
    #[arg(short, long)]
    vectors: Option<PathBuf>,

    /// Seed for the random sweep
    #[arg(short, long, default_value_t = 0x5EED)]
    seed: u64,

    /// Random cases per operation (0 skips the sweep)
    #[arg(short, long, default_value_t = 10_000)]
    count: usize,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Where to write the JSON report
    #[arg(short, long, default_value = "softfloat_comparison.json")]
    output: PathBuf,

    /// Show only mismatches (skip known deviations)
    #[arg(short, long)]
    diff_only: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    println!("{}", "SoftFloat Comparison Tool v0.1.0".bold().blue());
    println!("{}", "=====================================".blue());
    println!();

    let mut suites = Vec::new();
    suites.push(("edge cases".to_string(), cases::edge_cases()));

    if let Some(path) = &args.vectors {
        println!("{} {}", "📖".bold(), "Reading vector file...".cyan());
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed = vectors::parse_vectors(&content)?;
        println!("  Found {} cases in {}", parsed.len(), path.display());
        suites.push((format!("vectors ({})", path.display()), parsed));
    }

    if args.count > 0 {
        suites.push((
            format!("random sweep (seed {:#x})", args.seed),
            cases::random_cases(args.seed, args.count),
        ));
    }

    let mut all_results = Vec::new();
    for (name, suite) in suites {
        println!();
        println!("{} Running: {}", "🔍".bold(), name.yellow());
        let result = comparison::compare_cases(&suite);
        print_suite_summary(&result, args.diff_only);
        all_results.push((name, result));
    }

    print_overall_summary(&all_results);

    if args.format == "json" {
        let report: Vec<_> = all_results
            .iter()
            .map(|(name, result)| serde_json::json!({ "suite": name, "result": result }))
            .collect();
        let json_output = serde_json::to_string_pretty(&report)?;
        fs::write(&args.output, json_output)?;
        println!();
        println!("📝 Results exported to: {}", args.output.display());
    }

    let mismatches: usize = all_results.iter().map(|(_, r)| r.mismatches).sum();
    if mismatches > 0 {
        anyhow::bail!("{} cases differ beyond truncation and alignment loss", mismatches);
    }
    Ok(())
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 * 100.0 }
}

fn print_suite_summary(result: &ComparisonResult, diff_only: bool) {
    println!("  {}", "Summary:".bold());
    println!("    Cases: {}", result.total_cases);
    println!(
        "    Exact: {} ({:.1}%)",
        result.exact.to_string().green(),
        percent(result.exact, result.total_cases)
    );
    println!(
        "    Truncated: {} ({:.1}%)",
        result.truncated.to_string().cyan(),
        percent(result.truncated, result.total_cases)
    );
    println!(
        "    Alignment losses: {} ({:.1}%)",
        result.alignment_losses.to_string().cyan(),
        percent(result.alignment_losses, result.total_cases)
    );
    println!("    Known deviations: {}", result.known_deviations.to_string().yellow());
    println!("    Mismatches: {}", result.mismatches.to_string().red());

    println!();
    for (op, stats) in &result.by_op {
        println!(
            "    {:<7} exact {:>6}  truncated {:>6}  aligned {:>6}  known {:>6}  mismatch {:>4}",
            op, stats.exact, stats.truncated, stats.alignment_losses, stats.known_deviations, stats.mismatches
        );
    }

    let shown: Vec<_> = result
        .differences
        .iter()
        .filter(|d| !diff_only || d.verdict == Verdict::Mismatch)
        .take(5)
        .collect();
    if !shown.is_empty() {
        println!();
        println!("    {}", "First differences:".yellow());
        for (i, diff) in shown.iter().enumerate() {
            let operands = match &diff.b {
                Some(b) => format!("{} {}", diff.a, b),
                None => diff.a.clone(),
            };
            println!("      {}. {} {} ({:?})", i + 1, diff.op.name(), operands, diff.verdict);
            println!("         soft:   {}", diff.soft);
            println!("         native: {}", diff.native);
        }
    }
}

fn print_overall_summary(results: &[(String, ComparisonResult)]) {
    println!();
    println!("{}", "=====================================".blue());
    println!("{}", "Overall Summary".bold().green());
    println!("{}", "=====================================".blue());

    for (name, result) in results {
        let status = if result.mismatches > 0 {
            "❌ NEEDS REVIEW".red()
        } else if result.truncated + result.alignment_losses + result.known_deviations == 0 {
            "✅ PERFECT".green()
        } else {
            "✅ WITHIN BOUNDS".green()
        };
        println!(
            "  {} - {}: {} cases, max {} ulp off",
            status, name, result.total_cases, result.max_ulp
        );
    }
}

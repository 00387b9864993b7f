use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use taskrank::analyzer::{AnalysisResult, Analyzer, Strategy};
use taskrank::cli::{Args, Commands, load_batch};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskrank=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Analyze {
            file,
            strategy,
            today,
            pretty,
        } => {
            let batch = load_batch(&file)?;
            let analyzer = build_analyzer(strategy.or(batch.strategy), today);
            let result = analyzer.analyze(&batch.tasks);
            if pretty {
                print_table(&result);
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            finish(&result);
        }
        Commands::Suggest {
            file,
            strategy,
            today,
            limit,
            all_strategies,
        } => {
            let batch = load_batch(&file)?;
            if all_strategies {
                let mut rejected = false;
                for candidate in Strategy::ALL {
                    let analyzer = with_today(Analyzer::new(candidate), today);
                    let result = analyzer.suggest(&batch.tasks, limit);
                    println!("--- {candidate} ---");
                    print_table(&result);
                    rejected = rejected || result.is_rejected();
                }
                if rejected {
                    std::process::exit(1);
                }
            } else {
                let analyzer = build_analyzer(strategy.or(batch.strategy), today);
                let result = analyzer.suggest(&batch.tasks, limit);
                print_table(&result);
                finish(&result);
            }
        }
    }

    Ok(())
}

fn build_analyzer(strategy: Option<String>, today: Option<NaiveDate>) -> Analyzer {
    let strategy = strategy
        .as_deref()
        .map(Strategy::resolve)
        .unwrap_or_default();
    with_today(Analyzer::new(strategy), today)
}

fn with_today(analyzer: Analyzer, today: Option<NaiveDate>) -> Analyzer {
    match today {
        Some(today) => analyzer.with_today(today),
        None => analyzer,
    }
}

fn print_table(result: &AnalysisResult) {
    for error in &result.errors {
        eprintln!("error: {error}");
    }
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    for (rank, scored) in result.sorted_tasks.iter().enumerate() {
        println!(
            "{:>3}. [{:.4}] {}",
            rank + 1,
            scored.priority_score,
            scored.task.title
        );
        println!("     {}", scored.explanation);
    }
}

/// Map a rejected batch to a client-error exit status
fn finish(result: &AnalysisResult) {
    if !result.errors.is_empty() {
        std::process::exit(1);
    }
}

use crate::infra::{load_catalog, InMemoryDiagnosticRepository};
use clap::Args;
use datapay_diagnostic::diagnostic::{
    DiagnosticRecord, DiagnosticService, DiagnosticSubmission, QuestionCatalog, ScoreView,
};
use datapay_diagnostic::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding `company` form fields and `answers` keyed by question id
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// CSV questionnaire to score against instead of the built-in one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the stored record view as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// CSV questionnaire to print instead of the built-in one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let raw = std::fs::read_to_string(&args.input)?;
    let submission: DiagnosticSubmission = serde_json::from_str(&raw)?;

    let repository = Arc::new(InMemoryDiagnosticRepository::default());
    let service = DiagnosticService::new(repository, catalog);
    let record = service.submit(submission)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record.view())?);
    } else {
        print_report(&record);
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    print_questions(&catalog);
    Ok(())
}

fn print_report(record: &DiagnosticRecord) {
    let report = record.result.report();

    println!("=== Data Maturity Diagnostic ===");
    println!(
        "Diagnostic {} ({})",
        record.diagnostic_id.0,
        record.submitted_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
    print_score(&report.overall);
    for view in &report.dimensions {
        print_score(view);
    }
    if let Some(weakest) = report.weakest_dimension {
        println!();
        println!("Weakest dimension: {weakest}");
    }

    println!();
    println!("=== Financial Impact ===");
    println!("Monthly waste: {}", report.impact.monthly_waste);
    println!("Monthly potential: {}", report.impact.monthly_potential);
    println!("Annual impact: {}", report.impact.annual_impact);
}

fn print_score(view: &ScoreView) {
    println!("{:<30} {:>3}  {}", view.label, view.score, view.level_label);
}

fn print_questions(catalog: &QuestionCatalog) {
    println!("=== Questionnaire {} ===", catalog.version());
    let mut current = None;
    for question in catalog.questions() {
        if current != Some(question.dimension) {
            current = Some(question.dimension);
            println!();
            println!("[{}]", question.dimension);
        }
        println!("{:>2}. {}", question.id.0, question.text);
        for option in &question.options {
            println!("      {:>3}  {}", option.points, option.label);
        }
    }
}

use chrono::{Local, NaiveDate};
use clap::Args;
use enrollment_docs::config::AppConfig;
use enrollment_docs::error::AppError;
use enrollment_docs::telemetry;
use enrollment_docs::workflows::enrollment::{
    assess, label, normalize_document_key, normalize_modality, normalize_plan, render_receipt,
    CompletenessReport, DocumentRecord, RequirementPolicy,
};
use enrollment_docs::workflows::roster::{evaluate_roster, RosterImporter, RosterSummary};
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct RequirementsArgs {
    /// Modality id or name (e.g. 1, presencial, blended)
    #[arg(long)]
    pub(crate) modality: String,
    /// Plan id, year or plan name (e.g. 2, "1er año", "Plan B")
    #[arg(long)]
    pub(crate) plan: String,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Modality id or name
    #[arg(long)]
    pub(crate) modality: String,
    /// Plan id, year or plan name
    #[arg(long)]
    pub(crate) plan: String,
    /// Submitted document as key=file_reference (repeatable)
    #[arg(long = "document")]
    pub(crate) documents: Vec<String>,
    /// Receipt issue date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) issued_on: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster CSV export (Enrollment ID, Student, Modality, Plan, Documents)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print missing documents for each pending enrollment
    #[arg(long)]
    pub(crate) list_documents: bool,
}

pub(crate) fn run_requirements(args: RequirementsArgs) -> Result<(), AppError> {
    let modality = normalize_modality(&args.modality);
    let plan = normalize_plan(&args.plan);
    let policy = RequirementPolicy::standard();
    let rule = policy.resolve(modality, plan);

    println!("Document requirements");
    println!(
        "Modality {} / plan {} ({})",
        modality.0,
        plan.0,
        policy.plan_label(modality, plan).unwrap_or("unrecognized")
    );
    if let Some(reason) = rule.fallback_reason {
        println!("Fallback applied: {}", reason.label());
    }

    println!("\nBasic documents");
    for code in &rule.basic_set {
        println!("- {}", label(*code));
    }

    match rule.alternative_group.as_slice() {
        [] => println!("\nNo additional document required"),
        [single] => println!("\nAlso required: {}", label(*single)),
        group => {
            let options: Vec<&str> = group.iter().map(|code| label(*code)).collect();
            println!("\nAlso required, any one of: {}", options.join(", "));
        }
    }

    Ok(())
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        modality,
        plan,
        documents,
        issued_on,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let records: Vec<DocumentRecord> = documents
        .iter()
        .map(|entry| document_record_from_arg(entry))
        .collect();

    let report = assess(normalize_modality(&modality), normalize_plan(&plan), &records);
    let issued_on = issued_on.unwrap_or_else(|| Local::now().date_naive());

    print!(
        "{}",
        render_receipt(&report, &config.receipt.institution_name, issued_on)
    );
    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let enrollments = RosterImporter::from_path(&args.csv)?;
    let summary = evaluate_roster(&enrollments);
    render_roster_summary(&summary, args.list_documents);
    Ok(())
}

/// `key=file` argument; unknown keys become records without a code.
pub(crate) fn document_record_from_arg(entry: &str) -> DocumentRecord {
    let (key, file_reference) = match entry.split_once('=') {
        Some((key, file)) => (key.trim(), Some(file.trim().to_string())),
        None => (entry.trim(), None),
    };

    let code = normalize_document_key(key);
    if code.is_none() {
        warn!(document = key, "ignoring unrecognized document");
    }

    DocumentRecord {
        code,
        is_present: true,
        file_reference: file_reference.filter(|file| !file.is_empty()),
    }
}

fn render_roster_summary(summary: &RosterSummary, list_documents: bool) {
    println!("Enrollment roster");
    println!(
        "{} enrollments: {} complete, {} pending, {} on fallback policy",
        summary.total, summary.complete, summary.pending, summary.fallback
    );

    println!();
    for outcome in &summary.outcomes {
        let report: &CompletenessReport = &outcome.report;
        let fallback_note = if report.used_fallback {
            " [fallback]"
        } else {
            ""
        };
        println!(
            "- {} | {} | {} / {} | {}{}",
            outcome.enrollment_id,
            outcome.student,
            report.modality_label,
            report.plan_label,
            report.status_label,
            fallback_note
        );

        if list_documents && !report.is_complete {
            for line in &report.missing {
                println!("    missing: {}", line.label);
            }
        }
        if !outcome.unrecognized_documents.is_empty() {
            println!(
                "    unrecognized: {}",
                outcome.unrecognized_documents.join(", ")
            );
        }
    }
}

use crate::infra::Board;
use clap::Args;
use job_board::board::accounts::{Credentials, DEMO_PASSWORD};
use job_board::board::applications::{ApplicationPayload, ApplicationServiceError};
use job_board::board::jobs::{JobDraft, JobId, JobType, ListParams};
use job_board::board::profile::{FieldKey, RequirementLevel};
use job_board::board::Caller;
use job_board::config::{AuthConfig, BoardConfig};
use job_board::error::AppError;
use std::collections::BTreeMap;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Requirement level for the LinkedIn field (mandatory, optional or off).
    #[arg(long, value_parser = parse_level, default_value = "mandatory")]
    pub(crate) linkedin: RequirementLevel,
    /// Print the employer's job detail payload as JSON at the end.
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_level(raw: &str) -> Result<RequirementLevel, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "mandatory" => Ok(RequirementLevel::Mandatory),
        "optional" => Ok(RequirementLevel::Optional),
        "off" => Ok(RequirementLevel::Off),
        other => Err(format!(
            "unknown requirement level '{other}' (expected mandatory, optional or off)"
        )),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let board = Board::in_memory(AuthConfig { password_cost: 4 }, BoardConfig::default());

    println!("Job board demo");
    board.accounts.seed_demo_accounts()?;
    let admin = login(&board, "admin@mail.com")?;
    let candidate = login(&board, "candidate@mail.com")?;
    println!("- Signed in as admin@mail.com and candidate@mail.com");

    let mut profile_config = BTreeMap::new();
    profile_config.insert(FieldKey::Linkedin, args.linkedin);
    profile_config.insert(FieldKey::Gender, RequirementLevel::Off);
    profile_config.insert(FieldKey::Birth, RequirementLevel::Optional);

    let draft = JobDraft {
        salary_min: Some(7_000_000),
        salary_max: Some(9_000_000),
        job_name: "Frontend Engineer".to_string(),
        job_type: Some(JobType::FullTime),
        job_description: "Build the candidate-facing application form.".to_string(),
        number_candidates: Some(2),
        company: "Rakamin".to_string(),
        location: "Jakarta".to_string(),
        profile_config,
        ..JobDraft::default()
    };
    let job = board.jobs.create(draft)?;
    println!(
        "\nPosted \"{}\" at {} ({}, {})",
        job.job_name,
        job.company,
        job.job_type.label(),
        job.status.label()
    );

    print_form(&board, &job.id)?;

    let mut payload = ApplicationPayload::default();
    payload
        .set(FieldKey::FullName, "Candidate Demo")
        .set(FieldKey::Email, "candidate-at-mail")
        .set(FieldKey::PhotoProfile, "https://cdn.example.com/candidate.png")
        .set(FieldKey::Linkedin, "linkedin/candidate-demo");

    println!("\nFirst attempt");
    report_submission(&board, candidate, job.id, payload.clone());

    payload
        .set(FieldKey::Email, "candidate@mail.com")
        .set(
            FieldKey::Linkedin,
            "https://www.linkedin.com/in/candidate-demo",
        )
        .set(FieldKey::Birth, "1996-07-14");
    println!("\nCorrected attempt");
    report_submission(&board, candidate, job.id, payload.clone());

    println!("\nRepeated attempt");
    report_submission(&board, candidate, job.id, payload);

    let listing = board.jobs.list(&candidate, ListParams::default())?;
    println!("\nCandidate job list ({} total)", listing.meta.total);
    for summary in listing.data {
        let marker = if summary.has_applied { "applied" } else { "open" };
        println!("  - {} @ {} [{}]", summary.job_name, summary.company, marker);
    }

    let detail = board.jobs.detail(&admin, &job.id)?;
    println!("\nApplicants visible to the employer: {}", detail.applicants.len());
    for answers in &detail.applicants {
        println!(
            "  - {} <{}> born {}",
            answers.full_name.as_deref().unwrap_or("-"),
            answers.email.as_deref().unwrap_or("-"),
            answers
                .birth
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }

    if args.json {
        match serde_json::to_string_pretty(&detail) {
            Ok(json) => println!("\nJob detail payload:\n{}", json),
            Err(err) => println!("  Job detail payload unavailable: {}", err),
        }
    }

    Ok(())
}

fn print_form(board: &Board, job_id: &JobId) -> Result<(), AppError> {
    let fields = board.jobs.form(job_id)?;
    println!("Application form:");
    for field in fields {
        println!("  - {:<14} {}", field.label, field.level.label());
    }
    Ok(())
}

fn login(board: &Board, email: &str) -> Result<Caller, AppError> {
    let user = board.accounts.authenticate(Credentials {
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
    })?;
    Ok(Caller::new(user.id, user.role))
}

fn report_submission(
    board: &Board,
    candidate: Caller,
    job_id: JobId,
    payload: ApplicationPayload,
) {
    match board.applications.submit(candidate.user_id, job_id, payload) {
        Ok(record) => println!("  Your application was sent! ({})", record.id.0),
        Err(ApplicationServiceError::Invalid(errors)) => {
            println!("  Rejected with {} field error(s):", errors.len());
            for key in errors.keys() {
                println!("    - {}: {}", key, errors.get(key).unwrap_or_default());
            }
        }
        Err(err) => println!("  Rejected: {}", err),
    }
}

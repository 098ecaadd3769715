use crate::infra::parse_answer;
use clap::Args;
use hse_survey::error::AppError;
use hse_survey::survey::{
    in_display_order, questions_for, summarize, write_dimension_csv, AnswerOption, AnswerSet,
    Dimension, DimensionCard, OrganizationReport, QuestionId, SubmissionCsvImporter, SECTORS,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer as QUESTION=OPTION (e.g. 12=as_vezes); repeat for each question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(QuestionId, AnswerOption)>,
    /// Print the summaries as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Submission CSV export (id, sector, role, submitted_at, q1..q35)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Restrict the dashboard to one sector
    #[arg(long)]
    pub(crate) sector: Option<String>,
    /// Include the submission listing in the output
    #[arg(long)]
    pub(crate) list_submissions: bool,
    /// Write the organization dimension summary to this CSV file
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

pub(crate) fn run_catalog() {
    println!("{}", render_catalog());
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers: AnswerSet = args.answers.into_iter().collect();
    let summaries = summarize(&answers);
    let completion = answers.completion();

    if args.json {
        let payload = json!({ "completion": completion, "summaries": summaries });
        let rendered = serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "Answered {} of {} questions ({}%)",
        completion.answered, completion.total, completion.percent
    );
    let cards: Vec<DimensionCard> = in_display_order(&summaries)
        .iter()
        .map(DimensionCard::from)
        .collect();
    println!("{}", render_cards(&cards));
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        csv,
        sector,
        list_submissions,
        export,
    } = args;

    let submissions = SubmissionCsvImporter::from_path(&csv)?;
    let report = OrganizationReport::build(&submissions, sector.as_deref());
    println!("{}", render_dashboard(&report, list_submissions));

    if let Some(path) = export {
        let file = std::fs::File::create(&path)?;
        let summaries = report.dimension_summaries();
        write_dimension_csv(file, &summaries)?;
        info!(path = %path.display(), dimensions = summaries.len(), "dimension summary exported");
        println!("Dimension summary written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn render_catalog() -> String {
    let mut lines = vec!["HSE psychosocial risk questionnaire".to_string()];
    for dimension in Dimension::ordered() {
        let polarity = if dimension.is_inverted() {
            " (inverted)"
        } else {
            ""
        };
        lines.push(format!(
            "\n{} [{}]{polarity}",
            dimension.label(),
            dimension.id()
        ));
        for question in questions_for(dimension) {
            lines.push(format!("  {:>2}. {}", question.id, question.text));
        }
    }

    let options: Vec<String> = AnswerOption::ordered()
        .iter()
        .map(|option| format!("{} ({})", option.key(), option.label()))
        .collect();
    lines.push(format!("\nOptions: {}", options.join(", ")));
    lines.push(format!("Sectors: {}", SECTORS.join(", ")));
    lines.join("\n")
}

pub(crate) fn render_cards(cards: &[DimensionCard]) -> String {
    if cards.is_empty() {
        return "No answered dimensions.".to_string();
    }
    cards
        .iter()
        .map(|card| {
            format!(
                "- {:<28} avg {:.1} | {}/{} pts | {:.1}% | attention: {}",
                card.dimension_label,
                card.average,
                card.total_score,
                card.max_possible,
                card.percent_of_max,
                card.attention_label
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_dashboard(report: &OrganizationReport, list_submissions: bool) -> String {
    let mut lines = Vec::new();
    match report.sector_filter.as_deref() {
        Some(sector) => lines.push(format!(
            "Organization dashboard for {sector} ({} submissions)",
            report.submission_count
        )),
        None => lines.push(format!(
            "Organization dashboard ({} submissions)",
            report.submission_count
        )),
    }

    if report.submission_count == 0 {
        lines.push("No submissions recorded.".to_string());
        return lines.join("\n");
    }

    lines.push("\nDimensions".to_string());
    lines.push(render_cards(&report.dimensions));

    lines.push("\nPriorities (lowest average first)".to_string());
    for (rank, card) in report.priorities.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({:.1}, {})",
            rank + 1,
            card.dimension_label,
            card.average,
            card.attention_label
        ));
    }

    lines.push("\nSectors".to_string());
    for breakdown in &report.sectors {
        lines.push(format!(
            "- {}: {} submissions",
            breakdown.sector, breakdown.submission_count
        ));
    }

    if list_submissions {
        lines.push("\nSubmissions".to_string());
        for submission in &report.submissions {
            lines.push(format!(
                "- {} | {} | {}",
                submission.id,
                submission.display_unit(),
                submission.submitted_at.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXPORT: &str = "\
id,sector,role,submitted_at,q1,q9
s-1,Comercial / Vendas,Vendedor,2025-03-10T12:00:00Z,sempre,nunca
s-2,Tecnologia (TI),,2025-03-11,nunca,sempre
";

    fn report(sector: Option<&str>) -> OrganizationReport {
        let submissions = SubmissionCsvImporter::from_reader(EXPORT.as_bytes()).expect("import");
        OrganizationReport::build(&submissions, sector)
    }

    #[test]
    fn catalog_lists_every_dimension_and_sector() {
        let rendered = render_catalog();
        assert!(rendered.contains("Demandas [demandas] (inverted)"));
        assert!(rendered.contains("Controle [controle]\n"));
        assert!(rendered.contains("as_vezes (Às vezes)"));
        assert!(rendered.contains("Sectors: "));
        assert_eq!(
            rendered.lines().filter(|line| line.starts_with("  ")).count(),
            35
        );
    }

    #[test]
    fn empty_dashboard_says_so() {
        let rendered = render_dashboard(&report(Some("Jurídico / Compliance")), true);
        assert!(rendered.starts_with("Organization dashboard for Jurídico / Compliance (0 submissions)"));
        assert!(rendered.contains("No submissions recorded."));
    }

    #[test]
    fn dashboard_lists_priorities_and_submissions() {
        let rendered = render_dashboard(&report(None), true);
        assert!(rendered.starts_with("Organization dashboard (2 submissions)"));
        assert!(rendered.contains("Priorities (lowest average first)"));
        assert!(rendered.contains("- Comercial / Vendas: 1 submissions"));
        assert!(rendered.contains("- s-1 | Comercial / Vendas · Vendedor | 2025-03-10 12:00"));
        assert!(rendered.contains("- s-2 | Tecnologia (TI) | 2025-03-11 00:00"));

        let without_listing = render_dashboard(&report(None), false);
        assert!(!without_listing.contains("\nSubmissions"));
    }

    #[test]
    fn report_command_exports_dimension_csv() {
        let dir = std::env::temp_dir().join(format!("hse-survey-report-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let input = dir.join("respostas.csv");
        let output = dir.join("dimensoes.csv");
        std::fs::File::create(&input)
            .and_then(|mut file| file.write_all(EXPORT.as_bytes()))
            .expect("write input");

        run_report(ReportArgs {
            csv: input,
            sector: None,
            list_submissions: false,
            export: Some(output.clone()),
        })
        .expect("report runs");

        let exported = std::fs::read_to_string(&output).expect("read export");
        let lines: Vec<&str> = exported.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "demandas,Demandas,6,2,3.0,10,true,medium");
        assert_eq!(lines[2], "controle,Controle,6,2,3.0,10,false,medium");

        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn missing_csv_is_an_import_error() {
        let result = run_report(ReportArgs {
            csv: PathBuf::from("./no-such-export.csv"),
            sector: None,
            list_submissions: false,
            export: None,
        });
        assert!(matches!(result, Err(AppError::Import(_))));
    }
}

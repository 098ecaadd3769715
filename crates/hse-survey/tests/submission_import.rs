use std::io::Cursor;

use hse_survey::survey::{
    write_submissions_csv, AnswerOption, Dimension, OrganizationReport, SubmissionCsvImporter,
};

const EXPORT: &str = "\
id,sector,role,submitted_at,q1,q2,q3,q4,q5,q6,q7,q8,q9,q10,q11,q12,q13,q14
s-1,Comercial / Vendas,Vendedor,2025-03-10T12:00:00Z,sempre,sempre,sempre,sempre,sempre,sempre,sempre,sempre,nunca,nunca,nunca,nunca,nunca,nunca
s-2,Comercial / Vendas,,2025-03-11,nunca,nunca,nunca,nunca,nunca,nunca,nunca,nunca,sempre,sempre,sempre,sempre,sempre,sempre
s-3,Jurídico / Compliance,,2025-03-12,as_vezes,as_vezes,as_vezes,as_vezes,as_vezes,as_vezes,as_vezes,as_vezes,,,,,,
";

#[test]
fn imported_export_feeds_the_dashboard() {
    let submissions = SubmissionCsvImporter::from_reader(Cursor::new(EXPORT)).expect("import");
    assert_eq!(submissions.len(), 3);
    assert_eq!(submissions[0].answers.get(9), Some(AnswerOption::Never));
    assert_eq!(submissions[2].answers.len(), 8);

    let report = OrganizationReport::build(&submissions, None);
    assert_eq!(report.submission_count, 3);

    let demands = &report.dimensions[0];
    assert_eq!(demands.dimension, Dimension::Demands);
    // 8*1 + 8*5 + 8*3 over 24 answers
    assert_eq!(demands.total_score, 72);
    assert_eq!(demands.average, 3.0);

    let control = &report.dimensions[1];
    assert_eq!(control.question_count, 12);
    assert_eq!(control.average, 3.0);

    assert_eq!(report.sectors.len(), 2);
    assert_eq!(report.sectors[0].sector, "Comercial / Vendas");
    assert_eq!(report.sectors[0].submission_count, 2);
}

#[test]
fn sector_filter_narrows_the_dashboard() {
    let submissions = SubmissionCsvImporter::from_reader(Cursor::new(EXPORT)).expect("import");
    let report = OrganizationReport::build(&submissions, Some(" Jurídico / Compliance "));

    assert_eq!(report.submission_count, 1);
    assert_eq!(report.sector_filter.as_deref(), Some("Jurídico / Compliance"));
    assert_eq!(report.dimensions.len(), 1);
    assert_eq!(report.dimensions[0].average, 3.0);
}

#[test]
fn export_round_trips_through_the_importer() {
    let submissions = SubmissionCsvImporter::from_reader(Cursor::new(EXPORT)).expect("import");
    let mut buffer = Vec::new();
    write_submissions_csv(&mut buffer, &submissions).expect("export");

    let restored = SubmissionCsvImporter::from_reader(Cursor::new(buffer)).expect("reimport");
    assert_eq!(restored, submissions);
}

use enrollment_docs::workflows::enrollment::{DocumentCode, ModalityId, PlanId};
use enrollment_docs::workflows::roster::{evaluate_roster, RosterImportError, RosterImporter};
use std::io::Write;

const ROSTER: &str = "\
Enrollment ID,Student,Modality,Plan,Documents
ENR-001,Lucía Gómez,Presencial,2do año,dni=f/1/dni.pdf;cuil=f/1/cuil.pdf;partida=f/1/partida.pdf;ficha medica=f/1/ficha.pdf;foto=f/1/foto.jpg;analitico=f/1/analitico.pdf
ENR-002,Mateo Ruiz,Semipresencial,Plan A,dni=f/2/dni.pdf;cuil=f/2/cuil.pdf;partida=f/2/partida.pdf;ficha medica=f/2/ficha.pdf;foto=f/2/foto.jpg;certificado primario
ENR-003,Sofía Paz,Presencial,5to año,dni=f/3/dni.pdf;cuil=f/3/cuil.pdf;partida=f/3/partida.pdf;ficha medica=f/3/ficha.pdf;foto=f/3/foto.jpg;libreta=f/3/libreta.pdf
ENR-004,,,,
";

#[test]
fn roster_rows_normalize_identifiers() {
    let enrollments = RosterImporter::from_reader(ROSTER.as_bytes()).expect("roster parses");

    assert_eq!(enrollments.len(), 4);
    assert_eq!(enrollments[0].modality, ModalityId(1));
    assert_eq!(enrollments[0].plan, PlanId(2));
    assert_eq!(enrollments[1].modality, ModalityId(2));
    assert_eq!(enrollments[1].plan, PlanId(1));
    assert_eq!(enrollments[2].plan, PlanId::UNRECOGNIZED);
    assert_eq!(enrollments[2].unrecognized_documents, vec!["libreta".to_string()]);
    assert_eq!(enrollments[3].modality, ModalityId::UNRECOGNIZED);
    assert!(enrollments[3].records.is_empty());
}

#[test]
fn roster_summary_counts_complete_pending_and_fallback() {
    let enrollments = RosterImporter::from_reader(ROSTER.as_bytes()).expect("roster parses");

    let summary = evaluate_roster(&enrollments);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.complete, 2);
    assert_eq!(summary.pending, 2);
    assert_eq!(summary.fallback, 2);

    let plan_a = &summary.outcomes[1];
    assert_eq!(plan_a.enrollment_id, "ENR-002");
    assert!(!plan_a.report.is_complete);
    assert_eq!(
        plan_a.report.missing[0].code,
        DocumentCode::PrimaryLevelCertificate
    );

    let empty = &summary.outcomes[3];
    assert_eq!(empty.report.missing.len(), 5);
}

#[test]
fn roster_can_be_read_from_disk() {
    let mut path = std::env::temp_dir();
    path.push(format!("enrollment-roster-{}.csv", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("temp file");
    file.write_all(ROSTER.as_bytes()).expect("write roster");
    drop(file);

    let enrollments = RosterImporter::from_path(&path).expect("roster loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(enrollments.len(), 4);
}

#[test]
fn missing_roster_file_is_an_io_error() {
    match RosterImporter::from_path("/nonexistent/enrollment-roster.csv") {
        Err(RosterImportError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

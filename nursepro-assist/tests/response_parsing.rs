use std::fs;

use nursepro_assist::{parse_askep, parse_quiz, parse_sbar, AskepDiagnosis, SbarNote};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path}: {err}"))
}

#[test]
fn askep_response_is_parsed() {
    let diagnoses = parse_askep(&fixture("askep_response.json"));
    assert_eq!(diagnoses.len(), 2);

    let first: &AskepDiagnosis = &diagnoses[0];
    assert_eq!(first.code, "D.0001");
    assert_eq!(first.signs.major, vec!["Batuk tidak efektif", "Sputum berlebih"]);
    assert!(diagnoses[1].signs.minor.is_empty());
}

#[test]
fn fenced_askep_response_is_accepted() {
    let fenced = format!("```json\n{}\n```", fixture("askep_response.json"));
    assert_eq!(parse_askep(&fenced).len(), 2);
}

#[test]
fn incomplete_diagnosis_keeps_the_list() {
    let answer = r#"[
        {"code": "D.0077", "name": "Nyeri Akut", "category": "Psikologis",
         "definition": "Pengalaman sensorik terkait kerusakan jaringan.",
         "signs": {"major": ["Tampak meringis"]}},
        {"code": "D.0019", "name": "Defisit Nutrisi"}
    ]"#;

    let diagnoses = parse_askep(answer);
    assert_eq!(diagnoses.len(), 2);
    assert_eq!(diagnoses[0].signs.major, vec!["Tampak meringis"]);
    assert_eq!(diagnoses[1].name, "Defisit Nutrisi");
    assert!(diagnoses[1].definition.is_empty());
    assert!(diagnoses[1].signs.major.is_empty());
}

#[test]
fn broken_askep_response_yields_nothing() {
    assert!(parse_askep("Maaf, saya tidak dapat membantu.").is_empty());
    assert!(parse_askep("").is_empty());
}

#[test]
fn quiz_drops_out_of_range_answers() {
    let questions = parse_quiz(&fixture("quiz_response.json"));
    let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(questions[0].correct_answer, 3);
}

#[test]
fn polished_sbar_replaces_input() {
    let raw = SbarNote {
        situation: "px sesak".into(),
        background: "riw asma".into(),
        assessment: "rr 28".into(),
        recommendation: "nebu".into(),
    };
    let answer = r#"{
        "situation": "Pasien mengeluh sesak napas.",
        "background": "Riwayat asma bronkial.",
        "assessment": "Frekuensi napas 28 x/menit.",
        "recommendation": "Lanjutkan nebulisasi sesuai advis."
    }"#;

    let polished = parse_sbar(answer, &raw);
    assert_eq!(polished.situation, "Pasien mengeluh sesak napas.");
    assert_eq!(polished.recommendation, "Lanjutkan nebulisasi sesuai advis.");
    assert_eq!(parse_sbar("not json", &raw), raw);
}

//! End-to-end grading of generated `.pptx` packages.

#[allow(dead_code)]
mod common;

use common::{DeckBuilder, STANDARD, SlideFixture, WIDE, model_answer};
use proptest::prelude::*;
use slidegrade::grading::{
    Deck, Evaluator, EvaluatorOptions, GradeError, Points, RULE_COUNT, RUBRIC_TOTAL, ScoreReport,
};
use slidegrade::ooxml::OoxmlError;
use std::io::Cursor;
use tempfile::TempDir;

fn grade(deck: &DeckBuilder) -> ScoreReport {
    Evaluator::default().evaluate_bytes(&deck.build()).unwrap()
}

fn rule(report: &ScoreReport, id: u8) -> Points {
    report.rules[usize::from(id) - 1].awarded_score
}

#[test]
fn model_answer_passes_every_rule() {
    let report = grade(&model_answer());

    assert_eq!(report.rules.len(), RULE_COUNT);
    assert!(report.rules.iter().all(|r| r.passed));
    assert_eq!(report.total, Points::from_tenths(352));
    assert_eq!(report.rubric_total, RUBRIC_TOTAL);
    assert_eq!(report.pass_rate, 88);
}

#[test]
fn report_has_41_rules_in_order() {
    let report = grade(&DeckBuilder::new().blank_slides(2));
    let ids: Vec<u8> = report.rules.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=41).collect::<Vec<u8>>());
}

#[test]
fn slide_count_rule() {
    for (slides, expected) in [(6, 0), (7, 12), (8, 0)] {
        let report = grade(&DeckBuilder::new().blank_slides(slides));
        assert_eq!(rule(&report, 1), Points::from_tenths(expected), "{} slides", slides);
    }
}

#[test]
fn aspect_ratio_rule() {
    let wide = grade(&DeckBuilder::new().size(WIDE).blank_slides(1));
    assert_eq!(rule(&wide, 5), Points::from_tenths(12));

    let standard = grade(&DeckBuilder::new().size(STANDARD).blank_slides(1));
    assert_eq!(rule(&standard, 5), Points::ZERO);

    let unsized_deck = grade(&DeckBuilder::new().without_size().blank_slides(1));
    assert_eq!(rule(&unsized_deck, 5), Points::ZERO);
}

#[test]
fn text_rule_is_a_substring_match() {
    let with_year = DeckBuilder::new()
        .blank_slides(6)
        .slide(SlideFixture::new().text("出版信息年份"));
    assert_eq!(rule(&grade(&with_year), 32), Points::from_tenths(5));

    let partial = DeckBuilder::new().blank_slides(6).slide(SlideFixture::new().text("出版"));
    assert_eq!(rule(&grade(&partial), 32), Points::ZERO);
}

#[test]
fn text_inside_table_cells_does_not_count() {
    let deck = DeckBuilder::new()
        .blank_slides(6)
        .slide(SlideFixture::new().table_with(1, 1, |_, _| "出版信息".to_string()));
    assert_eq!(rule(&grade(&deck), 32), Points::ZERO);
}

#[test]
fn table_rule_uses_the_checked_row_count() {
    let eleven = DeckBuilder::new().blank_slides(6).slide(SlideFixture::new().table(11, 2));
    let report = grade(&eleven);
    assert_eq!(rule(&report, 33), Points::from_tenths(12));
    assert!(report.rules[32].inconsistency.is_some());

    // The rubric text says one row, the check disagrees
    let one = DeckBuilder::new().blank_slides(6).slide(SlideFixture::new().table(1, 2));
    assert_eq!(rule(&grade(&one), 33), Points::ZERO);

    let wide_table = DeckBuilder::new().blank_slides(6).slide(SlideFixture::new().table(11, 3));
    assert_eq!(rule(&grade(&wide_table), 33), Points::ZERO);
}

#[test]
fn first_slide_rule_needs_a_shape() {
    let empty = grade(&DeckBuilder::new().blank_slides(7));
    assert_eq!(rule(&empty, 7), Points::ZERO);

    let with_picture = grade(&DeckBuilder::new().slide(SlideFixture::new().picture()));
    assert_eq!(rule(&with_picture, 7), Points::from_tenths(14));
}

#[test]
fn short_deck_falls_back_to_first_slide() {
    let deck = DeckBuilder::new().slide(SlideFixture::new().text("出版信息").table(11, 2)).build();

    let lenient = Evaluator::default().evaluate_bytes(&deck).unwrap();
    assert_eq!(rule(&lenient, 32), Points::from_tenths(5));
    assert_eq!(rule(&lenient, 33), Points::from_tenths(12));

    let strict = Evaluator::new(EvaluatorOptions::default().strict_slides(true))
        .evaluate_bytes(&deck)
        .unwrap();
    assert_eq!(rule(&strict, 32), Points::ZERO);
    assert_eq!(rule(&strict, 33), Points::ZERO);
}

#[test]
fn deck_without_slides_still_produces_a_report() {
    let report = grade(&DeckBuilder::new());

    assert_eq!(report.rules.len(), RULE_COUNT);
    let failed: Vec<u8> = report.failed().map(|r| r.id).collect();
    // Rule 5 only looks at the slide size
    assert_eq!(failed, vec![1, 7, 32, 33]);
}

#[test]
fn garbage_input_is_a_parse_failure() {
    let err = Evaluator::default()
        .evaluate_bytes(b"PK\x03\x04 this is not really a zip")
        .unwrap_err();

    assert!(matches!(err, GradeError::Parse(_)));
    assert!(err.to_string().starts_with("文件解析失败: "));
}

#[test]
fn missing_file_is_a_parse_failure() {
    let dir = TempDir::new().unwrap();
    let err = Evaluator::default()
        .evaluate_path(dir.path().join("missing.pptx"))
        .unwrap_err();
    assert!(matches!(err, GradeError::Parse(_)));
}

#[test]
fn word_document_is_rejected() {
    let docx = model_answer().build_with_main_content_type(
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
    );
    let err = Deck::from_bytes(&docx).unwrap_err();

    assert!(matches!(err, GradeError::Parse(OoxmlError::InvalidContentType { .. })));
}

#[test]
fn utf16_slides_grade_like_utf8_slides() {
    let deck = model_answer().utf16_slides();
    let report = grade(&deck);

    assert_eq!(report, grade(&model_answer()));
    assert_eq!(report.total, Points::from_tenths(352));

    let snapshot = Deck::from_bytes(&deck.build()).unwrap();
    assert_eq!(snapshot.slides[6].texts().collect::<Vec<_>>(), vec!["出版信息"]);
}

#[test]
fn evaluate_path_and_reader_agree() {
    let dir = TempDir::new().unwrap();
    let deck = model_answer();
    let path = deck.write_to(dir.path(), "yswg.pptx");

    let from_path = Evaluator::default().evaluate_path(&path).unwrap();
    let from_reader = Evaluator::default()
        .evaluate_reader(Cursor::new(deck.build()))
        .unwrap();
    assert_eq!(from_path, from_reader);
}

#[test]
fn grading_is_deterministic() {
    let bytes = model_answer().slide(SlideFixture::new().text("extra")).build();
    let evaluator = Evaluator::default();

    let first = evaluator.evaluate_bytes(&bytes).unwrap();
    let second = evaluator.evaluate_bytes(&bytes).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn snapshot_reads_text_and_tables() {
    let deck = Deck::from_bytes(&model_answer().build()).unwrap();

    assert_eq!(deck.slide_count(), 7);
    let last = deck.slide(6).unwrap();
    assert_eq!(last.partname, "/ppt/slides/slide7.xml");
    assert_eq!(last.texts().collect::<Vec<_>>(), vec!["出版信息"]);

    let table = last.tables().next().unwrap();
    assert_eq!((table.rows, table.columns), (11, 2));
    assert_eq!(table.cells[7][1], "r7c1");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_random_bytes_never_grade(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let result = Evaluator::default().evaluate_bytes(&bytes);
        prop_assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        prop_assert!(message.len() > "文件解析失败: ".len());
    }

    #[test]
    fn prop_score_is_bounded(slides in 0usize..10, wide in any::<bool>(), title in "[a-z出版信息]{0,6}") {
        let mut deck = DeckBuilder::new().size(if wide { WIDE } else { STANDARD });
        for _ in 0..slides {
            deck = deck.slide(SlideFixture::new().text(&title));
        }
        let report = grade(&deck);

        prop_assert_eq!(report.rules.len(), RULE_COUNT);
        prop_assert!(report.total <= RUBRIC_TOTAL);
        prop_assert_eq!(report.total, report.rules.iter().map(|r| r.awarded_score).sum::<Points>());
        for r in &report.rules {
            prop_assert!(r.awarded_score == Points::ZERO || r.awarded_score == r.max_score);
        }
        prop_assert_eq!(report.rules[0].passed, slides == 7);
    }
}

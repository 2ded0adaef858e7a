// Extraction and shot classification tests.

use super::*;
use crate::model::ExamShot;
use chrono::{NaiveDate, NaiveDateTime};
use scraper::Html;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    ymd(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn extract_with(html: &str, tab: ActiveTab, language: Language) -> (Vec<Exam>, ExtractionStats) {
    let doc = Html::parse_document(html);
    let stats = ExtractionStats::new();
    let ctx = ExtractContext::new(tab, language);
    let exams = extract_exams(&doc.root_element(), &ctx, &stats);
    (exams, stats)
}

fn extract(html: &str, tab: ActiveTab) -> Vec<Exam> {
    extract_with(html, tab, Language::Italian).0
}

const ALGEBRA_DEFAULT: &str = r#"
<article>
  <a href="/exams/algebra">Details</a>
  <section>
    <div class="mb-1">Algebra</div>
    <div><i class="pmi pmi-line-check-circle"></i><span>12GEN2024</span></div>
    <div><i class="pmi pmi-line-circle"></i><span>15FEB2024</span></div>
  </section>
</article>"#;

#[test]
fn test_enrolled_follows_icon_class() {
    let exams = extract(ALGEBRA_DEFAULT, ActiveTab::Default);
    assert_eq!(exams.len(), 1);
    let exam = &exams[0];
    assert_eq!(exam.title, "Algebra");
    assert_eq!(exam.article_index, 0);
    assert_eq!(exam.shots.len(), 2);
    assert_eq!(exam.shots[0].date, ymd(2024, 1, 12));
    assert!(exam.shots[0].enrolled);
    assert_eq!(exam.shots[1].date, ymd(2024, 2, 15));
    assert!(!exam.shots[1].enrolled);
}

#[test]
fn test_default_tab_shot_without_region() {
    let exams = extract(ALGEBRA_DEFAULT, ActiveTab::Default);
    let shot = &exams[0].shots[0];
    assert!(!shot.awaiting_results);
    assert_eq!(shot.result, None);
    assert_eq!(shot.result_status, None);
    assert_eq!(shot.rejectable, None);
    assert_eq!(shot.rejection_deadline, None);
}

#[test]
fn test_article_url_is_first_link() {
    let exams = extract(ALGEBRA_DEFAULT, ActiveTab::Default);
    assert_eq!(exams[0].article_url.as_deref(), Some("/exams/algebra"));
}

#[test]
fn test_article_url_resolved_against_base() {
    let doc = Html::parse_document(ALGEBRA_DEFAULT);
    let stats = ExtractionStats::new();
    let base = Url::parse("https://portal.example.edu/students/home").unwrap();
    let ctx = ExtractContext::new(ActiveTab::Default, Language::English).with_base_url(Some(base));
    let exams = extract_exams(&doc.root_element(), &ctx, &stats);
    assert_eq!(
        exams[0].article_url.as_deref(),
        Some("https://portal.example.edu/exams/algebra")
    );
}

#[test]
fn test_card_without_title_is_dropped() {
    let html = r#"
    <article><section>
      <div class="mb-1">   </div>
      <div><i class="pmi pmi-line-check-circle"></i><span>12GEN2024</span></div>
    </section></article>"#;
    let (exams, stats) = extract_with(html, ActiveTab::Default, Language::Italian);
    assert!(exams.is_empty());
    assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);
}

#[test]
fn test_card_without_parseable_dates_is_dropped() {
    let html = r#"
    <article><section>
      <div class="mb-1">Chimica</div>
      <div><i class="pmi pmi-line-check-circle"></i><span>da definire</span></div>
      <div><i class="pmi"></i><span>32GEN2024</span></div>
    </section></article>"#;
    let (exams, stats) = extract_with(html, ActiveTab::Default, Language::Italian);
    assert!(exams.is_empty());
    assert_eq!(stats.get_warning_count(WarningType::UnparseableDate), 2);
    assert_eq!(stats.get_warning_count(WarningType::NoParseableDates), 1);
}

#[test]
fn test_article_index_counts_dropped_cards() {
    let html = format!(
        r#"{ALGEBRA_DEFAULT}
        <article><section><div class="mb-1"></div></section></article>
        <article><section>
          <div class="mb-1">Geometria</div>
          <div><i class="pmi"></i><span>3MAR2024</span></div>
        </section></article>"#
    );
    let exams = extract(&html, ActiveTab::Default);
    assert_eq!(exams.len(), 2);
    assert_eq!(exams[0].article_index, 0);
    assert_eq!(exams[1].title, "Geometria");
    assert_eq!(exams[1].article_index, 2);
}

#[test]
fn test_fewer_icons_than_dates_is_tolerated() {
    let html = r#"
    <article><section>
      <div class="mb-1">Statistica</div>
      <div><i class="pmi pmi-line-check-circle"></i><span>12GEN2024</span></div>
      <div><span>19GEN2024</span></div>
    </section></article>"#;
    let (exams, stats) = extract_with(html, ActiveTab::Default, Language::Italian);
    assert_eq!(exams[0].shots.len(), 2);
    assert!(exams[0].shots[0].enrolled);
    assert!(!exams[0].shots[1].enrolled);
    assert_eq!(stats.get_warning_count(WarningType::IconCountMismatch), 1);
}

#[test]
fn test_default_tab_reads_following_result_region() {
    let html = r#"
    <article><section>
      <div class="mb-1">Informatica</div>
      <div><i class="pmi pmi-line-check-circle"></i><span>12GEN2024</span></div>
      <div class="result-info"><span class="big-text">28</span><span class="result-status">Pubblicato</span></div>
    </section></article>"#;
    let exams = extract(html, ActiveTab::Default);
    assert_eq!(exams[0].shots.len(), 1);
    let shot = &exams[0].shots[0];
    assert_eq!(shot.result, Some(28));
    assert_eq!(shot.result_status.as_deref(), Some("Pubblicato"));
    assert_eq!(shot.rejectable, Some(false));
    assert!(!shot.awaiting_results);
    // Deadlines are only looked up on the enrollments and results tabs
    assert_eq!(shot.rejection_deadline, None);
}

const ANALISI_ENROLLMENTS: &str = r#"
<article><section>
  <div class="mb-1">Analisi 1</div>
  <div class="exam-shot">
    <div class="shot-date"><i class="pmi pmi-line-check-circle"></i><span class="date">12GEN2024</span><span class="p-chip">In attesa di esito</span></div>
  </div>
  <div class="exam-shot">
    <div class="shot-date"><i class="pmi pmi-line-check-circle"></i><span class="date">20FEB2024</span><span class="p-chip">In attesa di esito</span></div>
    <div class="result-info"><span class="big-text">27</span><span class="result-status">Valutato</span><span>Rifiutabile entro il 27FEB2024 23:59</span></div>
  </div>
  <div class="exam-shot">
    <div class="shot-date"><i class="pmi pmi-line-circle"></i><span class="date">15GIU2024</span><span class="p-chip">Iscrizioni aperte</span></div>
  </div>
</section></article>"#;

#[test]
fn test_enrollments_chip_sets_awaiting() {
    let exams = extract(ANALISI_ENROLLMENTS, ActiveTab::Enrollments);
    let shot = &exams[0].shots[0];
    assert_eq!(shot.date, ymd(2024, 1, 12));
    assert!(shot.enrolled);
    assert!(shot.awaiting_results);
    assert_eq!(shot.result, None);
    assert_eq!(shot.rejection_deadline, None);
}

#[test]
fn test_enrollments_rejectable_result_overrides_chip() {
    let exams = extract(ANALISI_ENROLLMENTS, ActiveTab::Enrollments);
    let shot = &exams[0].shots[1];
    assert_eq!(shot.date, ymd(2024, 2, 20));
    assert_eq!(shot.result, Some(27));
    assert_eq!(shot.rejectable, Some(true));
    assert_eq!(shot.result_status.as_deref(), Some("Valutato"));
    assert!(!shot.awaiting_results);
    assert_eq!(shot.rejection_deadline, Some(at(2024, 2, 27, 23, 59)));
}

#[test]
fn test_enrollments_chip_without_awaiting_text() {
    let exams = extract(ANALISI_ENROLLMENTS, ActiveTab::Enrollments);
    let shot = &exams[0].shots[2];
    assert!(!shot.enrolled);
    assert!(!shot.awaiting_results);
}

#[test]
fn test_enrollments_english_chip() {
    let html = r#"
    <article><section>
      <div class="mb-1">Calculus</div>
      <div class="exam-shot">
        <div class="shot-date"><i class="pmi pmi-line-check-circle"></i><span class="date">12JAN2024</span><span class="p-chip">Awaiting result</span></div>
      </div>
    </section></article>"#;
    let (exams, _) = extract_with(html, ActiveTab::Enrollments, Language::English);
    assert!(exams[0].shots[0].awaiting_results);
}

#[test]
fn test_enrollments_region_requires_marker_class() {
    let html = r#"
    <article><section>
      <div class="mb-1">Fisica</div>
      <div class="exam-shot">
        <div class="shot-date"><span class="date">12GEN2024</span></div>
        <div class="notes"><span class="big-text">30</span></div>
      </div>
    </section></article>"#;
    let (exams, stats) = extract_with(html, ActiveTab::Enrollments, Language::Italian);
    assert_eq!(exams[0].shots[0].result, None);
    assert_eq!(exams[0].shots[0].rejectable, None);
    assert_eq!(stats.get_warning_count(WarningType::MissingResultRegion), 1);
}

#[test]
fn test_enrollments_undated_session_ignores_region_dates() {
    let html = r#"
    <article><section>
      <div class="mb-1">Meccanica</div>
      <div class="exam-shot">
        <div class="shot-date"><i class="pmi pmi-line-check-circle"></i><span class="date">data da definire</span></div>
        <div class="result-info"><span class="big-text">26</span><span>Rifiutabile entro il 27FEB2024 23:59</span></div>
      </div>
    </section></article>"#;
    let (exams, stats) = extract_with(html, ActiveTab::Enrollments, Language::Italian);
    assert!(exams.is_empty());
    assert_eq!(stats.get_warning_count(WarningType::UnparseableDate), 1);
    assert_eq!(stats.get_warning_count(WarningType::NoParseableDates), 1);
}

#[test]
fn test_enrollments_session_time_is_not_a_deadline() {
    let html = r#"
    <article><section>
      <div class="mb-1">Meccanica</div>
      <div class="exam-shot">
        <div class="shot-date"><i class="pmi pmi-line-check-circle"></i><span class="date">20FEB2024 09:30</span></div>
        <div class="result-info"><span class="big-text">26</span><span>Rifiutabile entro il 27FEB2024 23:59</span></div>
      </div>
      <div class="exam-shot">
        <div class="shot-date"><i class="pmi pmi-line-check-circle"></i><span class="date">18MAR2024 14:00</span></div>
        <div class="result-info"><span class="big-text">22</span><span class="result-status">Valutato</span></div>
      </div>
    </section></article>"#;
    let exams = extract(html, ActiveTab::Enrollments);
    let shots = &exams[0].shots;
    assert_eq!(shots[0].date, ymd(2024, 2, 20));
    assert_eq!(shots[0].rejection_deadline, Some(at(2024, 2, 27, 23, 59)));
    assert_eq!(shots[1].date, ymd(2024, 3, 18));
    assert_eq!(shots[1].result, Some(22));
    assert_eq!(shots[1].rejection_deadline, None);
}

const FISICA_RESULTS: &str = r#"
<article><section>
  <div class="exam-title">Fisica</div>
  <div class="result-row">
    <div class="date-cell"><span class="date">10GEN2024</span></div>
    <div class="result-info"><span class="big-text">25</span><span class="result-status">Pubblicato</span><span>Rifiutabile entro 17GEN2024 12:00</span></div>
  </div>
  <div class="result-row">
    <div class="date-cell"><span class="date">05FEB2024</span></div>
    <div class="result-info"><span class="big-text">--</span><span class="result-status">In attesa</span></div>
  </div>
  <div class="result-row">
    <div class="date-cell"><span class="date">06MAR2024</span></div>
    <div class="result-info"><span class="big-text">24</span><span class="result-status">Verbalizzando</span><span>Rifiutabile</span></div>
  </div>
</section></article>"#;

#[test]
fn test_results_published_clears_awaiting() {
    let exams = extract(FISICA_RESULTS, ActiveTab::Results);
    let shot = &exams[0].shots[0];
    assert_eq!(shot.result, Some(25));
    assert_eq!(shot.rejectable, Some(true));
    assert!(!shot.awaiting_results);
    assert_eq!(shot.rejection_deadline, Some(at(2024, 1, 17, 12, 0)));
}

#[test]
fn test_results_seed_awaiting_without_publication() {
    let (exams, stats) = extract_with(FISICA_RESULTS, ActiveTab::Results, Language::Italian);
    let shot = &exams[0].shots[1];
    assert!(shot.awaiting_results);
    assert_eq!(shot.result, None);
    assert_eq!(shot.rejectable, Some(false));
    assert_eq!(shot.result_status.as_deref(), Some("In attesa"));
    assert_eq!(shot.rejection_deadline, None);
    assert_eq!(stats.get_warning_count(WarningType::NonNumericResult), 1);
}

#[test]
fn test_rejectable_override_only_applies_on_enrollments_tab() {
    // Results tab: result + rejectable without "published" keeps the seed.
    let exams = extract(FISICA_RESULTS, ActiveTab::Results);
    let shot = &exams[0].shots[2];
    assert_eq!(shot.result, Some(24));
    assert_eq!(shot.rejectable, Some(true));
    assert!(shot.awaiting_results);

    // Enrollments tab: the same signals clear a chip-derived awaiting flag.
    let html = r#"
    <article><section>
      <div class="mb-1">Fisica</div>
      <div class="exam-shot">
        <div class="shot-date"><span class="date">06MAR2024</span><span class="p-chip">In attesa di esito</span></div>
        <div class="result-info"><span class="big-text">24</span><span class="result-status">Verbalizzando</span><span>Rifiutabile</span></div>
      </div>
    </section></article>"#;
    let exams = extract(html, ActiveTab::Enrollments);
    assert!(!exams[0].shots[0].awaiting_results);
}

#[test]
fn test_results_tab_english_page() {
    let html = r#"
    <article><section>
      <div class="exam-title">Physics</div>
      <div class="result-row">
        <div class="date-cell"><span class="date">10JAN2024</span></div>
        <div class="result-info"><span class="big-text">30L</span><span class="result-status">Published</span><span>Rejectable until 17JAN2024 12:00</span></div>
      </div>
    </section></article>"#;
    let (exams, _) = extract_with(html, ActiveTab::Results, Language::English);
    let shot = &exams[0].shots[0];
    assert_eq!(shot.result, Some(30));
    assert_eq!(shot.rejectable, Some(true));
    assert!(!shot.awaiting_results);
    assert_eq!(shot.rejection_deadline, Some(at(2024, 1, 17, 12, 0)));
}

#[test]
fn test_extraction_is_idempotent() {
    let doc = Html::parse_document(ANALISI_ENROLLMENTS);
    let ctx = ExtractContext::new(ActiveTab::Enrollments, Language::Italian);
    let first = extract_exams(&doc.root_element(), &ctx, &ExtractionStats::new());
    let second = extract_exams(&doc.root_element(), &ctx, &ExtractionStats::new());
    assert_eq!(first, second);
}

#[test]
fn test_classify_shot_missing_icon_is_not_enrolled() {
    let doc = Html::parse_document(ALGEBRA_DEFAULT);
    let ctx = ExtractContext::new(ActiveTab::Default, Language::Italian);
    let date_el = doc
        .root_element()
        .select_first("section > div:not(:first-child)")
        .unwrap();
    let shot = classify_shot(&ctx, &ExtractionStats::new(), 5, ymd(2024, 1, 12), &date_el, &[]);
    assert_eq!(shot, ExamShot::on(ymd(2024, 1, 12)));
}

#[test]
fn test_extract_page_requires_active_panel() {
    let stats = ExtractionStats::new();
    let loading = Page::parse("<html><body><div class=\"spinner\"></div></body></html>");
    assert!(extract_page(&loading, None, &stats).is_none());

    let ready = Page::parse(&format!(
        r#"<html><body>
          <ul class="p-tabview-nav"><li>Iscrizioni</li><li class="p-highlight">Storico</li><li>Esiti</li></ul>
          <div class="p-tabview-panel">{ALGEBRA_DEFAULT}</div>
        </body></html>"#
    ));
    let extraction = extract_page(&ready, None, &stats).unwrap();
    assert_eq!(extraction.tab, ActiveTab::Default);
    assert_eq!(extraction.language, Language::Italian);
    assert_eq!(extraction.exams.len(), 1);
}

#[test]
fn test_results_session_time_is_not_a_deadline() {
    let html = r#"
    <article><section>
      <div class="exam-title">Fisica</div>
      <div class="result-row">
        <div class="date-cell"><span class="date">10GEN2024 14:00</span></div>
        <div class="result-info"><span class="big-text">25</span><span>Rifiutabile entro 17GEN2024 12:00</span></div>
      </div>
      <div class="result-row">
        <div class="date-cell"><span class="date">05FEB2024 09:00</span></div>
        <div class="result-info"><span class="result-status">In attesa</span></div>
      </div>
    </section></article>"#;
    let exams = extract(html, ActiveTab::Results);
    let shots = &exams[0].shots;
    assert_eq!(shots[0].date, ymd(2024, 1, 10));
    assert_eq!(shots[0].rejection_deadline, Some(at(2024, 1, 17, 12, 0)));
    assert_eq!(shots[1].date, ymd(2024, 2, 5));
    assert_eq!(shots[1].rejection_deadline, None);
}

//! Competitive ranking over a batch of verdicts.
//!
//! Pure: consumes the raw batch and returns a fresh ordered report, so
//! the service payload and the displayed state never alias.

use crate::judge::types::{CompetitionPayload, CompetitionReport, Medal, RankedVerdict};

/// Order a batch by score and assign positions and distinctions.
///
/// The sort is stable and descending on score; entries without a score
/// order as zero but keep their absent score for display. Tied entries
/// keep submission order and still receive strictly increasing
/// positions. Entries the service flagged with a per-item error are
/// excluded from the ranking and carried separately. The synthesis is
/// passed through verbatim; in particular the mean score is never
/// recomputed here.
pub fn rank(payload: CompetitionPayload) -> CompetitionReport {
    let CompetitionPayload { entries, synthesis } = payload;

    let (mut ranked, failed): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|v| v.error.is_none());

    ranked.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));

    let rankings = ranked
        .into_iter()
        .enumerate()
        .map(|(index, verdict)| {
            let position = index + 1;
            RankedVerdict {
                verdict,
                position,
                medal: Medal::for_position(position),
            }
        })
        .collect();

    CompetitionReport {
        rankings,
        synthesis,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::types::{CompetitionSynthesis, Verdict};

    fn entry(name: &str, score: Option<f64>) -> Verdict {
        Verdict {
            content_name: Some(name.to_string()),
            score,
            max_score: None,
            feedback: None,
            strengths: Vec::new(),
            improvements: Vec::new(),
            summary: None,
            error: None,
        }
    }

    fn batch(entries: Vec<Verdict>) -> CompetitionPayload {
        CompetitionPayload {
            entries,
            synthesis: CompetitionSynthesis::default(),
        }
    }

    fn names(report: &CompetitionReport) -> Vec<&str> {
        report
            .rankings
            .iter()
            .map(|r| r.verdict.content_name.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn test_descending_order_with_tie_kept_in_submission_order() {
        // B and C tie at 95; B was submitted before C
        let report = rank(batch(vec![
            entry("A", Some(70.0)),
            entry("B", Some(95.0)),
            entry("C", Some(95.0)),
        ]));

        assert_eq!(names(&report), vec!["B", "C", "A"]);
        let positions: Vec<usize> = report.rankings.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(report.rankings[0].medal, Some(Medal::Gold));
        assert_eq!(report.rankings[1].medal, Some(Medal::Silver));
        assert_eq!(report.rankings[2].medal, Some(Medal::Bronze));
    }

    #[test]
    fn test_positions_are_a_permutation_with_max_first() {
        let report = rank(batch(vec![
            entry("A", Some(10.0)),
            entry("B", Some(40.0)),
            entry("C", Some(30.0)),
            entry("D", Some(20.0)),
        ]));

        assert_eq!(names(&report), vec!["B", "C", "D", "A"]);
        let positions: Vec<usize> = report.rankings.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_medals_stop_at_batch_size() {
        let report = rank(batch(vec![entry("A", Some(50.0)), entry("B", Some(60.0))]));
        assert_eq!(report.rankings[0].medal, Some(Medal::Gold));
        assert_eq!(report.rankings[1].medal, Some(Medal::Silver));
    }

    #[test]
    fn test_no_medal_past_third_place() {
        let report = rank(batch(
            (0..5).map(|i| entry(&format!("F{i}"), Some(i as f64))).collect(),
        ));
        assert!(report.rankings[3].medal.is_none());
        assert!(report.rankings[4].medal.is_none());
    }

    #[test]
    fn test_absent_score_orders_as_zero_but_stays_absent() {
        let report = rank(batch(vec![
            entry("sem-nota", None),
            entry("com-nota", Some(5.0)),
        ]));

        assert_eq!(names(&report), vec!["com-nota", "sem-nota"]);
        assert_eq!(report.rankings[1].verdict.score, None);
    }

    #[test]
    fn test_erroneous_entries_are_excluded_from_ranking() {
        let mut bad = entry("quebrado", Some(99.0));
        bad.error = Some("análise falhou".to_string());

        let report = rank(batch(vec![entry("ok", Some(50.0)), bad]));

        assert_eq!(names(&report), vec!["ok"]);
        assert_eq!(report.rankings[0].position, 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].content_name.as_deref(), Some("quebrado"));
    }

    #[test]
    fn test_empty_batch_produces_empty_report() {
        let report = rank(batch(Vec::new()));
        assert!(report.rankings.is_empty());
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_synthesis_passes_through_verbatim() {
        let payload = CompetitionPayload {
            entries: vec![entry("A", Some(80.0))],
            synthesis: CompetitionSynthesis {
                mean_score: None,
                overall_verdict: Some("Sólido".to_string()),
                recommendation: Some("Publicar".to_string()),
                error: None,
            },
        };

        let report = rank(payload);
        // An absent mean stays absent; no client-side average
        assert_eq!(report.synthesis.mean_score, None);
        assert_eq!(report.synthesis.overall_verdict.as_deref(), Some("Sólido"));
    }
}

use serde::{Deserialize, Serialize};

/// One axis of the radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub subject: String,
    /// 0-100, as scored upstream.
    pub value: f64,
    /// Always 100 after normalization.
    pub full_mark: f64,
}

/// Structured result of one evaluation.
///
/// Both the success and the fallback paths produce this exact shape, so
/// session and history code only ever handle one kind of report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// 0-100 overall score.
    pub score: i64,
    pub tier: String,
    pub rank_title: String,
    /// 0-99, "beat this share of peers".
    pub percentile: i64,
    /// Neutral narrative.
    pub analysis: String,
    /// Acerbic narrative.
    pub sharp_analysis: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Exactly five entries in canonical dimension order.
    pub radar_data: Vec<RadarPoint>,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes_from_camel_case() {
        let json = r#"{
            "score": 72,
            "tier": "钻石打工人",
            "rankTitle": "还算体面",
            "percentile": 81,
            "analysis": "总体均衡。",
            "sharpAnalysis": "也就那样。",
            "pros": ["薪资尚可"],
            "cons": ["通勤太长"],
            "radarData": [
                { "subject": "薪资待遇", "value": 70, "fullMark": 100 }
            ],
            "suggestions": ["搬家"]
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.score, 72);
        assert_eq!(report.rank_title, "还算体面");
        assert_eq!(report.sharp_analysis, "也就那样。");
        assert_eq!(report.radar_data[0].full_mark, 100.0);
    }

    #[test]
    fn test_report_missing_score_is_rejected() {
        let json = r#"{
            "tier": "青铜搬砖工",
            "rankTitle": "勉强糊口",
            "percentile": 10,
            "analysis": "",
            "sharpAnalysis": "",
            "pros": [],
            "cons": [],
            "radarData": [],
            "suggestions": []
        }"#;
        assert!(serde_json::from_str::<AnalysisReport>(json).is_err());
    }
}

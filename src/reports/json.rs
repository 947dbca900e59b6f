use crate::facts::FactSet;
use crate::membership::ReferenceMonth;
use crate::ranking::EvaluationResult;
use crate::recommendations::{Recommendation, RecommendationCategory, build_recommendations};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    reference_month: ReferenceMonth,
    facts: &'a FactSet,
    evaluation: &'a EvaluationResult,
    rating: f64,
    score_out_of_ten: f64,
    recommendations: Vec<JsonRecommendation>,
}

#[derive(Debug, Serialize)]
struct JsonRecommendation {
    category: RecommendationCategory,
    detail: Recommendation,
    message: String,
}

/// Render an evaluation as pretty-printed JSON.
pub fn generate(facts: &FactSet, reference: ReferenceMonth, result: &EvaluationResult, out: &mut impl Write) -> io::Result<()> {
    let report = JsonReport {
        reference_month: reference,
        facts,
        evaluation: result,
        rating: result.rating(),
        score_out_of_ten: result.score_out_of_ten(),
        recommendations: build_recommendations(result)
            .map(|recommendation| JsonRecommendation {
                category: recommendation.category(),
                detail: recommendation,
                message: recommendation.to_string(),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

//! Three-criterion scoring of ranked alternatives.
//!
//! The cost score is deterministic, from the policy's reduction-percentage
//! table. Functional/design scores come from the pluggable [`Judge`]; judge
//! calls for distinct (material, alternative) pairs are independent and run
//! concurrently under a semaphore bound, each with an explicit deadline. A
//! failed or timed-out call falls back to the deterministic heuristic — judge
//! failure is never surfaced from this stage.
//!
//! Fixed rules need no judge at all:
//!
//! - rank 0 is always `(5, 5, 1)`
//! - appliance substitutes are the same unit at a negotiated price: `(5, 5)`
//!   with the cost score from the table (the 10% bucket under default policy)

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::constants::appliance;
use crate::config::PolicyConfig;
use crate::error::ScoreError;
use crate::judge::{HeuristicJudge, Judge};
use crate::types::{Alternative, Assessment, Category, Score};

/// Score every ranked alternative.
///
/// Output is sorted by `(material_id, rank)` so repeated runs over identical
/// inputs are byte-identical.
///
/// # Errors
///
/// Only invariant violations surface: a material without a rank-0 baseline,
/// or a dispatch task that fails to complete. Judge failures are recovered
/// locally.
pub async fn score_all(
    alternatives: &[Alternative],
    judge: Arc<dyn Judge>,
    policy: &PolicyConfig,
) -> Result<Vec<Score>, ScoreError> {
    let mut by_material: BTreeMap<&str, Vec<&Alternative>> = BTreeMap::new();
    for alt in alternatives {
        by_material.entry(&alt.material_id).or_default().push(alt);
    }

    let semaphore = Arc::new(Semaphore::new(policy.dispatch.max_concurrency));
    let call_timeout = Duration::from_millis(policy.dispatch.call_timeout_ms);
    let mut scores: Vec<Score> = Vec::new();
    let mut tasks: JoinSet<Score> = JoinSet::new();

    for (material_id, ranked) in &by_material {
        let baseline = ranked
            .iter()
            .find(|alt| alt.is_baseline())
            .ok_or_else(|| ScoreError::MissingBaseline {
                material_id: material_id.to_string(),
            })?;

        scores.push(Score::baseline(baseline.material_id.clone()));

        for alt in ranked.iter().filter(|alt| !alt.is_baseline()) {
            let cost = policy.cost_score.score(alt.cost_reduction_pct);

            if alt.category == Category::Appliance {
                // Same unit, negotiated price: function and design preserved.
                scores.push(Score::substitute(
                    alt.material_id.clone(),
                    alt.rank,
                    Assessment::fixed(appliance::FUNCTIONAL, appliance::DESIGN),
                    cost,
                ));
                continue;
            }

            let judge = Arc::clone(&judge);
            let semaphore = Arc::clone(&semaphore);
            let material_id = alt.material_id.clone();
            let rank = alt.rank;
            let original = baseline.description.clone();
            let alternative = alt.description.clone();

            tasks.spawn(async move {
                // The semaphore lives for the whole run; acquisition only
                // fails if it is closed, which never happens here.
                let _permit = semaphore.acquire_owned().await.ok();
                let assessment = assess_with_fallback(
                    judge.as_ref(),
                    &original,
                    &alternative,
                    call_timeout,
                )
                .await;
                Score::substitute(material_id, rank, assessment, cost)
            });
        }
    }

    while let Some(joined) = tasks.join_next().await {
        let score = joined.map_err(|err| ScoreError::DispatchFailed(err.to_string()))?;
        scores.push(score);
    }

    scores.sort_by(|a, b| a.material_id.cmp(&b.material_id).then(a.rank.cmp(&b.rank)));
    debug!(total = scores.len(), "scored alternatives");
    Ok(scores)
}

/// One judge call with a deadline, recovering to the heuristic on any failure.
async fn assess_with_fallback(
    judge: &dyn Judge,
    original: &str,
    alternative: &str,
    call_timeout: Duration,
) -> Assessment {
    match tokio::time::timeout(call_timeout, judge.assess(original, alternative)).await {
        Ok(Ok(assessment)) => assessment,
        Ok(Err(err)) => {
            warn!(judge = judge.name(), %err, "judge call failed, using heuristic");
            HeuristicJudge::assess_descriptions(original, alternative)
        }
        Err(_) => {
            warn!(
                judge = judge.name(),
                timeout_ms = call_timeout.as_millis() as u64,
                "judge call timed out, using heuristic"
            );
            HeuristicJudge::assess_descriptions(original, alternative)
        }
    }
}

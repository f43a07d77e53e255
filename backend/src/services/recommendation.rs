//! Disruption recommendation engine.
//!
//! Given a disrupted train and a snapshot of nearby trains, produce a short
//! ranked list: one entry for the disrupted train (driven by the cause), then
//! up to two `Prioritize` and two `Proceed` entries for the trains arriving
//! closest in time. The engine is a pure function and never fails; malformed
//! times read as midnight and unknown causes fall into the generic delay rule.

use log::debug;

use crate::models::{Action, DisruptionRequest, Kpis, Recommendation, TrainSnapshot};

/// Neighbors recommended for prioritisation.
pub const PRIORITIZE_SLOTS: usize = 2;
/// Neighbors allowed to proceed, after the prioritised ones.
pub const PROCEED_SLOTS: usize = 2;
/// Upper bound on the length of any result.
pub const MAX_RECOMMENDATIONS: usize = 1 + PRIORITIZE_SLOTS + PROCEED_SLOTS;

/// Build the recommendation list for one disruption.
pub fn recommend(request: &DisruptionRequest) -> Vec<Recommendation> {
    let Some(disrupted) = request.disrupted_train() else {
        debug!(
            "disruption train {} not among {} trains",
            request.disruption_train_id,
            request.trains.len()
        );
        return vec![Recommendation::not_found(request.disruption_train_id)];
    };

    let cause = request.classified_cause();
    let mut recommendations = Vec::with_capacity(MAX_RECOMMENDATIONS);
    recommendations.push(Recommendation::for_train(
        disrupted,
        cause.action(),
        cause.explain(disrupted),
        cause.kpis(),
    ));

    let ranked = rank_neighbors(disrupted, &request.trains);
    recommendations.extend(
        ranked
            .iter()
            .take(PRIORITIZE_SLOTS)
            .map(|train| prioritize(train)),
    );
    recommendations.extend(
        ranked
            .iter()
            .skip(PRIORITIZE_SLOTS)
            .take(PROCEED_SLOTS)
            .map(|train| proceed(train)),
    );

    debug!(
        "train {} ({:?}): {} recommendations from {} neighbors",
        disrupted.train_number,
        cause,
        recommendations.len(),
        ranked.len()
    );
    recommendations
}

/// Every train other than the disrupted one, nearest arrival first.
///
/// The sort is stable, so trains at equal distance keep their snapshot order.
pub fn rank_neighbors<'a>(
    disrupted: &TrainSnapshot,
    trains: &'a [TrainSnapshot],
) -> Vec<&'a TrainSnapshot> {
    let origin = disrupted.arrival_minutes();
    let mut neighbors: Vec<(&TrainSnapshot, u64)> = trains
        .iter()
        .filter(|t| t.train_number != disrupted.train_number)
        .map(|t| (t, t.arrival_minutes().distance(origin)))
        .collect();
    neighbors.sort_by_key(|&(_, distance)| distance);
    neighbors.into_iter().map(|(train, _)| train).collect()
}

fn prioritize(train: &TrainSnapshot) -> Recommendation {
    let text = format!(
        "AI recommends prioritizing {} ({}) arriving at {}.",
        train.name, train.train_number, train.arrival_time
    );
    Recommendation::for_train(train, Action::Prioritize, text, Kpis::prioritized())
}

fn proceed(train: &TrainSnapshot) -> Recommendation {
    let text = format!(
        "AI suggests allowing {} ({}) to proceed as scheduled.",
        train.name, train.train_number
    );
    Recommendation::for_train(train, Action::Proceed, text, Kpis::proceeding())
}

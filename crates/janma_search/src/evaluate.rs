//! Per-instant evaluation: chart quantities, the mandatory gate, optional
//! trait/event scoring and the composite score.

use chrono::NaiveDateTime;
use janma_config::CompositeWeights;
use janma_ephem::EphemerisGateway;
use janma_time::{IshtaKala, local_to_jd};
use janma_vedic_base::{
    EventScores, Graha, GrahaLongitudes, NatalChart, NishekaResult, Rashi, RectificationFilter,
    SpecialLagnaSet, TraitScores, VerificationScores, madhya_pranapada, nisheka, score_traits,
    special_lagnas, sphuta_pranapada,
};
use tracing::{debug, trace};

use crate::daily::DailyContext;
use crate::error::SearchError;
use crate::search_types::{Candidate, GeoTime, SearchRequest};

/// Score given to a passed trine rule in the composite.
const TRINE_PASS_SCORE: f64 = 100.0;

/// Quantities derived at one instant, before any rule is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantChart {
    pub time: NaiveDateTime,
    pub jd_ut: f64,
    pub lagna: f64,
    pub planets: GrahaLongitudes,
    pub ishta: IshtaKala,
    pub madhya_pranapada: f64,
    pub sphuta_pranapada: f64,
    pub gulika: f64,
    pub is_daytime: bool,
    pub special_lagnas: SpecialLagnaSet,
    pub nisheka: NishekaResult,
}

impl InstantChart {
    /// Query the gateway at `moment` and derive every BPHS quantity.
    pub fn compute<G: EphemerisGateway + ?Sized>(
        gateway: &G,
        geo: &GeoTime,
        daily: &DailyContext,
        moment: NaiveDateTime,
    ) -> Result<Self, SearchError> {
        let jd_ut = local_to_jd(moment, geo.utc_offset_hours);
        let lagna = gateway.ascendant_longitude(jd_ut, &geo.location)?;
        let planets = gateway.planet_longitudes(jd_ut)?;
        let sun = planets.longitude(Graha::Surya);

        let ishta = IshtaKala::between(moment, daily.sunrise);
        let is_daytime = daily.is_daytime(moment);
        let gulika = daily.gulika_at(moment);

        Ok(Self {
            time: moment,
            jd_ut,
            lagna,
            planets,
            ishta,
            madhya_pranapada: madhya_pranapada(ishta.ghatis, ishta.palas),
            sphuta_pranapada: sphuta_pranapada(ishta.total_palas, sun),
            gulika,
            is_daytime,
            special_lagnas: special_lagnas(&ishta, sun, lagna),
            nisheka: nisheka(planets.longitude(Graha::Shani), gulika, lagna),
        })
    }

    /// Run the rectification gate on this chart.
    pub fn verify(&self, filter: &RectificationFilter) -> VerificationScores {
        filter.evaluate(
            self.lagna,
            self.sphuta_pranapada,
            self.gulika,
            self.planets.longitude(Graha::Chandra),
        )
    }
}

/// Weighted composite on a 0–100 scale (for weights summing to one).
///
/// Missing trait or event scores contribute zero.
pub fn composite_score(
    weights: &CompositeWeights,
    verification: &VerificationScores,
    traits: Option<&TraitScores>,
    events: Option<&EventScores>,
    nisheka: &NishekaResult,
) -> f64 {
    let trine = if verification.passes_trine_rule {
        TRINE_PASS_SCORE
    } else {
        0.0
    };
    weights.degree_match * verification.degree_match
        + weights.trine * trine
        + weights.verification * verification.combined_verification
        + weights.traits * traits.map_or(0.0, |t| t.overall)
        + weights.events * events.map_or(0.0, |e| e.overall)
        + weights.nisheka * nisheka.plausibility_score
}

/// Evaluate one instant. `Ok(None)` means the instant failed the gate.
pub fn evaluate_instant<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    request: &SearchRequest,
    daily: &DailyContext,
    filter: &RectificationFilter,
    weights: &CompositeWeights,
    moment: NaiveDateTime,
) -> Result<Option<Candidate>, SearchError> {
    let chart = InstantChart::compute(gateway, &request.geo, daily, moment)?;
    let verification = chart.verify(filter);

    if !verification.accepted() {
        trace!(
            %moment,
            lagna = chart.lagna,
            pranapada = chart.sphuta_pranapada,
            trine = verification.passes_trine_rule,
            combined = verification.combined_verification,
            "rejected"
        );
        return Ok(None);
    }

    let traits = request
        .traits
        .as_ref()
        .filter(|t| !t.is_empty())
        .map(|t| score_traits(chart.lagna, &chart.planets, t));

    let events = match request.events.as_ref().filter(|e| !e.is_empty()) {
        Some(ev) => {
            let natal = NatalChart {
                birth_jd: chart.jd_ut,
                lagna: chart.lagna,
                grahas: &chart.planets,
            };
            Some(natal.score_events(ev)?)
        }
        None => None,
    };

    let composite = composite_score(
        weights,
        &verification,
        traits.as_ref(),
        events.as_ref(),
        &chart.nisheka,
    );

    debug!(
        %moment,
        lagna = chart.lagna,
        pranapada = chart.sphuta_pranapada,
        combined = verification.combined_verification,
        composite,
        "accepted"
    );

    Ok(Some(Candidate {
        time: chart.time,
        jd_ut: chart.jd_ut,
        lagna: chart.lagna,
        lagna_sign: Rashi::from_longitude(chart.lagna),
        pranapada: chart.sphuta_pranapada,
        madhya_pranapada: chart.madhya_pranapada,
        gulika: chart.gulika,
        is_daytime: chart.is_daytime,
        ishta: chart.ishta,
        planets: chart.planets,
        verification,
        special_lagnas: chart.special_lagnas,
        nisheka: chart.nisheka,
        traits,
        events,
        composite_score: composite,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(degree: f64, combined: f64, trine: bool) -> VerificationScores {
        VerificationScores {
            degree_match: degree,
            gulika_alignment: 0.0,
            moon_alignment: 0.0,
            combined_verification: combined,
            passes_trine_rule: trine,
            delta_to_pranapada: 0.0,
        }
    }

    fn nisheka_with(score: f64) -> NishekaResult {
        NishekaResult {
            conception_longitude: 0.0,
            gestation_months: 9.0,
            plausible: score == 100.0,
            plausibility_score: score,
        }
    }

    #[test]
    fn composite_all_perfect_is_100() {
        let t = TraitScores {
            overall: 100.0,
            ..Default::default()
        };
        let e = EventScores {
            overall: 100.0,
            ..Default::default()
        };
        let c = composite_score(
            &CompositeWeights::default(),
            &scores(100.0, 100.0, true),
            Some(&t),
            Some(&e),
            &nisheka_with(100.0),
        );
        assert!((c - 100.0).abs() < 1e-9, "c = {c}");
    }

    #[test]
    fn composite_without_traits_or_events_caps_at_60() {
        let c = composite_score(
            &CompositeWeights::default(),
            &scores(100.0, 100.0, true),
            None,
            None,
            &nisheka_with(100.0),
        );
        assert!((c - 60.0).abs() < 1e-9, "c = {c}");
    }

    #[test]
    fn composite_weights_each_part() {
        // 0.20*50 + 0.15*100 + 0.15*80 + 0.10*50
        let c = composite_score(
            &CompositeWeights::default(),
            &scores(50.0, 80.0, true),
            None,
            None,
            &nisheka_with(50.0),
        );
        assert!((c - 42.0).abs() < 1e-9, "c = {c}");
    }

    #[test]
    fn failed_trine_drops_its_share() {
        let pass = composite_score(
            &CompositeWeights::default(),
            &scores(0.0, 0.0, true),
            None,
            None,
            &nisheka_with(0.0),
        );
        let fail = composite_score(
            &CompositeWeights::default(),
            &scores(0.0, 0.0, false),
            None,
            None,
            &nisheka_with(0.0),
        );
        assert!((pass - 15.0).abs() < 1e-9);
        assert_eq!(fail, 0.0);
    }
}

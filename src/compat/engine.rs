//! Compatibility scoring engine.
//!
//! Pair tables are stored directionally; every read goes through this
//! engine so the direction swap happens in exactly one place. Best/worst
//! queries silently invert if the swap is duplicated ad hoc at call sites,
//! which is why no other module touches the pair repositories directly.

use std::cmp::Ordering;

use crate::catalog::ReferenceCatalog;
use crate::zodiac::{sign_distance, Element, Modality, Planet, Polarity, ZodiacSign};

use super::types::{PairInteraction, SignInteraction};

#[derive(Clone)]
pub struct CompatibilityEngine {
    catalog: ReferenceCatalog,
}

impl CompatibilityEngine {
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Put the queried entity in position 1.
    fn normalize_pair(record: PairInteraction, queried: &str) -> PairInteraction {
        if record.entity1.eq_ignore_ascii_case(queried) {
            record
        } else {
            record.swapped()
        }
    }

    fn normalize_sign(record: SignInteraction, queried: ZodiacSign) -> SignInteraction {
        if record.base.entity1.eq_ignore_ascii_case(queried.name()) {
            record
        } else {
            record.swapped()
        }
    }

    pub async fn element_interaction(&self, a: Element, b: Element) -> Option<PairInteraction> {
        self.catalog
            .element_interactions
            .find_by_pair(a.name(), b.name())
            .await
            .map(|r| Self::normalize_pair(r, a.name()))
    }

    pub async fn modality_interaction(&self, a: Modality, b: Modality) -> Option<PairInteraction> {
        self.catalog
            .modality_interactions
            .find_by_pair(a.name(), b.name())
            .await
            .map(|r| Self::normalize_pair(r, a.name()))
    }

    pub async fn polarity_interaction(&self, a: Polarity, b: Polarity) -> Option<PairInteraction> {
        self.catalog
            .polarity_interactions
            .find_by_pair(a.name(), b.name())
            .await
            .map(|r| Self::normalize_pair(r, a.name()))
    }

    pub async fn planet_interaction(&self, a: Planet, b: Planet) -> Option<PairInteraction> {
        self.catalog
            .planet_interactions
            .find_by_pair(a.name(), b.name())
            .await
            .map(|r| Self::normalize_pair(r, a.name()))
    }

    /// The stored sign-pair row, first entity normalized to `a`, with the
    /// distance recomputed as a consistency guard.
    pub async fn sign_interaction(&self, a: ZodiacSign, b: ZodiacSign) -> Option<SignInteraction> {
        self.catalog
            .sign_interactions
            .find_by_pair(a, b)
            .await
            .map(|r| {
                let mut row = Self::normalize_sign(r, a);
                row.distance = sign_distance(a, b);
                row
            })
    }

    /// Highest totalScore among rows with `sign` in position 1, ties broken
    /// by the closer sign.
    pub async fn best_interaction(&self, sign: ZodiacSign) -> Option<SignInteraction> {
        let mut rows = self.rows_for(sign).await;
        rows.sort_by(|x, y| {
            y.total_score
                .partial_cmp(&x.total_score)
                .unwrap_or(Ordering::Equal)
                .then(x.distance.cmp(&y.distance))
        });
        rows.into_iter().next()
    }

    /// Lowest totalScore, then the closer sign on a tie.
    pub async fn worst_interaction(&self, sign: ZodiacSign) -> Option<SignInteraction> {
        let mut rows = self.rows_for(sign).await;
        rows.sort_by(|x, y| {
            x.total_score
                .partial_cmp(&y.total_score)
                .unwrap_or(Ordering::Equal)
                .then(x.distance.cmp(&y.distance))
        });
        rows.into_iter().next()
    }

    async fn rows_for(&self, sign: ZodiacSign) -> Vec<SignInteraction> {
        self.catalog
            .sign_interactions
            .find_for_sign(sign)
            .await
            .into_iter()
            .map(|r| Self::normalize_sign(r, sign))
            .collect()
    }
}

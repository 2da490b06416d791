//! Skin and hair care advice keyed by gender and skin type.

use styleguru_core::catalog::CareAdvice;

use crate::keys::Gender;

fn advice(skin: &str, hair: &str) -> CareAdvice {
    CareAdvice {
        skin: skin.to_string(),
        hair: hair.to_string(),
    }
}

#[derive(Debug)]
struct GenderCare {
    oily: CareAdvice,
    dry: CareAdvice,
}

impl GenderCare {
    /// Unknown skin types resolve to the dry-skin advice.
    fn for_skin_type(&self, skin_type: &str) -> &CareAdvice {
        match skin_type {
            "Oily" => &self.oily,
            _ => &self.dry,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CareTable {
    male: GenderCare,
    female: GenderCare,
    other: GenderCare,
}

impl CareTable {
    pub(crate) fn build() -> Self {
        Self {
            male: GenderCare {
                oily: advice(
                    "a charcoal-based face wash, a light mattifying moisturizer, and a salicylic acid spot treatment.",
                    "a shampoo for oily scalp and consider using a sea salt spray for texture without weight.",
                ),
                dry: advice(
                    "a gentle, non-foaming cleanser, a hydrating moisturizer with SPF 30, and a weekly exfoliating scrub.",
                    "a moisturizing shampoo and a small amount of leave-in conditioner or beard oil.",
                ),
            },
            female: GenderCare {
                oily: advice(
                    "a gentle foaming cleanser, a lightweight oil-free moisturizer, and a clay mask to be used twice a week.",
                    "a clarifying shampoo to manage excess oil and a light conditioner for the ends.",
                ),
                dry: advice(
                    "a hydrating cream cleanser, a rich ceramide moisturizer, and a hyaluronic acid serum.",
                    "a sulfate-free moisturizing shampoo and a deep conditioning hair mask.",
                ),
            },
            other: GenderCare {
                oily: advice(
                    "a balanced gel cleanser and a non-comedogenic moisturizer.",
                    "a volume-boosting shampoo.",
                ),
                dry: advice(
                    "a soap-free cleansing bar and a simple, effective hydrating lotion.",
                    "a co-wash or cleansing conditioner.",
                ),
            },
        }
    }

    pub(crate) fn advice(&self, gender: Gender, skin_type: &str) -> &CareAdvice {
        let bucket = match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Other => &self.other,
        };
        bucket.for_skin_type(skin_type)
    }
}

use crate::{
    challenge::SavingsChallenge,
    model::{Member, Money},
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use rust_decimal::{Decimal, prelude::ToPrimitive};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantProgress {
    pub participant: Member,
    pub saved: Money,
    /// Fraction of the challenge target this participant contributed.
    pub fraction: Decimal,
}

/// How far a savings challenge is towards its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeProgress {
    pub saved: Money,
    /// Zero once the target is reached.
    pub remaining: Money,
    /// Saved total over target; above one when the group over-saves.
    pub fraction: Decimal,
    /// In participant order, including those with nothing saved yet.
    pub participants: Vec<ParticipantProgress>,
}

impl ChallengeProgress {
    pub fn of(challenge: &SavingsChallenge) -> Self {
        let target = challenge.target();

        let mut per_member: IndexMap<&Member, Money, FxBuildHasher> =
            IndexMap::with_capacity_and_hasher(
                challenge.participants().len(),
                FxBuildHasher::default(),
            );
        for participant in challenge.participants() {
            per_member.insert(participant, Money::ZERO);
        }
        // Each member's sum is bounded by the challenge total, which is checked
        // on every recorded milestone.
        for milestone in challenge.milestones() {
            if let Some(saved) = per_member.get_mut(&milestone.participant) {
                *saved += milestone.amount;
            }
        }

        let participants = per_member
            .into_iter()
            .map(|(participant, saved)| ParticipantProgress {
                participant: participant.clone(),
                saved,
                fraction: ratio(saved, target),
            })
            .collect();

        let saved = challenge.saved();
        let remaining = if saved >= target {
            Money::ZERO
        } else {
            target - saved
        };

        Self {
            saved,
            remaining,
            fraction: ratio(saved, target),
            participants,
        }
    }

    /// Whole percent complete, truncated (99.9% reads as 99).
    pub fn percent_complete(&self) -> u32 {
        self.fraction
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|percent| percent.trunc().to_u32())
            .unwrap_or(u32::MAX)
    }
}

fn ratio(saved: Money, target: Money) -> Decimal {
    if !target.is_positive() {
        return Decimal::ZERO;
    }
    saved
        .as_decimal()
        .checked_div(target.as_decimal())
        .unwrap_or(Decimal::MAX)
}

use crate::model::{Member, MemberNameError, Money, UnknownVariant};
use chrono::NaiveDate;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error("challenge title cannot be empty")]
    EmptyTitle,
    #[error("challenge target must be positive, got {0}")]
    NonPositiveTarget(Money),
    #[error("challenge ends on {end}, before it starts on {start}")]
    EndsBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("challenge needs at least one participant")]
    NoParticipants,
    #[error(transparent)]
    InvalidMember(#[from] MemberNameError),
    #[error("'{0}' is not taking part in this challenge")]
    NotParticipant(Member),
    #[error("milestone amount must be positive, got {0}")]
    NonPositiveMilestone(Money),
    #[error("challenge is already {0}")]
    Closed(ChallengeStatus),
    #[error("saved total would overflow")]
    Overflow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChallengeStatus {
    #[default]
    Active,
    Completed,
    Failed,
}

impl ChallengeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeStatus::Active => "active",
            ChallengeStatus::Completed => "completed",
            ChallengeStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ChallengeStatus::Active),
            "completed" => Ok(ChallengeStatus::Completed),
            "failed" => Ok(ChallengeStatus::Failed),
            _ => Err(UnknownVariant {
                kind: "challenge status",
                value: s.trim().to_owned(),
            }),
        }
    }
}

/// One contribution towards a challenge target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeMilestone {
    pub participant: Member,
    pub amount: Money,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl ChallengeMilestone {
    pub fn new(participant: Member, amount: Money, date: NaiveDate) -> Self {
        Self {
            participant,
            amount,
            date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A shared savings goal with a deadline.
///
/// The target is always positive and every recorded milestone belongs to a
/// participant, so the saved total never overflows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavingsChallenge {
    title: String,
    target: Money,
    start: NaiveDate,
    end: NaiveDate,
    creator: Member,
    participants: Vec<Member>,
    milestones: Vec<ChallengeMilestone>,
    saved: Money,
    status: ChallengeStatus,
}

impl SavingsChallenge {
    pub fn new<I, S>(
        title: &str,
        target: Money,
        (start, end): (NaiveDate, NaiveDate),
        creator: &str,
        participants: I,
    ) -> Result<Self, ChallengeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let title = title.trim();
        if title.is_empty() {
            return Err(ChallengeError::EmptyTitle);
        }
        if !target.is_positive() {
            return Err(ChallengeError::NonPositiveTarget(target));
        }
        if end < start {
            return Err(ChallengeError::EndsBeforeStart { start, end });
        }

        let mut roster: Vec<Member> = Vec::new();
        for name in participants {
            let member = Member::new(name)?;
            if !roster.contains(&member) {
                roster.push(member);
            }
        }
        if roster.is_empty() {
            return Err(ChallengeError::NoParticipants);
        }

        Ok(Self {
            title: title.to_owned(),
            target,
            start,
            end,
            creator: Member::new(creator)?,
            participants: roster,
            milestones: Vec::new(),
            saved: Money::ZERO,
            status: ChallengeStatus::Active,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target(&self) -> Money {
        self.target
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn creator(&self) -> &Member {
        &self.creator
    }

    pub fn participants(&self) -> &[Member] {
        &self.participants
    }

    pub fn milestones(&self) -> &[ChallengeMilestone] {
        &self.milestones
    }

    pub fn saved(&self) -> Money {
        self.saved
    }

    pub fn status(&self) -> ChallengeStatus {
        self.status
    }

    /// Records a contribution; reaching the target completes the challenge.
    pub fn record_milestone(
        &mut self,
        milestone: ChallengeMilestone,
    ) -> Result<ChallengeStatus, ChallengeError> {
        if self.status != ChallengeStatus::Active {
            return Err(ChallengeError::Closed(self.status));
        }
        if !self.participants.contains(&milestone.participant) {
            return Err(ChallengeError::NotParticipant(milestone.participant));
        }
        if !milestone.amount.is_positive() {
            return Err(ChallengeError::NonPositiveMilestone(milestone.amount));
        }

        self.saved = self
            .saved
            .checked_add(milestone.amount)
            .ok_or(ChallengeError::Overflow)?;
        self.milestones.push(milestone);
        if self.saved >= self.target {
            self.status = ChallengeStatus::Completed;
        }
        Ok(self.status)
    }

    /// Marks an active challenge as failed once `today` is past its end date.
    pub fn refresh_status(&mut self, today: NaiveDate) -> ChallengeStatus {
        if self.status == ChallengeStatus::Active && today > self.end {
            self.status = ChallengeStatus::Failed;
        }
        self.status
    }
}

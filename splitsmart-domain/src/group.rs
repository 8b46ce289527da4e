use crate::model::{Member, MemberNameError};
use thiserror::Error;

pub const MIN_GROUP_NAME_LEN: usize = 3;
pub const MAX_GROUP_NAME_LEN: usize = 30;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("group name cannot be empty")]
    EmptyName,
    #[error("group name must be at least 3 characters")]
    NameTooShort,
    #[error("group name must be at most 30 characters")]
    NameTooLong,
    #[error(transparent)]
    InvalidMember(#[from] MemberNameError),
    #[error("cannot remove the group creator '{0}'")]
    CannotRemoveCreator(Member),
    #[error("'{0}' is not a member of this group")]
    UnknownMember(String),
}

/// A named set of members sharing expenses.
///
/// The first member is the creator and cannot be removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    name: String,
    members: Vec<Member>,
}

impl Group {
    pub fn new<I, S>(name: &str, members: I) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = validate_name(name)?;
        let mut group = Self {
            name,
            members: Vec::new(),
        };
        for member in members {
            group.add_member(member.as_ref())?;
        }
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn creator(&self) -> Option<&Member> {
        self.members.first()
    }

    pub fn contains(&self, member: &Member) -> bool {
        self.members.contains(member)
    }

    pub fn rename(&mut self, name: &str) -> Result<(), GroupError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Adds a member; returns `false` if the name was already present.
    pub fn add_member(&mut self, name: &str) -> Result<bool, GroupError> {
        let member = Member::new(name)?;
        if self.contains(&member) {
            return Ok(false);
        }
        self.members.push(member);
        Ok(true)
    }

    pub fn remove_member(&mut self, name: &str) -> Result<Member, GroupError> {
        let trimmed = name.trim();
        let Some(position) = self.members.iter().position(|m| m.name() == trimmed) else {
            return Err(GroupError::UnknownMember(trimmed.to_owned()));
        };
        if position == 0 {
            return Err(GroupError::CannotRemoveCreator(self.members[0].clone()));
        }
        Ok(self.members.remove(position))
    }
}

fn validate_name(name: &str) -> Result<String, GroupError> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(GroupError::EmptyName);
    }
    if len < MIN_GROUP_NAME_LEN {
        return Err(GroupError::NameTooShort);
    }
    if len > MAX_GROUP_NAME_LEN {
        return Err(GroupError::NameTooLong);
    }
    Ok(trimmed.to_owned())
}

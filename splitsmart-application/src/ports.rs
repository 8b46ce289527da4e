use crate::{error::RepositoryError, model::GroupSnapshot};

/// Data-access collaborator supplying fully loaded group snapshots.
pub trait GroupRepository: Send + Sync {
    fn load_group(&self, name: &str) -> Result<Option<GroupSnapshot>, RepositoryError>;

    fn group_names(&self) -> Result<Vec<String>, RepositoryError>;
}

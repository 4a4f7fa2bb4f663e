use crate::{ActiveRules, Configuration, FileSystem, IssueRecord};

/// Everything the host exposes to a sensor for the duration of one analysis.
/// All accessors are read-only, a context is shared between threads analyzing different files.
pub trait SensorContext: Sync {
    type FileSystem: FileSystem + Sync;

    fn file_system(&self) -> &Self::FileSystem;

    fn active_rules(&self) -> &(dyn ActiveRules + Sync);

    fn config(&self) -> &(dyn Configuration + Sync);

    /// Hand a finished issue to the host.
    fn save(&self, issue: IssueRecord);
}

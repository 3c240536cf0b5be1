/// Filesystem seam for the sweeper. Paths are relative to the
/// implementation's root.
pub trait Workspace: Send + Sync {
    fn exists(&self, path: &str) -> bool;
    fn remove_file(&self, path: &str) -> std::io::Result<()>;
}

/// Resolved sweep settings, independent of where they came from
/// (CLI flags, a preset, or a manifest file).
pub trait SweepConfig: Send + Sync {
    fn root(&self) -> &str;
    fn targets(&self) -> &[String];
    fn dry_run(&self) -> bool;
}

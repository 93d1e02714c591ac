/// Failures raised by linkage validation.
///
/// Link and unlink distinguish exactly two failure kinds: the caller
/// lacking read access to a requested template, and every validation
/// violation detected while checking the linkage itself. Messages name
/// the offending entity (key, application name, or host/template name)
/// so callers can surface them verbatim.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller lacks read access to one or more requested templates.
    #[error("{0}")]
    Permissions(String),

    /// Duplicate inputs, key/name collisions, trigger cross-references,
    /// cycles and double linkages.
    #[error("{0}")]
    Parameters(String),
}

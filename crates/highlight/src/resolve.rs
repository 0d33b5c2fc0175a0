//! Option resolution seam shared with the host.

use pygopts_core::OptionsMap;

/// The option-resolution entry point of a highlight tag handler.
///
/// The host's rendering pipeline invokes this once per highlight block,
/// passing the raw inline argument text attached to the tag. Wrappers hold
/// the resolver they decorate and compose extra steps around it, keeping the
/// calling convention identical on both sides.
pub trait ResolveOptions {
    /// Resolve one tag occurrence's raw inline argument text into options.
    fn resolve(&self, args: &str) -> OptionsMap;
}

impl<F> ResolveOptions for F
where
    F: Fn(&str) -> OptionsMap,
{
    fn resolve(&self, args: &str) -> OptionsMap {
        (self)(args)
    }
}

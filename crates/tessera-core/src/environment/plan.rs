use std::collections::BTreeSet;

use serde::Serialize;

use crate::environment::unit::MemberId;

/// The removals needed to make one compiled unit valid for one environment.
///
/// Built by [`EnvironmentStripper`](super::EnvironmentStripper) and read-only
/// afterwards. Consumers must check [`strip_entire_class`](Self::strip_entire_class)
/// before anything else: [`is_empty`](Self::is_empty) looks at the member and
/// interface sets only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StripPlan {
    pub(crate) strip_entire_class: bool,
    pub(crate) interfaces_to_strip: BTreeSet<String>,
    pub(crate) fields_to_strip: BTreeSet<MemberId>,
    pub(crate) methods_to_strip: BTreeSet<MemberId>,
}

impl StripPlan {
    pub fn strip_entire_class(&self) -> bool {
        self.strip_entire_class
    }

    pub fn interfaces_to_strip(&self) -> &BTreeSet<String> {
        &self.interfaces_to_strip
    }

    pub fn fields_to_strip(&self) -> &BTreeSet<MemberId> {
        &self.fields_to_strip
    }

    pub fn methods_to_strip(&self) -> &BTreeSet<MemberId> {
        &self.methods_to_strip
    }

    /// True when no interface, field or method is to be removed.
    /// Does not consider `strip_entire_class`.
    pub fn is_empty(&self) -> bool {
        self.interfaces_to_strip.is_empty() && self.fields_to_strip.is_empty() && self.methods_to_strip.is_empty()
    }

    /// Unit survives but needs member or interface removal
    pub fn requires_rewrite(&self) -> bool {
        !self.strip_entire_class && !self.is_empty()
    }
}

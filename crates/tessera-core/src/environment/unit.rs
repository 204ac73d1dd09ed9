use std::fmt;

use serde::{Deserialize, Serialize};

use crate::environment::annotation::AnnotationOccurrence;
use crate::environment::plan::StripPlan;

/// Identifies a field or method: its name plus its type or signature
/// descriptor, so overloads and same-named fields stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId {
    pub name: String,
    pub descriptor: String,
}

impl MemberId {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self { name: name.into(), descriptor: descriptor.into() }
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.descriptor)
    }
}

/// The entity a declaration event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration<'a> {
    Class,
    Field(&'a MemberId),
    Method(&'a MemberId),
}

/// One step of the stream a binary reader produces: a declaration together
/// with the environment annotations found on it.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationEvent<'a> {
    pub declaration: Declaration<'a>,
    pub annotations: &'a [AnnotationOccurrence],
}

/// A field or method of a [`CompiledUnit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecl {
    #[serde(flatten)]
    pub id: MemberId,
    #[serde(default)]
    pub annotations: Vec<AnnotationOccurrence>,
}

impl MemberDecl {
    pub fn new(name: &str, descriptor: &str) -> Self {
        Self { id: MemberId::new(name, descriptor), annotations: Vec::new() }
    }

    pub fn annotated(mut self, annotation: AnnotationOccurrence) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// Structural view of a compiled unit, as produced by a binary reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledUnit {
    /// Internal name, e.g. `com/example/Widget`
    pub name: String,
    /// Internal names of the implemented interfaces
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Class-level annotations
    #[serde(default)]
    pub annotations: Vec<AnnotationOccurrence>,
    #[serde(default)]
    pub fields: Vec<MemberDecl>,
    #[serde(default)]
    pub methods: Vec<MemberDecl>,
}

impl CompiledUnit {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            interfaces: Vec::new(),
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Yields the class itself, then each field, then each method
    pub fn declarations(&self) -> impl Iterator<Item = DeclarationEvent<'_>> {
        let class = std::iter::once(DeclarationEvent {
            declaration: Declaration::Class,
            annotations: &self.annotations,
        });
        let fields = self.fields.iter().map(|f| DeclarationEvent {
            declaration: Declaration::Field(&f.id),
            annotations: &f.annotations,
        });
        let methods = self.methods.iter().map(|m| DeclarationEvent {
            declaration: Declaration::Method(&m.id),
            annotations: &m.annotations,
        });
        class.chain(fields).chain(methods)
    }

    /// Rewrites this unit according to `plan`.
    ///
    /// Returns `None` when the plan excludes the whole unit. Otherwise every
    /// declaration not named by the plan is kept as is, in its original order.
    pub fn apply_plan(&self, plan: &StripPlan) -> Option<CompiledUnit> {
        if plan.strip_entire_class() {
            log::debug!("Excluding unit {}", self.name);
            return None;
        }
        if plan.is_empty() {
            return Some(self.clone());
        }

        let mut rewritten = self.clone();
        rewritten.interfaces.retain(|itf| !plan.interfaces_to_strip().contains(itf));
        rewritten.fields.retain(|f| !plan.fields_to_strip().contains(&f.id));
        rewritten.methods.retain(|m| !plan.methods_to_strip().contains(&m.id));
        Some(rewritten)
    }
}

use crate::environment::annotation::AnnotationOccurrence;
use crate::environment::env_type::EnvType;
use crate::environment::plan::StripPlan;
use crate::environment::unit::{CompiledUnit, Declaration, DeclarationEvent};

/// Folds a unit's declaration stream into a [`StripPlan`] for one target
/// environment.
///
/// Create one stripper per unit. Feeding the same events in any order gives
/// the same plan.
#[derive(Debug)]
pub struct EnvironmentStripper {
    env: EnvType,
    plan: StripPlan,
}

impl EnvironmentStripper {
    pub fn new(env: EnvType) -> Self {
        Self { env, plan: StripPlan::default() }
    }

    /// Target environment this stripper checks against
    pub fn env(&self) -> EnvType {
        self.env
    }

    /// Records every annotation of one declaration
    pub fn visit(&mut self, event: DeclarationEvent<'_>) {
        for annotation in event.annotations {
            if annotation.env() == self.env {
                continue;
            }
            match (event.declaration, annotation) {
                (Declaration::Class, AnnotationOccurrence::EnvironmentOnly { .. }) => {
                    self.plan.strip_entire_class = true;
                }
                (Declaration::Class, AnnotationOccurrence::EnvironmentInterface { interface, .. }) => {
                    log::debug!("Stripping interface {} (only on {})", interface, annotation.env());
                    self.plan.interfaces_to_strip.insert(interface.clone());
                }
                (Declaration::Field(id), AnnotationOccurrence::EnvironmentOnly { .. }) => {
                    log::debug!("Stripping field {} (only on {})", id, annotation.env());
                    self.plan.fields_to_strip.insert(id.clone());
                }
                (Declaration::Method(id), AnnotationOccurrence::EnvironmentOnly { .. }) => {
                    log::debug!("Stripping method {} (only on {})", id, annotation.env());
                    self.plan.methods_to_strip.insert(id.clone());
                }
                // Interface declarations only mean something on the class.
                (Declaration::Field(_) | Declaration::Method(_), AnnotationOccurrence::EnvironmentInterface { .. }) => {}
            }
        }
    }

    pub fn finish(self) -> StripPlan {
        self.plan
    }

    /// Runs a full pass over `events`
    pub fn analyze<'a, I>(env: EnvType, events: I) -> StripPlan
    where
        I: IntoIterator<Item = DeclarationEvent<'a>>,
    {
        let mut stripper = Self::new(env);
        for event in events {
            stripper.visit(event);
        }
        stripper.finish()
    }

    pub fn analyze_unit(env: EnvType, unit: &CompiledUnit) -> StripPlan {
        let plan = Self::analyze(env, unit.declarations());
        if plan.strip_entire_class() {
            log::debug!("Unit {} is not available on {}", unit.name, env);
        }
        plan
    }
}

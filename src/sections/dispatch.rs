use crate::{
    anchor,
    content::model::{Section, Theme},
    opts::EngineOpts,
    sections::{
        props::SectionProps,
        registry::{SectionKind, SectionRegistry},
    },
};

/// One retained section, ready for its renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInstruction {
    pub anchor_id: String,
    pub type_tag: String,
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    pub props: SectionProps,
}

/// A section the registry did not know.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedSection {
    pub index: usize,
    pub type_tag: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct DispatchReport {
    pub instructions: Vec<RenderInstruction>,
    pub dropped: Vec<DroppedSection>,
}

/// Fans a page's sections out to renderers.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    registry: SectionRegistry,
    opts: EngineOpts,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(SectionRegistry::standard(), EngineOpts::default())
    }
}

impl Dispatcher {
    pub fn new(registry: SectionRegistry, opts: EngineOpts) -> Self {
        Self { registry, opts }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    pub fn dispatch(&self, sections: &[Section]) -> Vec<RenderInstruction> {
        self.dispatch_report(sections).instructions
    }

    /// Dispatch and also report which sections were dropped.
    ///
    /// Anchors are allocated over the full authored list, so dropping an unknown section never
    /// shifts the ids of the sections after it.
    #[tracing::instrument(skip(self, sections), fields(sections = sections.len()))]
    pub fn dispatch_report(&self, sections: &[Section]) -> DispatchReport {
        let anchors = anchor::allocate(sections);
        let mut report = DispatchReport::default();

        for (index, (section, anchor_id)) in sections.iter().zip(anchors).enumerate() {
            let Some(kind) = self.registry.lookup(&section.type_tag) else {
                tracing::warn!(
                    index,
                    type_tag = %section.type_tag,
                    "dropping section with unregistered type"
                );
                report.dropped.push(DroppedSection {
                    index,
                    type_tag: section.type_tag.clone(),
                });
                continue;
            };

            report.instructions.push(RenderInstruction {
                anchor_id,
                type_tag: section.type_tag.clone(),
                kind,
                theme: section.theme,
                props: SectionProps::build(kind, section, &self.opts),
            });
        }

        tracing::debug!(
            retained = report.instructions.len(),
            dropped = report.dropped.len(),
            "dispatched sections"
        );
        report
    }
}

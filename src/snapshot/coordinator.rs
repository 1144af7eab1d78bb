//! SnapshotCoordinator — one capture end to end.
//!
//! Resolves the loaded hierarchy and the pointer-hovered entity from the
//! external collaborators, runs the walkers, and hands the finished document
//! to the sink. Holds no state between captures.
//!
//! Degradation: a missing collaborator, an empty hierarchy or an empty hover
//! replaces the affected section with an explanatory placeholder line — every
//! capture attempt yields a usable document.

use anyhow::Result;
use log::{debug, error, info};

use crate::config::SnapConfig;
use crate::consts::{
    PLACEHOLDER_EMPTY_SCENE, PLACEHOLDER_NO_COMPONENTS, PLACEHOLDER_NO_HIERARCHY,
    PLACEHOLDER_NO_HIT_TEST, PLACEHOLDER_NO_ROOTS, PLACEHOLDER_NOTHING_HOVERED,
    SECTION_HIERARCHY, SECTION_POINTER,
};
use crate::metrics::{record_capture, record_sink_write_failure};
use crate::scene::{HierarchyProvider, SceneRoots};
use crate::snapshot::document::SnapshotDocument;
use crate::snapshot::hover::{HitTestProvider, Hover, Pointer};
use crate::snapshot::sink::OutputSink;
use crate::walk::{GraphWalker, HierarchyWalker};

pub struct SnapshotCoordinator<'a> {
    cfg: SnapConfig,
    hierarchy: Option<&'a dyn HierarchyProvider>,
    hit_test: Option<&'a dyn HitTestProvider>,
}

impl<'a> SnapshotCoordinator<'a> {
    pub fn new(cfg: SnapConfig) -> Self {
        Self {
            cfg,
            hierarchy: None,
            hit_test: None,
        }
    }

    pub fn with_hierarchy(mut self, provider: &'a dyn HierarchyProvider) -> Self {
        self.hierarchy = Some(provider);
        self
    }

    pub fn with_hit_test(mut self, provider: &'a dyn HitTestProvider) -> Self {
        self.hit_test = Some(provider);
        self
    }

    pub fn config(&self) -> &SnapConfig {
        &self.cfg
    }

    /// One capture. Always returns a document (full, partial or
    /// placeholder-only).
    pub fn capture(&self, pointer: Option<Pointer>) -> SnapshotDocument {
        let scenes = self.list_scenes();
        self.render(&scenes, pointer)
    }

    /// Capture and hand the document to `sink`. A sink failure is counted,
    /// logged and surfaced once; the document is never partially retried.
    pub fn capture_and_deliver(
        &self,
        pointer: Option<Pointer>,
        sink: &mut dyn OutputSink,
    ) -> Result<()> {
        let scenes = self.list_scenes();
        let doc = self.render(&scenes, pointer);
        let label = active_scene_label(&scenes);

        match sink.deliver(&label, &doc) {
            Ok(()) => {
                info!("capture '{}' delivered ({} bytes)", label, doc.len());
                Ok(())
            }
            Err(e) => {
                record_sink_write_failure();
                error!("capture '{}' delivery failed: {:#}", label, e);
                Err(e)
            }
        }
    }

    fn list_scenes(&self) -> Option<Vec<SceneRoots>> {
        self.hierarchy.map(|h| h.list_loaded_scenes())
    }

    fn render(&self, scenes: &Option<Vec<SceneRoots>>, pointer: Option<Pointer>) -> SnapshotDocument {
        record_capture();
        debug!("capture start: {}", self.cfg);

        let mut doc = SnapshotDocument::new(self.cfg.indent_width);
        doc.banner(&format!(
            "Scene snapshot - active scene: {}",
            active_scene_label(scenes)
        ));
        doc.blank();

        // Resolve the hover first so the hierarchy section can mark it focused.
        let hover = match (self.hit_test, pointer) {
            (Some(ht), Some(p)) => ht.resolve_hovered(p),
            _ => None,
        };

        self.render_hierarchy(&mut doc, scenes, &hover);
        doc.blank();
        self.render_pointer_target(&mut doc, &hover);

        doc
    }

    fn render_hierarchy(
        &self,
        doc: &mut SnapshotDocument,
        scenes: &Option<Vec<SceneRoots>>,
        hover: &Option<Hover>,
    ) {
        doc.section(SECTION_HIERARCHY);

        let (provider, list) = match (self.hierarchy, scenes.as_ref()) {
            (Some(p), Some(l)) => (p, l),
            _ => {
                doc.line(0, PLACEHOLDER_NO_HIERARCHY);
                return;
            }
        };
        if list.is_empty() {
            doc.line(0, PLACEHOLDER_NO_ROOTS);
            return;
        }

        let mut walker = HierarchyWalker::new(&self.cfg);
        if let Some(h) = hover {
            walker = walker.with_focus(&h.entity);
        }

        for scene in list {
            doc.blank();
            let suffix = if scene.is_active { " (active scene)" } else { "" };
            doc.line(0, &format!("===== Scene: {} ====={}", scene.name, suffix));
            if scene.roots.is_empty() {
                doc.line(1, PLACEHOLDER_EMPTY_SCENE);
            } else {
                walker.walk(doc, 0, &scene.roots, provider);
            }
        }
    }

    fn render_pointer_target(&self, doc: &mut SnapshotDocument, hover: &Option<Hover>) {
        doc.section(SECTION_POINTER);

        if self.hit_test.is_none() {
            doc.line(0, PLACEHOLDER_NO_HIT_TEST);
            return;
        }
        let hover = match hover {
            Some(h) => h,
            None => {
                doc.line(0, PLACEHOLDER_NOTHING_HOVERED);
                return;
            }
        };

        doc.line(
            0,
            &format!(
                "entity: {} (via {})",
                hover.entity.path(),
                if hover.via_ui { "ui" } else { "scene" }
            ),
        );

        let components = hover.entity.components();
        if components.is_empty() {
            doc.line(0, PLACEHOLDER_NO_COMPONENTS);
            return;
        }

        let walker = GraphWalker::new(&self.cfg);
        for comp in &components {
            walker.walk_component(doc, 0, comp);
        }
    }
}

fn active_scene_label(scenes: &Option<Vec<SceneRoots>>) -> String {
    scenes
        .as_ref()
        .and_then(|list| list.iter().find(|s| s.is_active).or_else(|| list.first()))
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "scene".to_string())
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! In-memory scene graph of the host

use crate::geometry::Mesh;
use serde::{Deserialize, Serialize};

/// Handle to an object linked into a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(usize);

/// Interaction mode of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Object,
    Edit,
}

/// Mesh object linked into the scene
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub mesh: Mesh,
    pub selected: bool,
}

/// Scene holding linked objects, the active object and the mode
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    active: Option<ObjectId>,
    mode: Mode,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            active: None,
            mode: Mode::Object,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn object_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Ids of all selected objects
    pub fn selected(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.selected)
            .map(|(index, _)| ObjectId(index))
            .collect()
    }

    /// Mode changes require an active object
    pub fn can_set_mode(&self) -> bool {
        self.active.is_some()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Selection changes require object mode
    pub fn can_select(&self) -> bool {
        self.mode == Mode::Object
    }

    pub fn deselect_all(&mut self) {
        for object in &mut self.objects {
            object.selected = false;
        }
    }

    pub fn set_active(&mut self, id: ObjectId) {
        if id.0 < self.objects.len() {
            self.active = Some(id);
        }
    }

    pub fn select(&mut self, id: ObjectId) {
        if let Some(object) = self.objects.get_mut(id.0) {
            object.selected = true;
        }
    }

    /// Link a mesh into the scene as a new object
    ///
    /// The object becomes active and selected. Name collisions get a
    /// numeric suffix.
    pub fn link(&mut self, name: &str, mesh: Mesh) -> ObjectId {
        let name = self.unique_name(name);
        let id = ObjectId(self.objects.len());

        self.objects.push(SceneObject {
            name,
            mesh,
            selected: true,
        });
        self.active = Some(id);

        id
    }

    fn unique_name(&self, base: &str) -> String {
        if self.object_by_name(base).is_none() {
            return base.to_string();
        }

        let mut counter = 1;
        loop {
            let candidate = format!("{}.{:03}", base, counter);
            if self.object_by_name(&candidate).is_none() {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_is_empty_object_mode() {
        let scene = Scene::new();
        assert_eq!(scene.object_count(), 0);
        assert_eq!(scene.mode(), Mode::Object);
        assert!(scene.active().is_none());
        assert!(!scene.can_set_mode());
        assert!(scene.can_select());
    }

    #[test]
    fn test_link_makes_active_and_selected() {
        let mut scene = Scene::new();
        let id = scene.link("cube", Mesh::new());

        assert_eq!(scene.active(), Some(id));
        assert!(scene.object(id).unwrap().selected);
        assert_eq!(scene.object(id).unwrap().name, "cube");
        assert!(scene.object_by_name("cube").is_some());
    }

    #[test]
    fn test_name_collisions_get_suffix() {
        let mut scene = Scene::new();
        scene.link("cube", Mesh::new());
        let second = scene.link("cube", Mesh::new());
        let third = scene.link("cube", Mesh::new());

        assert_eq!(scene.object(second).unwrap().name, "cube.001");
        assert_eq!(scene.object(third).unwrap().name, "cube.002");
    }

    #[test]
    fn test_deselect_all() {
        let mut scene = Scene::new();
        let first = scene.link("a", Mesh::new());
        let second = scene.link("b", Mesh::new());
        assert_eq!(scene.selected(), vec![first, second]);

        scene.deselect_all();
        assert!(scene.selected().is_empty());
    }

    #[test]
    fn test_selection_blocked_in_edit_mode() {
        let mut scene = Scene::new();
        scene.link("a", Mesh::new());

        assert!(scene.can_set_mode());
        scene.set_mode(Mode::Edit);
        assert!(!scene.can_select());
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! End-to-end import tests driven through the registered operator
//!
//! Most tests swap the OpenSCAD binary for a small shell script that
//! copies a prepared STL to the requested output, keeping them hermetic.
//! The last test uses the real binary and skips when it is missing.

use anyhow::Result;
use approx::assert_relative_eq;
use scadport::addon::{self, ImporterPreferences};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
mod stubbed {
    use anyhow::Result;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};
    use scadport::addon::ImporterPreferences;
    use scadport::geometry::{Mesh, Triangle, Vertex};
    use scadport::host::{Host, Mode, OperatorStatus};
    use serde_json::json;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Axis-aligned cube centered at the origin
    fn cube_mesh(half: f64) -> Mesh {
        let h = half;
        let positions = [
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
        ];

        let faces: [([usize; 3], Vector3<f64>); 12] = [
            ([0, 3, 2], Vector3::new(0.0, 0.0, -1.0)),
            ([0, 2, 1], Vector3::new(0.0, 0.0, -1.0)),
            ([4, 5, 6], Vector3::new(0.0, 0.0, 1.0)),
            ([4, 6, 7], Vector3::new(0.0, 0.0, 1.0)),
            ([0, 1, 5], Vector3::new(0.0, -1.0, 0.0)),
            ([0, 5, 4], Vector3::new(0.0, -1.0, 0.0)),
            ([2, 3, 7], Vector3::new(0.0, 1.0, 0.0)),
            ([2, 7, 6], Vector3::new(0.0, 1.0, 0.0)),
            ([1, 2, 6], Vector3::new(1.0, 0.0, 0.0)),
            ([1, 6, 5], Vector3::new(1.0, 0.0, 0.0)),
            ([3, 0, 4], Vector3::new(-1.0, 0.0, 0.0)),
            ([3, 4, 7], Vector3::new(-1.0, 0.0, 0.0)),
        ];

        let mut mesh = Mesh::new();
        for (indices, normal) in faces {
            let corners = indices.map(|i| mesh.add_vertex(Vertex::new(positions[i], normal)));
            mesh.add_triangle(Triangle::new(corners));
        }
        mesh
    }

    fn write_script(dir: &Path, body: &str) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("openscad");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body))?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        Ok(script)
    }

    /// Fake OpenSCAD: copies a fixture STL to the `-o` output path
    fn fake_openscad(dir: &Path, fixture: &Path) -> Result<PathBuf> {
        write_script(dir, &format!("cp \"{}\" \"$2\"", fixture.display()))
    }

    /// Host wired to a fake OpenSCAD producing a cube of the given half extent
    fn host_with_fake_openscad(dir: &Path, half: f64) -> Result<Host> {
        let fixture = dir.join("fixture.stl");
        scadport::write_stl(&cube_mesh(half), &fixture)?;
        let script = fake_openscad(dir, &fixture)?;

        let mut host = scadport::install()?;
        ImporterPreferences {
            openscad_path: script,
        }
        .write_to_store(&mut host.preferences)?;
        Ok(host)
    }

    #[test]
    fn test_import_links_scaled_object() -> Result<()> {
        let temp = TempDir::new()?;
        let mut host = host_with_fake_openscad(temp.path(), 1.0)?;

        let scad = temp.path().join("model.scad");
        fs::write(&scad, "cube(2, center = true);")?;

        let status = host.invoke(
            scadport::addon::IDNAME,
            &json!({ "filepath": scad, "scale": 2.5 }),
        )?;

        assert_eq!(status, OperatorStatus::Finished);
        assert_eq!(host.scene.object_count(), 1);

        let id = host.scene.active().unwrap();
        let object = host.scene.object(id).unwrap();
        assert_eq!(object.name, "model");
        assert!(object.selected);

        // Fixture cube spans 2.0 per axis, scaled by 2.5
        let size = object.mesh.bounding_box().size();
        assert_relative_eq!(size.x, 5.0, epsilon = 1e-6);
        assert_relative_eq!(size.y, 5.0, epsilon = 1e-6);
        assert_relative_eq!(size.z, 5.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_import_default_scale_is_identity() -> Result<()> {
        let temp = TempDir::new()?;
        let mut host = host_with_fake_openscad(temp.path(), 1.5)?;

        let scad = temp.path().join("model.scad");
        fs::write(&scad, "cube(3, center = true);")?;

        host.invoke(scadport::addon::IDNAME, &json!({ "filepath": scad }))?;

        let id = host.scene.active().unwrap();
        let size = host.scene.object(id).unwrap().mesh.bounding_box().size();
        assert_relative_eq!(size.x, 3.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_object_name_stops_at_first_dot() -> Result<()> {
        let temp = TempDir::new()?;
        let mut host = host_with_fake_openscad(temp.path(), 1.0)?;

        let scad = temp.path().join("gear.v2.scad");
        fs::write(&scad, "sphere(1);")?;

        host.invoke(scadport::addon::IDNAME, &json!({ "filepath": scad }))?;

        let id = host.scene.active().unwrap();
        assert_eq!(host.scene.object(id).unwrap().name, "gear");
        Ok(())
    }

    #[test]
    fn test_reimport_creates_independent_object() -> Result<()> {
        let temp = TempDir::new()?;
        let mut host = host_with_fake_openscad(temp.path(), 1.0)?;

        let scad = temp.path().join("model.scad");
        fs::write(&scad, "cube(2, center = true);")?;

        host.invoke(
            scadport::addon::IDNAME,
            &json!({ "filepath": scad, "scale": 1.0 }),
        )?;
        let first = host.scene.active().unwrap();

        host.invoke(
            scadport::addon::IDNAME,
            &json!({ "filepath": scad, "scale": 4.0 }),
        )?;
        let second = host.scene.active().unwrap();

        assert_eq!(host.scene.object_count(), 2);
        assert_ne!(first, second);
        assert_eq!(host.scene.object(first).unwrap().name, "model");
        assert_eq!(host.scene.object(second).unwrap().name, "model.001");

        // First import keeps its own geometry and loses the selection
        let first_size = host.scene.object(first).unwrap().mesh.bounding_box().size();
        let second_size = host.scene.object(second).unwrap().mesh.bounding_box().size();
        assert_relative_eq!(first_size.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(second_size.x, 8.0, epsilon = 1e-6);
        assert!(!host.scene.object(first).unwrap().selected);
        assert!(host.scene.object(second).unwrap().selected);
        Ok(())
    }

    #[test]
    fn test_import_returns_scene_to_object_mode() -> Result<()> {
        let temp = TempDir::new()?;
        let mut host = host_with_fake_openscad(temp.path(), 1.0)?;

        let existing = host.scene.link("existing", Mesh::new());
        host.scene.set_mode(Mode::Edit);

        let scad = temp.path().join("model.scad");
        fs::write(&scad, "cube(1);")?;
        host.invoke(scadport::addon::IDNAME, &json!({ "filepath": scad }))?;

        assert_eq!(host.scene.mode(), Mode::Object);
        assert_eq!(host.scene.object_count(), 2);
        assert!(!host.scene.object(existing).unwrap().selected);
        Ok(())
    }

    #[test]
    fn test_temp_stl_is_removed_after_import() -> Result<()> {
        let temp = TempDir::new()?;
        let fixture = temp.path().join("fixture.stl");
        scadport::write_stl(&cube_mesh(1.0), &fixture)?;

        let marker = temp.path().join("output_path.txt");
        let script = write_script(
            temp.path(),
            &format!(
                "echo \"$2\" > \"{}\"\ncp \"{}\" \"$2\"",
                marker.display(),
                fixture.display()
            ),
        )?;

        let mut host = scadport::install()?;
        ImporterPreferences {
            openscad_path: script,
        }
        .write_to_store(&mut host.preferences)?;

        let scad = temp.path().join("model.scad");
        fs::write(&scad, "cube(1);")?;
        host.invoke(scadport::addon::IDNAME, &json!({ "filepath": scad }))?;

        let recorded = PathBuf::from(fs::read_to_string(&marker)?.trim());
        assert_eq!(
            recorded.file_name().and_then(|name| name.to_str()),
            Some("tempexport.stl")
        );
        assert!(!recorded.exists());
        Ok(())
    }

    #[test]
    fn test_failed_render_finishes_without_touching_scene() -> Result<()> {
        let temp = TempDir::new()?;
        let script = write_script(temp.path(), "exit 1")?;

        let mut host = scadport::install()?;
        ImporterPreferences {
            openscad_path: script,
        }
        .write_to_store(&mut host.preferences)?;

        let existing = host.scene.link("existing", Mesh::new());

        let scad = temp.path().join("model.scad");
        fs::write(&scad, "cube(1);")?;
        let status = host.invoke(scadport::addon::IDNAME, &json!({ "filepath": scad }))?;

        assert_eq!(status, OperatorStatus::Finished);
        assert_eq!(host.scene.object_count(), 1);
        assert!(host.scene.object(existing).unwrap().selected);
        Ok(())
    }
}

#[test]
fn test_import_with_real_openscad() -> Result<()> {
    let mut host = scadport::install()?;
    let prefs = ImporterPreferences::from_store(&host.preferences);

    if !addon::is_openscad_available(&prefs.openscad_path) {
        println!("OpenSCAD not available, skipping");
        return Ok(());
    }

    let temp = TempDir::new()?;
    let scad = temp.path().join("cube.scad");
    fs::write(&scad, "cube([2, 2, 2], center = true);")?;

    host.invoke(
        addon::IDNAME,
        &json!({ "filepath": scad, "scale": 3.0 }),
    )?;

    assert_eq!(host.scene.object_count(), 1);
    let id = host.scene.active().unwrap();
    let object = host.scene.object(id).unwrap();
    assert_eq!(object.name, "cube");

    let size = object.mesh.bounding_box().size();
    assert_relative_eq!(size.x, 6.0, epsilon = 1e-3);
    assert_relative_eq!(size.y, 6.0, epsilon = 1e-3);
    assert_relative_eq!(size.z, 6.0, epsilon = 1e-3);
    Ok(())
}

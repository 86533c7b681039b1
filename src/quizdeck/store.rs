//! Plain JSON snapshot persistence for the whole model. A missing file means
//! an empty model; the snapshot is rewritten wholesale on save.

use crate::error::Result;
use crate::model::Model;
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<Model> {
    if !path.exists() {
        return Ok(Model::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save(path: &Path, model: &Model) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(model)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;

    #[test]
    fn missing_file_loads_an_empty_model() {
        let dir = tempfile::tempdir().unwrap();
        let model = load(&dir.path().join("records.json")).unwrap();
        assert!(model.students().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("records.json");

        let mut model = Model::new();
        model
            .add_student(Student::new(
                "Alice Pauline".into(),
                Some("94351253".into()),
                None,
            ))
            .unwrap();
        save(&path, &model).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.students(), model.students());
    }

    #[test]
    fn corrupt_snapshot_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "not json").unwrap();
        assert!(load(&path).is_err());
    }
}

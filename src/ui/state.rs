use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// What the browse shell remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub query: String,
}

pub fn save(path: &str, state: &SavedState) -> Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(state)?)?;
    Ok(())
}

/// Missing file means nothing was saved yet.
pub fn load(path: &str) -> Result<Option<SavedState>> {
    if !Path::new(path).exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&contents)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_saves_and_restores_the_query() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("booklist_state.json");
        let path = path.to_str().unwrap();

        assert_eq!(load(path).unwrap(), None);

        let state = SavedState {
            query: String::from("dune messiah"),
        };
        save(path, &state).unwrap();
        assert_eq!(load(path).unwrap(), Some(state));
    }

    #[test]
    fn it_errors_on_a_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("booklist_state.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(path.to_str().unwrap()).is_err());
    }
}

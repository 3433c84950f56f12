use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StateStorage;
use crate::error::AppResult;

/// One `<key>.json` file per slice inside `dir`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStorage for FileStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        // Write then rename so a reader never sees half a slice.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use crate::storage::{BALANCE_KEY, load_state, save_state};
    use chrono::Utc;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("betbliss-test-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_read_missing_key() {
        let dir = temp_dir();
        let storage = FileStorage::new(&dir).unwrap();
        assert_eq!(storage.read(BALANCE_KEY).unwrap(), None);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = temp_dir();
        let mut state = GameState::new(100_000);
        state.settle_jackpot(&[1, 2, 3, 4, 5, 6], vec![1, 2, 3, 7, 8, 9], 1, Utc::now());
        save_state(&FileStorage::new(&dir).unwrap(), &state).unwrap();

        assert!(dir.join("betbliss_balance.json").exists());
        let reopened = FileStorage::new(&dir).unwrap();
        assert_eq!(load_state(&reopened, 100_000), state);
        fs::remove_dir_all(dir).ok();
    }
}

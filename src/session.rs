//! The "logged in" flag of the user, persisted in a local file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct SessionData {
    logged_in: bool,
}

/// Whether the user is logged in.
///
/// This is a local flag only, there is no credential involved.
#[derive(Debug, PartialEq)]
pub struct Session {
    backing_file: PathBuf,
    data: SessionData,
}

impl Session {
    /// The default location of the session file
    pub fn default_file() -> PathBuf {
        std::env::temp_dir().join("task-calendar-session.json")
    }

    /// Read a session from its backing file.
    /// A missing file means the user is logged out
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let data = match std::fs::File::open(path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No session file at {:?}, user is logged out", path);
                SessionData::default()
            },
            Err(err) => {
                return Err(Error::Session(format!("Unable to open file {:?}: {}", path, err)));
            },
            Ok(file) => serde_json::from_reader(file)
                .map_err(|err| Error::Session(format!("Invalid session file {:?}: {}", path, err)))?,
        };

        Ok(Self {
            backing_file: PathBuf::from(path),
            data,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.data.logged_in
    }

    pub fn log_in(&mut self) -> Result<(), Error> {
        self.data.logged_in = true;
        self.save_to_file()
    }

    pub fn log_out(&mut self) -> Result<(), Error> {
        self.data.logged_in = false;
        self.save_to_file()
    }

    /// Store the current session to its backing file
    fn save_to_file(&self) -> Result<(), Error> {
        let path = &self.backing_file;
        let file = std::fs::File::create(path)
            .map_err(|err| Error::Session(format!("Unable to save file {:?}: {}", path, err)))?;

        serde_json::to_writer(file, &self.data)
            .map_err(|err| Error::Session(format!("Unable to serialize: {}", err)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_in_and_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::from_file(&path).unwrap();
        assert!(session.is_logged_in() == false);

        session.log_in().unwrap();
        let retrieved = Session::from_file(&path).unwrap();
        assert!(retrieved.is_logged_in());
        assert_eq!(session, retrieved);

        session.log_out().unwrap();
        assert!(Session::from_file(&path).unwrap().is_logged_in() == false);
    }

    #[test]
    fn invalid_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(Session::from_file(&path), Err(Error::Session(_))));
    }
}

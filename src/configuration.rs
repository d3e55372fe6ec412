//! Loads login configuration from a YAML file. The file holds the username
//! and password, and optionally the base64 engine selector:
//!
//! ```yaml
//! username: Aladdin
//! password: open sesame
//! encoder: buffer
//! ```

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use log::debug;

use crate::basic::BasicLogin;

/// Reads a [`BasicLogin`] from the YAML file at `path`.
pub fn load_login(path: &Path) -> Result<BasicLogin> {
    let login = serde_yaml::from_reader(
        File::open(path)
            .with_context(|| format!("Error opening login configuration file {path:?}"))?,
    )
    .with_context(|| format!("Error parsing login configuration file {path:?}"))?;
    debug!("Loaded login configuration from {path:?}");
    Ok(login)
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::Path};

    use super::load_login;

    #[test]
    fn loads_a_login_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username: Aladdin\npassword: open sesame").unwrap();

        let login = load_login(file.path()).unwrap();
        assert_eq!(
            login.authorization().unwrap().header_value(),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn missing_file_names_the_path_in_the_error() {
        let err = load_login(Path::new("does-not-exist.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.yaml"));
    }
}

//! Resource declarations: icon, data files, hidden imports.

use crate::bundler::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

/// Resources bundled alongside the application code.
#[derive(Debug, Clone, Default)]
pub struct ResourceSettings {
    /// Icon file embedded as the application icon (ICO or PNG).
    pub icon: Option<PathBuf>,

    /// Non-code resources copied into the bundle.
    pub data_files: Vec<DataFile>,

    /// Modules the bundling tool must include despite not detecting them
    /// through static analysis.
    pub hidden_imports: Vec<String>,
}

/// A data file declaration parsed from the bundling tool's `SOURCE;DEST`
/// syntax.
///
/// `;` is accepted on every platform (the syntax the reference recipe uses);
/// `:` is additionally accepted on non-Windows hosts, mirroring the tool's
/// own `os.pathsep` convention. [`DataFile::to_argument`] always composes
/// with the host platform's separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    /// Source path on the build host.
    pub source: PathBuf,

    /// Destination directory inside the bundle, relative to its root.
    pub dest: String,
}

impl DataFile {
    /// Separator the bundling tool expects on the current host.
    pub const HOST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

    /// Composes the `--add-data` argument value for the current host.
    pub fn to_argument(&self) -> String {
        format!(
            "{}{}{}",
            self.source.display(),
            Self::HOST_SEPARATOR,
            self.dest
        )
    }
}

impl FromStr for DataFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Rightmost separator wins, so Windows drive prefixes survive `:`
        // splitting on hosts that accept it.
        let split = s
            .rfind(';')
            .or_else(|| if cfg!(windows) { None } else { s.rfind(':') });

        let idx = match split {
            Some(idx) => idx,
            None => return Err(Error::DataFileSyntax(s.to_string())),
        };

        let source = s[..idx].trim();
        let dest = s[idx + 1..].trim();
        if source.is_empty() || dest.is_empty() {
            return Err(Error::DataFileSyntax(s.to_string()));
        }

        Ok(DataFile {
            source: PathBuf::from(source),
            dest: dest.to_string(),
        })
    }
}

impl<'de> serde::Deserialize<'de> for DataFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_pair() {
        let df: DataFile = "icon.ico;.".parse().unwrap();
        assert_eq!(df.source, PathBuf::from("icon.ico"));
        assert_eq!(df.dest, ".");
    }

    #[cfg(not(windows))]
    #[test]
    fn parses_colon_pair_on_unix() {
        let df: DataFile = "assets/palette.json:assets".parse().unwrap();
        assert_eq!(df.source, PathBuf::from("assets/palette.json"));
        assert_eq!(df.dest, "assets");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!("just-a-path".parse::<DataFile>().is_err());
    }

    #[test]
    fn rejects_empty_sides() {
        assert!(";dest".parse::<DataFile>().is_err());
        assert!("src;".parse::<DataFile>().is_err());
    }

    #[test]
    fn argument_uses_host_separator() {
        let df: DataFile = "icon.ico;.".parse().unwrap();
        let expected = format!("icon.ico{}.", DataFile::HOST_SEPARATOR);
        assert_eq!(df.to_argument(), expected);
    }

    #[test]
    fn deserializes_from_toml_string() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            data: Vec<DataFile>,
        }
        let wrapper: Wrapper = toml::from_str(r#"data = ["icon.ico;."]"#).unwrap();
        assert_eq!(wrapper.data.len(), 1);
        assert_eq!(wrapper.data[0].dest, ".");
    }
}

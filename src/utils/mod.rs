pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct ExcludeConfig {
        pub paths: Option<Vec<String>>,
        pub names: Option<Vec<String>>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct PrintConfig {
        pub attributes: Option<Vec<String>>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct EditorConfig {
        pub command: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct ParserConfig {
        /// Extra clang arguments prepended to the ones given on the CLI.
        pub args: Option<Vec<String>>,
    }

    /// Optional `cpp-call-explorer.toml`: defaults that explicit CLI flags
    /// override.
    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub exclude: Option<ExcludeConfig>,
        pub print: Option<PrintConfig>,
        pub editor: Option<EditorConfig>,
        pub parser: Option<ParserConfig>,
    }

    fn default_config_path(root: &Path) -> PathBuf {
        root.join("cpp-call-explorer.toml")
    }

    #[must_use]
    pub fn load_config_at(path: &Path) -> Option<Config> {
        let data = fs::read_to_string(path).ok()?;
        toml::from_str::<Config>(&data).ok()
    }

    #[must_use]
    pub fn load_config_near(root: &Path) -> Option<Config> {
        let p = default_config_path(root);
        if p.exists() {
            load_config_at(&p)
        } else {
            None
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;

        #[test]
        fn test_full_config_round_trip() {
            let mut f = tempfile::NamedTempFile::new().unwrap();
            write!(
                f,
                r#"
                [exclude]
                paths = ["/usr", "/opt"]
                names = ["std::"]

                [print]
                attributes = ["Deprecated"]

                [editor]
                command = "nvim"

                [parser]
                args = ["-std=c++17"]
                "#
            )
            .unwrap();
            let cfg = load_config_at(f.path()).expect("config parses");
            assert_eq!(cfg.exclude.as_ref().unwrap().paths.as_deref().unwrap().len(), 2);
            assert_eq!(cfg.editor.unwrap().command.as_deref(), Some("nvim"));
            assert_eq!(cfg.parser.unwrap().args.as_deref(), Some(&["-std=c++17".to_string()][..]));
        }

        #[test]
        fn test_missing_file_yields_none() {
            assert!(load_config_at(Path::new("/nonexistent/cpp-call-explorer.toml")).is_none());
        }

        #[test]
        fn test_empty_config_is_valid() {
            let mut f = tempfile::NamedTempFile::new().unwrap();
            write!(f, "").unwrap();
            let cfg = load_config_at(f.path()).expect("empty config parses");
            assert!(cfg.exclude.is_none());
        }
    }
}

//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "support-crew";
const PROJECT_FILES: [&str; 2] = ["support-crew.toml", ".support-crew.toml"];
const ENV_PREFIX: &str = "SUPPORT_CREW_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `SUPPORT_CREW_` prefix, `__` between sections
    ///    (`SUPPORT_CREW_LLM__MODEL=gpt-4.1`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./support-crew.toml` or `./.support-crew.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/support-crew/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(Self::global_config_path().as_deref(), config_path)
            .extract()
            .map_err(Box::new)
    }

    fn figment(global_path: Option<&Path>, config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global) = global_path
            && global.exists()
        {
            figment = figment.merge(Toml::file(global));
        }

        if let Some(project) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations (for `--show-config`)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] Environment: {}*", ENV_PREFIX));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{:<5}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_domain::Model;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.crew.max_tool_turns, 8);
        assert!(config.crew.memory);
    }

    #[test]
    fn test_global_config_path_names_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("support-crew/config.toml"));
        }
    }

    #[test]
    fn test_project_file_overrides_global() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                r#"
[llm]
model = "gpt-4o"
max_tokens = 1000

[crew]
default_company = "Google"
"#,
            )?;
            jail.create_file(
                "support-crew.toml",
                r#"
[llm]
model = "gpt-4.1-mini"
"#,
            )?;

            let config: FileConfig =
                ConfigLoader::figment(Some(Path::new("global.toml")), None).extract()?;
            assert_eq!(config.llm.model(), Model::Gpt41Mini);
            assert_eq!(config.llm.max_tokens, 1000);
            assert_eq!(config.crew.default_company, "Google");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project() {
        Jail::expect_with(|jail| {
            jail.create_file(".support-crew.toml", "[server]\nport = 9000\n")?;
            jail.create_file("custom.toml", "[server]\nport = 9100\n")?;

            let config: FileConfig =
                ConfigLoader::figment(None, Some(Path::new("custom.toml"))).extract()?;
            assert_eq!(config.server.port, 9100);
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("support-crew.toml", "[crew]\nmax_tool_turns = 4\n")?;
            jail.set_env("SUPPORT_CREW_CREW__MAX_TOOL_TURNS", "2");
            jail.set_env("SUPPORT_CREW_PROVIDERS__OPENAI__BASE_URL", "http://localhost:8000");

            let config: FileConfig = ConfigLoader::figment(None, None).extract()?;
            assert_eq!(config.crew.max_tool_turns, 2);
            assert_eq!(config.providers.openai.base_url, "http://localhost:8000");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_error() {
        Jail::expect_with(|jail| {
            jail.create_file("support-crew.toml", "[server]\nport = \"eighty\"\n")?;
            let result: Result<FileConfig, _> = ConfigLoader::figment(None, None).extract();
            assert!(result.is_err());
            Ok(())
        });
    }
}
